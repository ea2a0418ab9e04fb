//! Console rendering of a sequence, one line per delivered value.

use std::{fmt, io};

use crate::{handle::GeneratorHandle, producer::Producer, state::Gap};

pub const START_MESSAGE: &str = "Starting random sequence generation...";
pub const STOP_MESSAGE: &str = "Sequence stopped (difference was less than 16).";

/// One reported value together with the value delivered before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generated<T> {
    pub value: T,
    pub previous: Option<T>,
}

impl<T: Gap + fmt::Display> fmt::Display for Generated<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generated: {}", self.value)?;
        match self.previous {
            Some(previous) => write!(f, " (Difference: {})", self.value.gap(previous)),
            None => write!(f, " (First value)"),
        }
    }
}

/// Pull every remaining value from `handle`, writing one line per value and
/// the stop message at the end.
///
/// On a handle that is already running, the first line is measured against
/// the value it currently holds.
pub fn write_transcript<P, W>(handle: &mut GeneratorHandle<P>, out: &mut W) -> io::Result<()>
where
    P: Producer,
    P::Item: fmt::Display,
    W: io::Write,
{
    let mut previous = handle.current().ok();
    for value in handle.cursor() {
        writeln!(out, "{}", Generated { value, previous })?;
        previous = Some(value);
    }
    writeln!(out, "{STOP_MESSAGE}")
}
