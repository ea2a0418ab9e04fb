//! Per-generator emission record and the read-only view handed to producers.
//!
//! Every value a producer emits passes through the emission step of its state record, which
//! is the single place the stop condition is evaluated: once two consecutive
//! values differ by less than [`STOP_THRESHOLD`], the stop flag is raised and
//! stays raised. The value that raised it is still delivered.

use std::{cell::Cell, fmt, rc::Rc};

/// Two consecutive emissions closer than this end the sequence.
pub const STOP_THRESHOLD: u64 = 16;

/// Absolute distance between two emitted values.
///
/// Implemented for the primitive integers through `abs_diff`, so the
/// distance never overflows.
pub trait Gap: Copy + fmt::Debug {
    fn gap(self, other: Self) -> u64;
}

macro_rules! impl_gap {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Gap for $ty {
                #[inline]
                fn gap(self, other: Self) -> u64 {
                    self.abs_diff(other) as u64
                }
            }
        )*
    };
}

impl_gap!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Emission history of one generator.
///
/// Shared between the owning handle and the producer's [`StateAccessor`];
/// only the handle writes to it.
pub(crate) struct SequenceState<T> {
    current: Cell<Option<T>>,
    previous: Cell<Option<T>>,
    first_emission: Cell<bool>,
    stop: Cell<bool>,
    emitted: Cell<usize>,
    last_gap: Cell<Option<u64>>,
}

impl<T: Gap> SequenceState<T> {
    pub(crate) fn new() -> Self {
        Self {
            current: Cell::new(None),
            previous: Cell::new(None),
            first_emission: Cell::new(true),
            stop: Cell::new(false),
            emitted: Cell::new(0),
            last_gap: Cell::new(None),
        }
    }

    /// Record `value` as the newest emission and evaluate the stop condition.
    pub(crate) fn emit(&self, value: T) -> T {
        self.current.set(Some(value));

        if self.first_emission.replace(false) {
            self.last_gap.set(None);
        } else if let Some(previous) = self.previous.get() {
            let gap = value.gap(previous);
            self.last_gap.set(Some(gap));
            if gap < STOP_THRESHOLD && !self.stop.replace(true) {
                tracing::debug!(?value, ?previous, gap, "stop condition met");
            }
        }

        self.previous.set(Some(value));
        self.emitted.set(self.emitted.get() + 1);
        value
    }

    pub(crate) fn current(&self) -> Option<T> {
        self.current.get()
    }

    /// Forget the current value; used once the computation has finished.
    pub(crate) fn clear_current(&self) {
        self.current.set(None);
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.stop.get()
    }

    pub(crate) fn emitted(&self) -> usize {
        self.emitted.get()
    }

    pub(crate) fn last_gap(&self) -> Option<u64> {
        self.last_gap.get()
    }
}

impl<T: Gap> fmt::Debug for SequenceState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceState")
            .field("current", &self.current.get())
            .field("previous", &self.previous.get())
            .field("first_emission", &self.first_emission.get())
            .field("stop", &self.stop.get())
            .field("emitted", &self.emitted.get())
            .finish()
    }
}

/// A producer's view of its own emission record.
///
/// Handed out exactly once, when the producer is attached to its handle. The
/// only thing a producer can learn through it is whether it should stop.
pub struct StateAccessor<T> {
    state: Rc<SequenceState<T>>,
}

impl<T: Gap> StateAccessor<T> {
    pub(crate) fn new(state: Rc<SequenceState<T>>) -> Self {
        Self { state }
    }

    /// Whether the most recent emission was within [`STOP_THRESHOLD`] of the
    /// one before it (or any earlier pair was).
    pub fn should_stop(&self) -> bool {
        self.state.should_stop()
    }
}

impl<T: Gap> fmt::Debug for StateAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateAccessor")
            .field("should_stop", &self.should_stop())
            .finish()
    }
}
