//! Traits describing a computation that a [`GeneratorHandle`] can drive.
//!
//! A producer comes in two phases:
//!
//! - [`Producer`] is the computation before it has run at all. Attaching it
//!   hands over the [`StateAccessor`] for its sequence, exactly once, and
//!   yields the body.
//! - [`Resume`] is that body. Every call to [`Resume::resume`] runs it from
//!   its last suspension point to the next emission, or to completion.
//!
//! The body keeps whatever it needs between emissions in its own fields; no
//! call stack is preserved across a suspension.
//!
//! [`GeneratorHandle`]: crate::GeneratorHandle

use crate::{
    state::{Gap, StateAccessor},
    step::Step,
};

/// A suspended computation that emits values one at a time.
///
/// ```rust
/// use lazy_seq::{Resume, Step};
///
/// struct Countdown(u8);
///
/// impl Resume for Countdown {
///     type Item = u8;
///
///     fn resume(&mut self) -> Step<u8> {
///         match self.0.checked_sub(1) {
///             Some(n) => {
///                 self.0 = n;
///                 Step::Yielded(n)
///             }
///             None => Step::Complete(()),
///         }
///     }
/// }
///
/// let mut body = Countdown(2);
/// assert_eq!(body.resume(), Step::Yielded(1));
/// assert_eq!(body.resume(), Step::Yielded(0));
/// assert!(body.resume().is_complete());
/// ```
pub trait Resume {
    /// Type of the emitted values.
    type Item;

    /// Run until the next emission (`Yielded`) or until the computation ends
    /// (`Complete`).
    fn resume(&mut self) -> Step<Self::Item>;
}

/// A computation that has not started yet.
///
/// `attach` is the one-time hand-off of the sequence's [`StateAccessor`]. It
/// runs inside the first [`start`](crate::GeneratorHandle::start), produces
/// no value, and is invisible to the consumer.
pub trait Producer {
    /// Type of the emitted values.
    type Item: Gap;
    /// The running computation.
    type Body: Resume<Item = Self::Item>;

    fn attach(self, state: StateAccessor<Self::Item>) -> Self::Body;
}
