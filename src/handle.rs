//! Owning handle over a suspended producer and its pull-based protocol.
//!
//! A [`GeneratorHandle`] moves through three stages:
//!
//! ```text
//! NotStarted --start--> Active --advance--> Active --advance--> Exhausted
//! ```
//!
//! Nothing runs until [`start`](GeneratorHandle::start). Every value the body
//! yields goes through the emission step of the handle's sequence state
//! before the consumer sees it. `Exhausted` is terminal.
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq::{GeneratorError, GeneratorHandle, Step, replay};
//!
//! let mut handle = GeneratorHandle::new(replay([200, 50, 40]));
//! assert_eq!(handle.current(), Err(GeneratorError::NotStarted));
//!
//! assert_eq!(handle.start(), Step::Yielded(200));
//! assert_eq!(handle.advance(), Ok(Step::Yielded(50)));
//! assert_eq!(handle.advance(), Ok(Step::Yielded(40)));
//! assert!(handle.should_stop());
//!
//! assert_eq!(handle.advance(), Ok(Step::Complete(())));
//! assert!(handle.is_exhausted());
//! assert_eq!(handle.advance(), Err(GeneratorError::Exhausted));
//! ```

use std::{fmt, rc::Rc};

use crate::{
    cursor::{Cursor, IntoIter},
    error::{GeneratorError, Result},
    producer::{Producer, Resume},
    state::{SequenceState, StateAccessor},
    step::Step,
};

enum Stage<P: Producer> {
    NotStarted(P),
    Active(P::Body),
    Exhausted,
}

impl<P: Producer> Stage<P> {
    /// Move the stage out, leaving `Exhausted` behind. A body that panics
    /// while it is out can therefore never be resumed again.
    fn take(&mut self) -> Self {
        std::mem::replace(self, Stage::Exhausted)
    }

    fn name(&self) -> &'static str {
        match self {
            Stage::NotStarted(_) => "NotStarted",
            Stage::Active(_) => "Active",
            Stage::Exhausted => "Exhausted",
        }
    }
}

/// Single owner of a suspended producer and its sequence state.
///
/// Dropping a handle that is not exhausted drops the suspended body without
/// resuming it. Moving the computation out with [`take`](Self::take) leaves
/// an inert, exhausted handle behind.
pub struct GeneratorHandle<P: Producer> {
    stage: Stage<P>,
    state: Rc<SequenceState<P::Item>>,
}

impl<P: Producer> GeneratorHandle<P> {
    /// Wrap `producer` without running any of it.
    pub fn new(producer: P) -> Self {
        Self {
            stage: Stage::NotStarted(producer),
            state: Rc::new(SequenceState::new()),
        }
    }

    /// Run the producer up to its first emission.
    ///
    /// Idempotent: on a handle that is already running this returns the
    /// current value again, and on an exhausted handle it returns
    /// `Step::Complete`.
    pub fn start(&mut self) -> Step<P::Item> {
        match self.stage.take() {
            Stage::NotStarted(producer) => {
                tracing::trace!("starting generator");
                let body = producer.attach(StateAccessor::new(Rc::clone(&self.state)));
                self.resume_body(body)
            }
            Stage::Active(body) => {
                self.stage = Stage::Active(body);
                Step::from(self.state.current())
            }
            Stage::Exhausted => Step::Complete(()),
        }
    }

    /// Resume the producer from its last suspension point.
    ///
    /// On a handle that has not been started this is the same as
    /// [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Exhausted`] once the producer has completed.
    pub fn advance(&mut self) -> Result<Step<P::Item>> {
        match self.stage.take() {
            stage @ Stage::NotStarted(_) => {
                self.stage = stage;
                Ok(self.start())
            }
            Stage::Active(body) => Ok(self.resume_body(body)),
            Stage::Exhausted => Err(GeneratorError::Exhausted),
        }
    }

    /// The most recently emitted value.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::NotStarted`] before the first
    /// [`start`](Self::start) and [`GeneratorError::Exhausted`] after the
    /// producer has completed.
    pub fn current(&self) -> Result<P::Item> {
        match self.stage {
            Stage::NotStarted(_) => Err(GeneratorError::NotStarted),
            Stage::Active(_) => self.state.current().ok_or(GeneratorError::Exhausted),
            Stage::Exhausted => Err(GeneratorError::Exhausted),
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.stage, Stage::NotStarted(_))
    }

    /// Whether the producer has run to completion (or was moved out).
    pub fn is_exhausted(&self) -> bool {
        matches!(self.stage, Stage::Exhausted)
    }

    /// Whether a close pair has been emitted. The producer ends on its next
    /// resume once this is set.
    pub fn should_stop(&self) -> bool {
        self.state.should_stop()
    }

    /// Number of values delivered so far.
    pub fn emitted(&self) -> usize {
        self.state.emitted()
    }

    /// Distance between the most recent value and the one before it, or
    /// `None` if at most one value has been emitted.
    pub fn last_gap(&self) -> Option<u64> {
        self.state.last_gap()
    }

    /// Move the computation into a new handle, leaving this one exhausted.
    ///
    /// ```rust
    /// use lazy_seq::{GeneratorHandle, Step, replay};
    ///
    /// let mut first = GeneratorHandle::new(replay([1, 100, 200]));
    /// first.start();
    ///
    /// let mut second = first.take();
    /// assert!(first.is_exhausted());
    /// assert_eq!(second.current(), Ok(1));
    /// assert_eq!(second.advance(), Ok(Step::Yielded(100)));
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Borrowing iterator over the remaining values.
    pub fn cursor(&mut self) -> Cursor<'_, P> {
        Cursor::new(self)
    }

    fn resume_body(&mut self, mut body: P::Body) -> Step<P::Item> {
        match body.resume() {
            Step::Yielded(value) => {
                let value = self.state.emit(value);
                self.stage = Stage::Active(body);
                Step::Yielded(value)
            }
            Step::Complete(()) => {
                self.state.clear_current();
                tracing::debug!(emitted = self.state.emitted(), "generator exhausted");
                Step::Complete(())
            }
        }
    }
}

impl<P: Producer> Default for GeneratorHandle<P> {
    /// An inert handle: exhausted, with no history.
    fn default() -> Self {
        Self {
            stage: Stage::Exhausted,
            state: Rc::new(SequenceState::new()),
        }
    }
}

impl<P: Producer> Drop for GeneratorHandle<P> {
    fn drop(&mut self) {
        if let Stage::Active(_) = self.stage {
            tracing::debug!(
                emitted = self.state.emitted(),
                "releasing unfinished generator"
            );
        }
    }
}

impl<P: Producer> fmt::Debug for GeneratorHandle<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorHandle")
            .field("stage", &self.stage.name())
            .field("state", &self.state)
            .finish()
    }
}

impl<P: Producer> IntoIterator for GeneratorHandle<P> {
    type Item = P::Item;
    type IntoIter = IntoIter<P>;

    fn into_iter(self) -> IntoIter<P> {
        IntoIter::new(self)
    }
}

impl<'a, P: Producer> IntoIterator for &'a mut GeneratorHandle<P> {
    type Item = P::Item;
    type IntoIter = Cursor<'a, P>;

    fn into_iter(self) -> Cursor<'a, P> {
        self.cursor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StateAccessor, build::from_fn, replay};
    use std::{cell::Cell, rc::Rc};

    /// Sets the shared flag when dropped.
    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    /// Emits 1, 100, 200, ... forever and counts how often it was resumed.
    fn tracked(
        resumed: Rc<Cell<usize>>,
        dropped: Rc<Cell<bool>>,
    ) -> impl Producer<Item = i32> {
        from_fn(move |state: StateAccessor<i32>| {
            let guard = DropFlag(dropped);
            let mut next = 1;
            move || {
                let _ = &guard;
                resumed.set(resumed.get() + 1);
                if state.should_stop() {
                    return Step::Complete(());
                }
                let value = next;
                next = if next == 1 { 100 } else { next + 100 };
                Step::Yielded(value)
            }
        })
    }

    #[test]
    fn test_nothing_runs_before_start() {
        let resumed = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(false));
        let handle = GeneratorHandle::new(tracked(Rc::clone(&resumed), Rc::clone(&dropped)));

        assert!(!handle.is_started());
        assert!(!handle.is_exhausted());
        assert_eq!(handle.current(), Err(GeneratorError::NotStarted));
        assert_eq!(resumed.get(), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let resumed = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(false));
        let mut handle = GeneratorHandle::new(tracked(Rc::clone(&resumed), dropped));

        assert_eq!(handle.start(), Step::Yielded(1));
        assert_eq!(handle.start(), Step::Yielded(1));
        assert_eq!(resumed.get(), 1);
        assert_eq!(handle.current(), Ok(1));
    }

    #[test]
    fn test_advance_on_fresh_handle_starts_it() {
        let mut handle = GeneratorHandle::new(replay([42_u16, 7]));
        assert_eq!(handle.advance(), Ok(Step::Yielded(42)));
        assert!(handle.is_started());
    }

    #[test]
    fn test_scenario_close_pair_is_delivered_then_exhausts() {
        let mut handle = GeneratorHandle::new(replay([200, 50, 40, 300]));

        assert_eq!(handle.start(), Step::Yielded(200));
        assert_eq!(handle.last_gap(), None);
        assert!(!handle.should_stop());

        assert_eq!(handle.advance(), Ok(Step::Yielded(50)));
        assert_eq!(handle.last_gap(), Some(150));
        assert!(!handle.is_exhausted());

        assert_eq!(handle.advance(), Ok(Step::Yielded(40)));
        assert_eq!(handle.last_gap(), Some(10));
        assert!(handle.should_stop());
        assert_eq!(handle.current(), Ok(40));

        assert_eq!(handle.advance(), Ok(Step::Complete(())));
        assert!(handle.is_exhausted());
        assert_eq!(handle.emitted(), 3);
    }

    #[test]
    fn test_single_value_then_natural_completion() {
        let mut handle = GeneratorHandle::new(replay([10]));

        assert_eq!(handle.start(), Step::Yielded(10));
        assert!(!handle.should_stop());
        assert_eq!(handle.advance(), Ok(Step::Complete(())));
        assert!(handle.is_exhausted());
    }

    #[test]
    fn test_exhausted_handle_rejects_access() {
        let mut handle = GeneratorHandle::new(replay([3, 4]));
        while let Ok(Step::Yielded(_)) = handle.advance() {}

        assert!(handle.is_exhausted());
        assert_eq!(handle.current(), Err(GeneratorError::Exhausted));
        assert_eq!(handle.advance(), Err(GeneratorError::Exhausted));
        assert_eq!(handle.start(), Step::Complete(()));
    }

    #[test]
    fn test_far_apart_values_keep_handle_alive() {
        let mut handle = GeneratorHandle::new(replay([1, 255].into_iter().cycle()));
        handle.start();

        for i in 0..500 {
            let expected = if i % 2 == 0 { 255 } else { 1 };
            assert_eq!(handle.advance(), Ok(Step::Yielded(expected)));
            assert!(!handle.should_stop());
        }
        assert!(!handle.is_exhausted());
    }

    #[test]
    fn test_drop_mid_sequence_releases_without_resuming() {
        let resumed = Rc::new(Cell::new(0));
        let dropped = Rc::new(Cell::new(false));
        let mut handle = GeneratorHandle::new(tracked(Rc::clone(&resumed), Rc::clone(&dropped)));

        handle.start();
        handle.advance().unwrap();
        assert_eq!(resumed.get(), 2);
        assert!(!dropped.get());

        drop(handle);
        assert!(dropped.get());
        assert_eq!(resumed.get(), 2);
    }

    #[test]
    fn test_drop_before_start_releases_producer() {
        let dropped = Rc::new(Cell::new(false));
        let guard = DropFlag(Rc::clone(&dropped));
        let handle = GeneratorHandle::new(from_fn(move |_: StateAccessor<i32>| {
            let _guard = guard;
            || Step::Complete(())
        }));

        assert!(!dropped.get());
        drop(handle);
        assert!(dropped.get());
    }

    #[test]
    fn test_take_transfers_state_and_leaves_source_inert() {
        let mut source = GeneratorHandle::new(replay([30, 90, 95, 500]));
        source.start();
        source.advance().unwrap();

        let mut dest = source.take();
        assert!(source.is_exhausted());
        assert_eq!(source.current(), Err(GeneratorError::Exhausted));
        assert_eq!(source.advance(), Err(GeneratorError::Exhausted));
        assert_eq!(source.emitted(), 0);

        assert_eq!(dest.current(), Ok(90));
        assert_eq!(dest.last_gap(), Some(60));
        assert_eq!(dest.advance(), Ok(Step::Yielded(95)));
        assert!(dest.should_stop());
        assert_eq!(dest.advance(), Ok(Step::Complete(())));
    }

    #[test]
    fn test_take_preserves_stop_flag() {
        let mut source = GeneratorHandle::new(replay([8, 9, 200]));
        source.start();
        source.advance().unwrap();
        assert!(source.should_stop());

        let mut dest = source.take();
        assert!(dest.should_stop());
        assert!(!source.should_stop());
        assert_eq!(dest.advance(), Ok(Step::Complete(())));
    }

    #[test]
    fn test_panicking_body_leaves_handle_exhausted() {
        let producer = from_fn(|_state: StateAccessor<i32>| {
            let mut calls = 0;
            move || {
                calls += 1;
                if calls > 1 {
                    panic!("producer fault");
                }
                Step::Yielded(5)
            }
        });
        let mut handle = GeneratorHandle::new(producer);
        handle.start();

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handle.advance()));
        assert!(outcome.is_err());
        assert!(handle.is_exhausted());
        assert_eq!(handle.advance(), Err(GeneratorError::Exhausted));
    }

    #[test]
    fn test_debug_names_stage() {
        let mut handle = GeneratorHandle::new(replay([1_u8]));
        assert!(format!("{handle:?}").contains("NotStarted"));
        handle.start();
        assert!(format!("{handle:?}").contains("Active"));
    }
}
