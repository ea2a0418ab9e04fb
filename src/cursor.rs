//! Iterator adapters over a [`GeneratorHandle`].
//!
//! [`Cursor`] borrows the handle, so the handle (and its history) is still
//! available once iteration stops. [`IntoIter`] owns it.
//!
//! ```rust
//! use lazy_seq::{GeneratorHandle, replay};
//!
//! let mut handle = GeneratorHandle::new(replay([10, 60, 65]));
//! let values: Vec<i32> = handle.cursor().collect();
//!
//! assert_eq!(values, vec![10, 60, 65]);
//! assert!(handle.is_exhausted());
//! assert_eq!(handle.emitted(), 3);
//! ```

use std::iter::FusedIterator;

use crate::{handle::GeneratorHandle, producer::Producer, step::Step};

/// Borrowing iterator over a handle's values.
///
/// Each `next` resumes the underlying computation, so a value is delivered
/// once across all cursors over the same handle. A value that was already
/// delivered stays readable through [`GeneratorHandle::current`].
pub struct Cursor<'a, P: Producer> {
    handle: &'a mut GeneratorHandle<P>,
}

impl<'a, P: Producer> Cursor<'a, P> {
    pub(crate) fn new(handle: &'a mut GeneratorHandle<P>) -> Self {
        Self { handle }
    }
}

impl<P: Producer> Iterator for Cursor<'_, P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        pull(self.handle)
    }
}

impl<P: Producer> FusedIterator for Cursor<'_, P> {}

/// Owning iterator over a handle's values.
pub struct IntoIter<P: Producer> {
    handle: GeneratorHandle<P>,
}

impl<P: Producer> IntoIter<P> {
    pub(crate) fn new(handle: GeneratorHandle<P>) -> Self {
        Self { handle }
    }

    /// Give the handle back, e.g. to inspect its history.
    pub fn into_handle(self) -> GeneratorHandle<P> {
        self.handle
    }
}

impl<P: Producer> Iterator for IntoIter<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        pull(&mut self.handle)
    }
}

impl<P: Producer> FusedIterator for IntoIter<P> {}

fn pull<P: Producer>(handle: &mut GeneratorHandle<P>) -> Option<P::Item> {
    match handle.advance() {
        Ok(Step::Yielded(value)) => Some(value),
        Ok(Step::Complete(())) | Err(_) => None,
    }
}
