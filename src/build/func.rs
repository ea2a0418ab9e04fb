use std::marker::PhantomData;

use crate::{
    producer::{Producer, Resume},
    state::{Gap, StateAccessor},
    step::Step,
};

/// Producer built from a closure; see [`from_fn`].
pub struct FromFn<T, F> {
    setup: F,
    _item: PhantomData<fn() -> T>,
}

/// Body produced by a [`FromFn`] producer.
pub struct FnBody<B>(B);

/// Create a producer from a setup closure.
///
/// `setup` runs once, when the handle starts, and receives the sequence's
/// [`StateAccessor`]. The closure it returns is the body: each call runs one
/// step and returns `Step::Yielded` to emit or `Step::Complete` to finish.
///
/// ```rust
/// use lazy_seq::{GeneratorHandle, Step, from_fn};
///
/// let producer = from_fn(|state| {
///     let mut value = 0_i32;
///     move || {
///         if state.should_stop() {
///             return Step::Complete(());
///         }
///         value += 20;
///         Step::Yielded(value)
///     }
/// });
///
/// let values: Vec<i32> = GeneratorHandle::new(producer).into_iter().take(3).collect();
/// assert_eq!(values, vec![20, 40, 60]);
/// ```
pub fn from_fn<T, F, B>(setup: F) -> FromFn<T, F>
where
    T: Gap,
    F: FnOnce(StateAccessor<T>) -> B,
    B: FnMut() -> Step<T>,
{
    FromFn {
        setup,
        _item: PhantomData,
    }
}

impl<T, F, B> Producer for FromFn<T, F>
where
    T: Gap,
    F: FnOnce(StateAccessor<T>) -> B,
    B: FnMut() -> Step<T>,
{
    type Item = T;
    type Body = FnBody<B>;

    fn attach(self, state: StateAccessor<T>) -> FnBody<B> {
        FnBody((self.setup)(state))
    }
}

impl<T, B> Resume for FnBody<B>
where
    B: FnMut() -> Step<T>,
{
    type Item = T;

    fn resume(&mut self) -> Step<T> {
        (self.0)()
    }
}
