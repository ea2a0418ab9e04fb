use crate::{
    producer::{Producer, Resume},
    state::{Gap, StateAccessor},
    step::Step,
};

/// Producer that emits a fixed run of values; see [`replay`].
pub struct Replay<I> {
    values: I,
}

/// Body produced by a [`Replay`] producer.
pub struct ReplayBody<I: Iterator> {
    values: I,
    state: StateAccessor<I::Item>,
}

/// Emit the given values in order.
///
/// Like every producer in this crate, the body checks the stop flag after
/// each emission, so the run ends early once two consecutive values are
/// close. Otherwise it ends when the values run out.
///
/// ```rust
/// use lazy_seq::{GeneratorHandle, replay};
///
/// let values: Vec<i32> = GeneratorHandle::new(replay([200, 50, 40, 90])).into_iter().collect();
/// assert_eq!(values, vec![200, 50, 40]);
/// ```
pub fn replay<I>(values: I) -> Replay<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Gap,
{
    Replay {
        values: values.into_iter(),
    }
}

impl<I> Producer for Replay<I>
where
    I: Iterator,
    I::Item: Gap,
{
    type Item = I::Item;
    type Body = ReplayBody<I>;

    fn attach(self, state: StateAccessor<I::Item>) -> ReplayBody<I> {
        ReplayBody {
            values: self.values,
            state,
        }
    }
}

impl<I> Resume for ReplayBody<I>
where
    I: Iterator,
    I::Item: Gap,
{
    type Item = I::Item;

    fn resume(&mut self) -> Step<I::Item> {
        if self.state.should_stop() {
            return Step::Complete(());
        }
        self.values.next().into()
    }
}
