/// Outcome of resuming a suspended computation: either it emitted a value and
/// suspended again, or it ran to completion.
///
/// The completion payload defaults to `()`, which is what every sequence in
/// this crate returns.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::Step;
///
/// let emitted: Step<i32> = Step::Yielded(42);
/// let finished: Step<i32> = Step::Complete(());
///
/// assert!(!emitted.is_complete());
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<Y, D = ()> {
    /// The computation emitted a value and is suspended.
    Yielded(Y),
    /// The computation finished.
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }
}

impl<Y> From<Option<Y>> for Step<Y> {
    /// `Some` becomes an emission, `None` becomes completion.
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}
