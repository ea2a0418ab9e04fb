//! Invalid-state errors raised by [`GeneratorHandle`](crate::GeneratorHandle).

/// Convenience alias for results carrying a [`GeneratorError`].
pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;

/// Access to a handle in a state where the requested operation is undefined.
///
/// These are contract violations on the consumer side. Faults inside the
/// producer are not represented here; they abort the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The handle has not been started, so there is no current value.
    #[error("generator has not been started; call `start()` first")]
    NotStarted,
    /// The underlying computation has completed or was moved out.
    #[error("generator is exhausted")]
    Exhausted,
}
