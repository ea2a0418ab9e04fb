//! Random integers in `[MIN_DRAW, MAX_DRAW]` until two consecutive draws are
//! closer than [`STOP_THRESHOLD`](crate::STOP_THRESHOLD).
//!
//! The source is seeded once, when the handle starts. Each resume then checks
//! the stop flag raised by the previous emission and either ends the
//! computation or draws one more value.
//!
//! ```rust
//! use lazy_seq::{GeneratorHandle, STOP_THRESHOLD, Gap, seeded_random_sequence};
//!
//! let mut handle = GeneratorHandle::new(seeded_random_sequence(7));
//! let values: Vec<i32> = handle.cursor().collect();
//!
//! let last = values.len() - 1;
//! assert!(values.iter().all(|v| (1..=256).contains(v)));
//! if last > 0 {
//!     assert!(values[last].gap(values[last - 1]) < STOP_THRESHOLD);
//! }
//! ```

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    producer::{Producer, Resume},
    state::StateAccessor,
    step::Step,
};

/// Smallest value a draw can produce.
pub const MIN_DRAW: i32 = 1;
/// Largest value a draw can produce.
pub const MAX_DRAW: i32 = 256;

/// Supplier of uniformly distributed integers in `[MIN_DRAW, MAX_DRAW]`.
pub trait RandomSource {
    fn draw(&mut self) -> i32;
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct UniformDraw<R> {
    rng: R,
}

impl<R: Rng> UniformDraw<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for UniformDraw<R> {
    fn draw(&mut self) -> i32 {
        self.rng.random_range(MIN_DRAW..=MAX_DRAW)
    }
}

/// Producer of the random sequence; see [`random_sequence`].
pub struct RandomSequence<F> {
    seed: F,
}

/// Running body of a [`RandomSequence`].
pub struct RandomBody<S> {
    source: S,
    state: StateAccessor<i32>,
}

/// Random sequence seeded from operating-system entropy.
pub fn random_sequence() -> RandomSequence<impl FnOnce() -> UniformDraw<StdRng>> {
    random_sequence_from(|| {
        tracing::debug!("seeding random sequence from os entropy");
        UniformDraw::new(StdRng::from_os_rng())
    })
}

/// Random sequence with a fixed seed; two sequences with the same seed emit
/// the same values.
pub fn seeded_random_sequence(seed: u64) -> RandomSequence<impl FnOnce() -> UniformDraw<StdRng>> {
    random_sequence_from(move || {
        tracing::debug!(seed, "seeding random sequence");
        UniformDraw::new(StdRng::seed_from_u64(seed))
    })
}

/// Random sequence over a caller-supplied source. `seed` runs once, when the
/// handle starts.
pub fn random_sequence_from<F, S>(seed: F) -> RandomSequence<F>
where
    F: FnOnce() -> S,
    S: RandomSource,
{
    RandomSequence { seed }
}

impl<F, S> Producer for RandomSequence<F>
where
    F: FnOnce() -> S,
    S: RandomSource,
{
    type Item = i32;
    type Body = RandomBody<S>;

    fn attach(self, state: StateAccessor<i32>) -> RandomBody<S> {
        RandomBody {
            source: (self.seed)(),
            state,
        }
    }
}

impl<S: RandomSource> Resume for RandomBody<S> {
    type Item = i32;

    fn resume(&mut self) -> Step<i32> {
        if self.state.should_stop() {
            return Step::Complete(());
        }
        Step::Yielded(self.source.draw())
    }
}
