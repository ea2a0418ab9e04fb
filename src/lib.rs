//! # lazy-seq: pull-driven lazy sequences
//!
//! A producer emits values one at a time and suspends between emissions; the
//! consumer decides when to resume it. Every emission passes through a stop
//! check: once two consecutive values differ by less than
//! [`STOP_THRESHOLD`], the producer is told to stop and ends on its next
//! resume. The value that tripped the check is still delivered.
//!
//! ## Core Types
//!
//! - **[`GeneratorHandle`]**: owns a suspended computation and drives it
//!   with `start` / `advance` / `current` / `is_exhausted`
//! - **[`Producer`]** and **[`Resume`]**: a computation before and after it
//!   receives its [`StateAccessor`]
//! - **[`Step`]**: outcome of one resume, `Yielded` or `Complete`
//!
//! ## Example
//!
//! ```
//! use lazy_seq::*;
//!
//! let mut handle = GeneratorHandle::new(replay([200, 50, 40, 300]));
//! let values: Vec<i32> = handle.cursor().collect();
//!
//! // 40 is within 16 of 50, so it is the last value delivered
//! assert_eq!(values, vec![200, 50, 40]);
//! assert!(handle.is_exhausted());
//! ```
//!
//! ## Producers
//!
//! - [`random_sequence()`] - uniform draws in `[1, 256]`, seeded from the OS
//! - [`seeded_random_sequence(seed)`] - the same, reproducible
//! - [`replay(values)`] - a fixed run of values
//! - [`from_fn(setup)`] - any closure-shaped computation
//!
//! [`seeded_random_sequence(seed)`]: seeded_random_sequence
//! [`replay(values)`]: replay
//! [`from_fn(setup)`]: from_fn

pub mod build;
mod cursor;
mod error;
mod handle;
pub mod prelude;
mod producer;
pub mod random;
pub mod report;
mod state;
mod step;

pub use build::{from_fn, replay};
pub use cursor::{Cursor, IntoIter};
pub use error::{GeneratorError, Result};
pub use handle::GeneratorHandle;
pub use producer::{Producer, Resume};
pub use random::{random_sequence, random_sequence_from, seeded_random_sequence};
pub use state::{Gap, STOP_THRESHOLD, StateAccessor};
pub use step::Step;
