//! Ready-made producers.

mod func;
mod replay;

pub use func::{FnBody, FromFn, from_fn};
pub use replay::{Replay, ReplayBody, replay};
