//! Commonly used imports
//!
//! Use `use lazy_seq::prelude::*;` for quick access to the handle, the
//! producer traits and the built-in producers.

// Core types
pub use crate::{GeneratorError, GeneratorHandle, Step};

// Producer traits
pub use crate::{Producer, Resume, StateAccessor};

// Built-in producers
pub use crate::build::{from_fn, replay};
pub use crate::random::{random_sequence, seeded_random_sequence};
