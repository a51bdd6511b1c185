//! Trampoline-based Iterative Evaluation
//!
//! This module provides the core data structures and engine for running a
//! chain of deferred steps with an explicit loop instead of recursive calls.
//! This keeps stack usage constant for arbitrarily long chains.

mod types;
mod engine;

pub use types::{Landed, Step, Thunk};
pub use engine::{run_trampoline, try_run_trampoline, Trampoline};
