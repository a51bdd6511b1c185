//! Trampoline Evaluator Library
//!
//! Runs long chains of self-referential deferred computations with an
//! explicit loop, so the native stack never grows with the length of the
//! chain. A step either lands on a terminal value or hands back a thunk for
//! the next step; the loop keeps invoking thunks until something lands.
//!
//! # Architecture
//!
//! 1. **Data model** (`trampoline::types`)
//!    - `Step::Done(value)` ends the chain
//!    - `Step::Call(thunk)` defers the next step; each thunk is `FnOnce`
//!
//! 2. **Engine** (`trampoline::engine`)
//!    - `run_trampoline` for infallible chains
//!    - `try_run_trampoline` propagates the first step error unmodified
//!    - `Trampoline` runner adds step counting, progress logging and an
//!      optional step limit driven by `EvalConfig`
//!
//! 3. **Lesson programs** (`programs`)
//!    - countdown, sum, parity, factorial as trampolined chains, plus naive
//!      recursive references
//!
//! # Example
//!
//! ```rust
//! use trampoline_eval::{run_trampoline, Step};
//!
//! fn countdown(n: u64) -> Step<'static, &'static str> {
//!     if n == 0 {
//!         Step::done("Done!")
//!     } else {
//!         Step::call(move || countdown(n - 1))
//!     }
//! }
//!
//! assert_eq!(run_trampoline(countdown(100_000)), "Done!");
//! ```

pub mod config;
pub mod errors;
pub mod programs;
pub mod trampoline;

pub use config::EvalConfig;
pub use errors::{ConfigError, ProgramError, RunError};
pub use trampoline::{run_trampoline, try_run_trampoline, Landed, Step, Thunk, Trampoline};
