//! Trampoline Engine - Iterative Evaluation
//!
//! This module contains the loops that drive a chain of [`Step`]s to its
//! terminal value. Each thunk returns to the loop before the next one is
//! invoked, so at most one thunk frame is ever live no matter how long the
//! chain is.

use std::convert::Infallible;

use tracing::{debug, trace};

use crate::config::EvalConfig;
use crate::errors::RunError;

use super::types::{Landed, Step};

/// Run an infallible chain to its terminal value.
///
/// A `Done` input is returned as-is without invoking anything.
pub fn run_trampoline<T>(initial: Step<'_, T>) -> T {
    match try_run_trampoline(initial) {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Run a chain whose steps may fail.
///
/// The first step error is returned unmodified and the rest of the chain is
/// dropped unevaluated. Panics inside a step unwind straight through.
pub fn try_run_trampoline<T, E>(initial: Step<'_, T, E>) -> Result<T, E> {
    let mut current = initial;
    loop {
        match current {
            Step::Done(value) => return Ok(value),
            Step::Call(thunk) => {
                trace!(target: "trampoline::engine", "invoke thunk");
                current = thunk()?;
            }
        }
    }
}

/// Trampoline runner carrying an [`EvalConfig`].
///
/// Counts steps, reports progress through `tracing`, and optionally stops
/// runaway chains at a step limit.
#[derive(Debug, Clone, Default)]
pub struct Trampoline {
    config: EvalConfig,
}

impl Trampoline {
    pub fn new(config: EvalConfig) -> Self {
        Trampoline { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Run `initial` to completion under this runner's configuration.
    pub fn run<T, E>(&self, initial: Step<'_, T, E>) -> Result<Landed<T>, RunError<E>> {
        let mut steps: u64 = 0;
        let mut current = initial;

        loop {
            match current {
                Step::Done(value) => {
                    debug!(target: "trampoline::engine", steps, "chain landed");
                    return Ok(Landed { value, steps });
                }
                Step::Call(thunk) => {
                    if let Some(limit) = self.config.step_limit {
                        if steps >= limit {
                            debug!(target: "trampoline::engine", limit, "step limit reached");
                            return Err(RunError::StepLimitExceeded { limit });
                        }
                    }

                    steps += 1;
                    trace!(target: "trampoline::engine", steps, "invoke thunk");
                    current = thunk().map_err(RunError::Step)?;

                    if self.reports_progress(steps) {
                        debug!(target: "trampoline::engine", steps, "trampoline progress");
                    }
                }
            }
        }
    }

    /// Run an infallible chain; only the step limit can stop it early.
    pub fn run_infallible<T>(
        &self,
        initial: Step<'_, T>,
    ) -> Result<Landed<T>, RunError<Infallible>> {
        self.run(initial)
    }

    /// Whether a progress event is due after `steps` thunk invocations.
    fn reports_progress(&self, steps: u64) -> bool {
        let interval = self.config.progress_interval;
        interval > 0 && steps % interval == 0
    }
}
