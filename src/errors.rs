//! Error types for running trampolines, loading configuration and the
//! bundled lesson programs.

use std::fmt;
use std::path::PathBuf;

/// Errors surfaced by a configured [`Trampoline`](crate::Trampoline) run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError<E> {
    /// A step failed. The original error is carried untouched.
    Step(E),

    /// The configured step limit was reached before the chain landed.
    StepLimitExceeded { limit: u64 },
}

impl<E> RunError<E> {
    /// Get the step failure back, if that is what stopped the run.
    pub fn into_step_error(self) -> Option<E> {
        match self {
            RunError::Step(e) => Some(e),
            RunError::StepLimitExceeded { .. } => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for RunError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Step(e) => write!(f, "Step failed: {}", e),
            RunError::StepLimitExceeded { limit } => {
                write!(f, "Step limit of {} exceeded before the chain finished", limit)
            }
        }
    }
}

impl<E> std::error::Error for RunError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Step(e) => Some(e),
            RunError::StepLimitExceeded { .. } => None,
        }
    }
}

/// Errors that can occur while loading an [`EvalConfig`](crate::EvalConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Read(PathBuf, std::io::Error),
    /// File is not valid configuration TOML.
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(path, err) => {
                write!(f, "Failed to read '{}': {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "Failed to parse '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}

/// Failures raised by the lesson programs themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// Arithmetic overflowed while multiplying in `at`
    Overflow { at: u64 },
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramError::Overflow { at } => write!(f, "Arithmetic overflow at n = {}", at),
        }
    }
}

impl std::error::Error for ProgramError {}
