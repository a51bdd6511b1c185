//! Runner Configuration
//!
//! Settings for the configured [`Trampoline`](crate::Trampoline) runner.
//! Configuration can come from a TOML file, from the environment, or both.
//!
//! ## TOML Format
//!
//! ```toml
//! # Stop after this many thunk invocations (omit for no limit)
//! step_limit = 1000000
//!
//! # Emit a debug progress event every N steps (0 disables)
//! progress_interval = 10000
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Environment variable that switches on progress logging
pub const DEBUG_EVAL_ENV: &str = "TRAMPOLINE_DEBUG_EVAL";

/// Progress interval used when `TRAMPOLINE_DEBUG_EVAL` is set and no
/// interval was configured
pub const DEFAULT_DEBUG_INTERVAL: u64 = 1000;

/// Configuration for a trampoline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    /// Maximum number of thunks to invoke. `None` runs until the chain lands.
    pub step_limit: Option<u64>,

    /// Emit a progress event every this many steps. 0 disables progress.
    pub progress_interval: u64,
}

impl EvalConfig {
    /// Unbounded run with no progress reporting.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Parse configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        Self::parse_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Apply environment overrides on top of this configuration.
    pub fn with_env_overrides(self) -> Self {
        self.with_debug_flag(std::env::var_os(DEBUG_EVAL_ENV).is_some())
    }

    fn with_debug_flag(mut self, debug: bool) -> Self {
        if debug && self.progress_interval == 0 {
            self.progress_interval = DEFAULT_DEBUG_INTERVAL;
        }
        self
    }
}
