//! Console configuration, read from the environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

/// Scheduler tick used when `RINGLOCK_TICK_MS` is unset.
pub const DEFAULT_TICK_MS: u64 = 50;

/// Settings for one console run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Story file to play instead of the built-in one.
    pub story_path: Option<PathBuf>,
    /// Seed for the deck shuffle; a fresh deal every run when unset.
    pub seed: Option<u64>,
    /// How often deferred tasks are pumped.
    pub tick: Duration,
    /// Start with sound off.
    pub muted: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            story_path: None,
            seed: None,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            muted: false,
        }
    }
}

impl ConsoleConfig {
    /// Reads `RINGLOCK_STORY`, `RINGLOCK_SEED`, `RINGLOCK_TICK_MS` and
    /// `RINGLOCK_MUTED`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = lookup("RINGLOCK_STORY").filter(|p| !p.trim().is_empty()) {
            config.story_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup("RINGLOCK_SEED") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| AppError::Config(format!("RINGLOCK_SEED must be a valid u64: {e}")))?;
            config.seed = Some(seed);
        }

        if let Some(raw) = lookup("RINGLOCK_TICK_MS") {
            let millis = raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("RINGLOCK_TICK_MS must be a valid u64: {e}"))
            })?;
            if millis == 0 {
                return Err(AppError::Config(
                    "RINGLOCK_TICK_MS must be greater than zero".to_owned(),
                ));
            }
            config.tick = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup("RINGLOCK_MUTED") {
            config.muted = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                other => {
                    return Err(AppError::Config(format!(
                        "RINGLOCK_MUTED must be a boolean, got {other:?}"
                    )));
                }
            };
        }

        Ok(config)
    }
}
