//! Search behavior configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Quiet period before a typed query triggers a remote lookup.
const fn default_debounce_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms > 10_000 {
            return Err(ConfigError::invalid(
                "search.debounce_ms",
                "must be at most 10000",
            ));
        }
        Ok(())
    }
}
