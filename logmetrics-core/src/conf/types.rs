use crate::conf::ConfigError;
use serde::{Deserialize, Serialize};

/// Requests slower than this many milliseconds count as slow.
pub const DEFAULT_SLOW_THRESHOLD_MS: f64 = 700.0;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// Derive the window duration from the first and last parsed log
    /// timestamps instead of the wall-clock time supplied by the host.
    #[serde(default)]
    pub use_logfile_time: bool,

    /// Emit `http_1xx`..`http_5xx` responses-per-second observations.
    #[serde(default)]
    pub include_per_bucket_rates: bool,

    /// Replacement line pattern. Must define `time`, `status` and
    /// `response_time` named groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(default = "default_slow_threshold_ms")]
    pub slow_threshold_ms: f64,
}

fn default_slow_threshold_ms() -> f64 {
    DEFAULT_SLOW_THRESHOLD_MS
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            use_logfile_time: false,
            include_per_bucket_rates: false,
            pattern: None,
            slow_threshold_ms: DEFAULT_SLOW_THRESHOLD_MS,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.slow_threshold_ms.is_finite() || self.slow_threshold_ms < 0.0 {
            return Err(ConfigError::InvalidSlowThreshold {
                value: self.slow_threshold_ms,
            });
        }
        Ok(())
    }
}
