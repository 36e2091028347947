//! sentryx.toml configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{SentryxError, SentryxResult};
use crate::history::DEFAULT_HISTORY_CAPACITY;

pub const CONFIG_FILE_NAME: &str = "sentryx.toml";

/// Detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Confidence threshold recorded for each scan, (0.0, 1.0]
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
        }
    }
}

/// Scan history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum retained scan summaries, oldest evicted first
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_output_format(),
        }
    }
}

fn default_confidence_threshold() -> f64 {
    0.25
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_output_format() -> String {
    "terminal".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentryxConfig {
    #[serde(default)]
    pub detection: DetectionConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl SentryxConfig {
    /// Validate threshold range and ledger capacity
    pub fn validate(&self) -> Result<(), String> {
        validate_threshold(self.detection.confidence_threshold)?;

        if self.history.capacity == 0 {
            return Err("History capacity must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn from_file(path: &Path) -> SentryxResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: SentryxConfig = toml::from_str(&contents)
            .map_err(|e| SentryxError::Config(format!("{}: {e}", path.display())))?;
        config.validate().map_err(SentryxError::Config)?;
        Ok(config)
    }

    /// Load from an explicit path, else `sentryx.toml` in the working
    /// directory, else defaults.
    pub fn load(explicit: Option<&Path>) -> SentryxResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::from_file(local);
        }

        Ok(Self::default())
    }
}

/// Thresholds are recorded per scan, so an out-of-range value is a config
/// error, not a detector contract violation
pub fn validate_threshold(threshold: f64) -> Result<(), String> {
    if threshold <= 0.0 || threshold > 1.0 {
        Err(format!(
            "Confidence threshold must be in (0.0, 1.0], got {threshold}"
        ))
    } else {
        Ok(())
    }
}
