//! User settings for GrowBank
//!
//! Holds presentation preferences and the demo knobs (simulated user age,
//! animation timing) that are handed to screens as configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::GrowBankPaths;
use crate::error::GrowBankError;

/// User settings for GrowBank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Display name of the youth account holder
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// Simulated age of the youth account holder
    #[serde(default = "default_user_age")]
    pub demo_user_age: u8,

    /// Delay before progress bars reveal their value, in milliseconds
    #[serde(default = "default_progress_delay_ms")]
    pub progress_delay_ms: u64,

    /// Number of confetti particles in the graduation celebration
    #[serde(default = "default_confetti_count")]
    pub confetti_count: usize,

    /// TUI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "£".to_string()
}

fn default_user_name() -> String {
    "Alex".to_string()
}

fn default_user_age() -> u8 {
    14
}

fn default_progress_delay_ms() -> u64 {
    300
}

fn default_confetti_count() -> usize {
    30
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_filter() -> String {
    "growbank=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            user_name: default_user_name(),
            demo_user_age: default_user_age(),
            progress_delay_ms: default_progress_delay_ms(),
            confetti_count: default_confetti_count(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Progress bar reveal delay
    pub fn progress_delay(&self) -> Duration {
        Duration::from_millis(self.progress_delay_ms)
    }

    /// TUI tick interval (never zero)
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &GrowBankPaths) -> Result<Self, GrowBankError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                GrowBankError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                GrowBankError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &GrowBankPaths) -> Result<(), GrowBankError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            GrowBankError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            GrowBankError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
