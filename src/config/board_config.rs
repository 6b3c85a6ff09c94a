// ==========================================
// Система управления логистикой - board configuration
// ==========================================
// Session configuration with sane defaults. An explicit JSON file
// can be supplied through the LOGISTICS_BOARD_CONFIG environment
// variable; a missing or broken file falls back to defaults with a
// warning, it never blocks startup.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Environment variable pointing at a JSON config file.
pub const CONFIG_PATH_ENV: &str = "LOGISTICS_BOARD_CONFIG";

/// Planning date shown in the board header and anchoring the trend
/// series (the seed dataset is dated to it).
fn default_planning_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 18).expect("valid default date")
}

fn default_locale() -> String {
    "ru".to_string()
}

fn default_max_trend_days() -> u32 {
    31
}

/// Board session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardConfig {
    #[serde(default = "default_planning_date")]
    pub planning_date: NaiveDate,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_max_trend_days")]
    pub max_trend_days: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            planning_date: default_planning_date(),
            locale: default_locale(),
            max_trend_days: default_max_trend_days(),
        }
    }
}

impl BoardConfig {
    /// Parse from a JSON document; unknown fields are ignored,
    /// missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: BoardConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load from the file named by `LOGISTICS_BOARD_CONFIG`, falling
    /// back to defaults when the variable is unset or the file is
    /// unreadable/invalid.
    pub fn load() -> Self {
        let path = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => path,
            _ => return Self::default(),
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) if config.is_valid() => {
                    tracing::info!(path = %path, "board config loaded");
                    config
                }
                Ok(_) => {
                    tracing::warn!(path = %path, "board config invalid, falling back to defaults");
                    Self::default()
                }
                Err(err) => {
                    tracing::warn!(path = %path, error = %err, "board config unparsable, falling back to defaults");
                    Self::default()
                }
            },
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "board config unreadable, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.max_trend_days >= 1 && !self.locale.trim().is_empty()
    }
}
