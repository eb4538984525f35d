use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::utils::{ensure_dir, write_atomic, PathResolver};
use crate::errors::{LedgerError, Result};
use crate::ledger::parse_amount;

/// User preferences for the coffee budget shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides the default data file location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Balances strictly below this value are flagged.
    #[serde(default = "Config::default_low_balance_threshold")]
    pub low_balance_threshold: f64,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            currency: Self::default_currency(),
            low_balance_threshold: Self::default_low_balance_threshold(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 4] = [
        "data_file",
        "currency",
        "low_balance_threshold",
        "ui_color_enabled",
    ];

    fn default_currency() -> String {
        "CZK".into()
    }

    fn default_low_balance_threshold() -> f64 {
        10.0
    }

    fn default_ui_color_enabled() -> bool {
        true
    }

    /// Data file to use when the config does not name one.
    pub fn data_file_or(&self, base: &Path) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathResolver::data_file_in(base))
    }

    /// Updates a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data_file" => {
                let trimmed = value.trim();
                self.data_file = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
            }
            "currency" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(LedgerError::Config("currency cannot be empty".into()));
                }
                self.currency = trimmed.to_string();
            }
            "low_balance_threshold" => {
                self.low_balance_threshold = parse_amount(value)?;
            }
            "ui_color_enabled" => {
                self.ui_color_enabled = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    other => {
                        return Err(LedgerError::Config(format!(
                            "`{}` is not a boolean (use on/off)",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(LedgerError::Config(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "data_file",
                self.data_file
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(default)".into()),
            ),
            ("currency", self.currency.clone()),
            (
                "low_balance_threshold",
                format!("{:.2}", self.low_balance_threshold),
            ),
            ("ui_color_enabled", self.ui_color_enabled.to_string()),
        ]
    }
}

/// Loads and stores [`Config`] as JSON under the application directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        let path = PathResolver::config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path).map_err(|err| {
                LedgerError::Config(format!("cannot read `{}`: {}", self.path.display(), err))
            })?;
            serde_json::from_str(&data).map_err(|err| {
                LedgerError::Config(format!("`{}`: {}", self.path.display(), err))
            })
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, json.as_bytes())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
