//! User settings for the expense tracker
//!
//! Manages user preferences: which frequencies deduct from the budget, the
//! default frequency for new expenses, display currency and log level.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::models::Frequency;

/// Which expenses are subtracted from the budget when added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeductionPolicy {
    /// Only one-time expenses deduct (default)
    #[default]
    OneTime,
    /// Only daily, weekly and monthly expenses deduct
    Recurring,
    /// Every expense deducts
    All,
}

impl DeductionPolicy {
    /// Check if an expense with this frequency reduces the budget
    pub fn deducts(&self, frequency: Frequency) -> bool {
        if frequency == Frequency::Adjustment {
            return false;
        }

        match self {
            Self::OneTime => frequency == Frequency::OneTime,
            Self::Recurring => frequency.is_recurring(),
            Self::All => true,
        }
    }
}

impl std::fmt::Display for DeductionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneTime => write!(f, "one-time expenses only"),
            Self::Recurring => write!(f, "recurring expenses only"),
            Self::All => write!(f, "all expenses"),
        }
    }
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Which expenses reduce the remaining budget
    #[serde(default)]
    pub deduction_policy: DeductionPolicy,

    /// Frequency used when `expense add` is given none
    #[serde(default)]
    pub default_frequency: Frequency,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            deduction_policy: DeductionPolicy::default(),
            default_frequency: Frequency::default(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Reject settings that can't be applied
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if !self.default_frequency.is_user_selectable() {
            return Err(ExpenseError::Config(format!(
                "default_frequency cannot be '{}'",
                self.default_frequency
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
