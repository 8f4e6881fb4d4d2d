//! User settings
//!
//! Display and logging preferences. The allocation weights are fixed and do
//! not live here.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Entries per page in `history`
    #[serde(default = "default_history_page_size")]
    pub history_page_size: usize,

    /// Entries shown by `balance` before the full history is requested
    #[serde(default = "default_collapsed_history_count")]
    pub collapsed_history_count: usize,

    /// Entries the spending chart covers
    #[serde(default = "default_recent_chart_count")]
    pub recent_chart_count: usize,

    /// Print amounts in Vietnamese words next to balances
    #[serde(default = "default_true")]
    pub show_amount_in_words: bool,

    /// Append every change to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_history_page_size() -> usize {
    10
}

fn default_collapsed_history_count() -> usize {
    5
}

fn default_recent_chart_count() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            history_page_size: default_history_page_size(),
            collapsed_history_count: default_collapsed_history_count(),
            recent_chart_count: default_recent_chart_count(),
            show_amount_in_words: true,
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when no file exists yet
    ///
    /// Defaults are not written; call [`Settings::save`] to persist them.
    pub fn load_or_create(paths: &LedgerPaths) -> LedgerResult<Self> {
        let settings_path = paths.settings_file();
        if !settings_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, paths: &LedgerPaths) -> LedgerResult<()> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))
    }

    fn validate(&self) -> LedgerResult<()> {
        if self.history_page_size == 0 {
            return Err(LedgerError::Config(
                "history_page_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
