//! User settings for jpdb-export
//!
//! Every value here is a preset: anything left unset is asked for
//! interactively when the export runs.

use serde::{Deserialize, Serialize};

use super::paths::ExportPaths;
use crate::error::ExportError;
use crate::models::ExportMode;

/// Default jpdb.io API root
pub const DEFAULT_API_BASE_URL: &str = "https://jpdb.io/api/v1";

/// Default CSV file name
pub const DEFAULT_OUTPUT_FILE: &str = "anki_import.csv";

/// Advanced-mode filter presets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPresets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_occurrences: Option<u64>,

    /// 0 means no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days_until_due: Option<u64>,

    /// 0 means no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_card_level: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_banished: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_never_forget: Option<bool>,

    /// 0 means no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_frequency_rank: Option<u64>,

    /// 0 means all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u64>,
}

impl FilterPresets {
    /// Overlay `other` on top of `self`; values set in `other` win
    pub fn merged_with(&self, other: &FilterPresets) -> FilterPresets {
        FilterPresets {
            min_occurrences: other.min_occurrences.or(self.min_occurrences),
            max_days_until_due: other.max_days_until_due.or(self.max_days_until_due),
            max_card_level: other.max_card_level.or(self.max_card_level),
            include_banished: other.include_banished.or(self.include_banished),
            include_never_forget: other.include_never_forget.or(self.include_never_forget),
            max_frequency_rank: other.max_frequency_rank.or(self.max_frequency_rank),
            max_results: other.max_results.or(self.max_results),
        }
    }
}

/// HTTP retry behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrySettings {
    /// Attempts per request, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Base delay in milliseconds, multiplied by the attempt number
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_base_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    20
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User settings for jpdb-export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Found at the bottom of https://jpdb.io/settings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Deck id (not the position in the deck list)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ExportMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,

    #[serde(default)]
    pub filters: FilterPresets,

    #[serde(default)]
    pub retry: RetrySettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            api_base_url: default_api_base_url(),
            api_key: None,
            deck_id: None,
            mode: None,
            output_file: Some(DEFAULT_OUTPUT_FILE.to_string()),
            filters: FilterPresets::default(),
            retry: RetrySettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExportPaths) -> Result<Self, ExportError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExportError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExportError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExportPaths) -> Result<(), ExportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// API key for display: first four characters, rest hidden
    pub fn masked_api_key(&self) -> String {
        match self.api_key.as_deref() {
            None | Some("") => "(not set)".to_string(),
            Some(key) => {
                let visible: String = key.chars().take(4).collect();
                format!("{}…", visible)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.output_file.as_deref(), Some(DEFAULT_OUTPUT_FILE));
        assert_eq!(settings.retry.max_attempts, 3);
        assert_eq!(settings.retry.backoff_base_ms, 1000);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.deck_id = Some("17".into());
        settings.mode = Some(ExportMode::Advanced);
        settings.filters.max_frequency_rank = Some(5000);

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"mode": "basic", "filters": {"include_never_forget": true}}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.mode, Some(ExportMode::Basic));
        assert_eq!(loaded.filters.include_never_forget, Some(true));
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.retry, RetrySettings::default());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, ExportError::Config(_)));
    }

    #[test]
    fn test_presets_merge_prefers_overlay() {
        let base = FilterPresets {
            min_occurrences: Some(2),
            max_results: Some(100),
            ..Default::default()
        };
        let overlay = FilterPresets {
            max_results: Some(10),
            include_banished: Some(true),
            ..Default::default()
        };

        let merged = base.merged_with(&overlay);
        assert_eq!(merged.min_occurrences, Some(2));
        assert_eq!(merged.max_results, Some(10));
        assert_eq!(merged.include_banished, Some(true));
    }

    #[test]
    fn test_masked_api_key() {
        let mut settings = Settings::default();
        assert_eq!(settings.masked_api_key(), "(not set)");
        settings.api_key = Some("abcdef123456".into());
        assert_eq!(settings.masked_api_key(), "abcd…");
    }
}
