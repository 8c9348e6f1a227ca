//! Configuration settings for dayplan.
//!
//! Settings are loaded from `~/.dayplan/config.yaml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PlannerError;
use crate::features::draft::DraftDefaults;
use crate::features::quickadd::{ParserOptions, QuickAddParser, Vocabulary};
use crate::planner::Bucket;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Quick-add parser settings.
    pub quick_add: QuickAddConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Quick-add parser settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QuickAddConfig {
    /// Bucket given to drafts whose text names none.
    #[serde(default)]
    pub default_bucket: Bucket,
    /// Swallow a lone am/pm token even when there is no time for it.
    #[serde(default = "default_true")]
    pub consume_orphan_meridiem: bool,
    /// Extra bucket markers, e.g. `"!NOW": PRIORITY`.
    #[serde(default)]
    pub bucket_aliases: BTreeMap<String, Bucket>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn or error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for QuickAddConfig {
    fn default() -> Self {
        Self {
            default_bucket: Bucket::default(),
            consume_orphan_meridiem: default_true(),
            bucket_aliases: BTreeMap::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl QuickAddConfig {
    /// Planner vocabulary extended with the configured bucket aliases.
    #[must_use]
    pub fn vocabulary(&self) -> Vocabulary {
        self.bucket_aliases
            .iter()
            .fold(Vocabulary::planner(), |vocab, (alias, bucket)| {
                vocab.with_bucket_alias(alias, *bucket)
            })
    }

    #[must_use]
    pub const fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            consume_orphan_meridiem: self.consume_orphan_meridiem,
        }
    }

    /// A parser configured from these settings.
    #[must_use]
    pub fn parser(&self) -> QuickAddParser {
        QuickAddParser::new(self.vocabulary()).with_options(self.parser_options())
    }

    #[must_use]
    pub fn draft_defaults(&self) -> DraftDefaults {
        DraftDefaults {
            bucket: self.default_bucket,
            ..DraftDefaults::default()
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, PlannerError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PlannerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PlannerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert_eq!(config.quick_add.default_bucket, Bucket::Priority);
        assert!(config.quick_add.consume_orphan_meridiem);
        assert!(config.quick_add.bucket_aliases.is_empty());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.quick_add.default_bucket = Bucket::ShouldCould;
        config
            .quick_add
            .bucket_aliases
            .insert("!NOW".to_string(), Bucket::Priority);
        config.logging.level = "debug".to_string();

        std::fs::write(&config_path, serde_yaml::to_string(&config).unwrap()).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r#"
quick_add:
  consume_orphan_meridiem: false
  bucket_aliases:
    "!later": SHOULD_COULD
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert!(!config.quick_add.consume_orphan_meridiem);
        // Defaults should be used for missing fields
        assert_eq!(config.quick_add.default_bucket, Bucket::Priority);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "quick_add:\n  default_bucket: SOMEDAY\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));
    }

    #[test]
    fn test_configured_parser() {
        let mut config = QuickAddConfig::default();
        config
            .bucket_aliases
            .insert("!later".to_string(), Bucket::ShouldCould);
        config.consume_orphan_meridiem = false;

        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let task = config.parser().parse("buy a lamp !LATER", day);
        assert_eq!(task.bucket, Some(Bucket::ShouldCould));
        assert_eq!(task.title, "buy a lamp");
    }
}
