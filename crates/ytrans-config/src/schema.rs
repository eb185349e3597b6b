//! Configuration schema definitions using serde with validation attributes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::{Validate, ValidationErrors};
use ytrans_common::{LogFormat, LoggingConfig};
use ytrans_i18n::{ExtensionSet, I18nResult};

/// Main configuration structure for ytrans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Where translation files live and which ones are read.
    #[validate]
    pub translations: TranslationsConfig,
    /// Logging output.
    #[validate]
    pub logging: LoggingSettings,
}

/// Translation tree configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TranslationsConfig {
    /// Root directory holding one subdirectory per group.
    #[validate(custom(
        function = "crate::validation::validate_root_dir",
        message = "Translations root directory cannot be empty"
    ))]
    pub root_dir: String,
    /// File extensions read as translation files.
    #[validate(length(min = 1, message = "At least one translation file extension is required"))]
    #[validate(custom(
        function = "crate::validation::validate_extensions",
        message = "Extensions must be one of: yaml, yml, json, toml"
    ))]
    pub extensions: Vec<String>,
}

/// Logging configuration as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level or filter directives, e.g. `info` or `ytrans_i18n=debug`.
    #[validate(custom(
        function = "crate::validation::validate_log_level",
        message = "Log level must be one of: trace, debug, info, warn, error, or a filter directive"
    ))]
    pub level: String,
    /// Line layout.
    pub format: LogFormat,
    /// Append log lines to this file instead of stderr.
    #[validate(custom(
        function = "crate::validation::validate_file_path",
        message = "Log file path contains invalid characters"
    ))]
    pub file_path: Option<String>,
}

impl Config {
    /// Runs every validation rule on the configuration.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }

    /// Root directory of the translation tree.
    pub fn root_dir(&self) -> &Path {
        Path::new(&self.translations.root_dir)
    }

    /// The configured extensions as a parser-checked set.
    pub fn extension_set(&self) -> I18nResult<ExtensionSet> {
        ExtensionSet::new(&self.translations.extensions)
    }

    /// Settings for [`ytrans_common::init_logging`].
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            format: self.logging.format,
            file_path: self.logging.file_path.clone(),
            ..LoggingConfig::default()
        }
    }
}
