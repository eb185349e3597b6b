//! Error types for the command line application.

use ytrans_config::ConfigError;
use ytrans_i18n::I18nError;

/// Errors surfaced by a `ytrans` invocation.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Translation loading or lookup error.
    #[error(transparent)]
    I18n(#[from] I18nError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// YAML output could not be produced.
    #[error("Failed to write YAML output: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON output could not be produced.
    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the command line application.
pub type CliResult<T> = Result<T, CliError>;
