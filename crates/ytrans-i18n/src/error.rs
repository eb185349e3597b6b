//! Error types for translation loading and lookup

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or querying translations
#[derive(Error, Debug)]
pub enum I18nError {
    /// The key path has more segments than the mapping has nesting levels
    #[error("Path is too deep: '{path}' has {segments} keys, while the mapping depth is {max_depth}")]
    PathTooDeep {
        path: String,
        segments: usize,
        max_depth: usize,
    },

    /// A segment of the key path does not exist at its traversal position
    #[error("Key not found: '{segment}' in path '{path}'")]
    KeyNotFound { path: String, segment: String },

    /// The language is not registered in the group
    #[error("Language not found: '{language}' in group '{group}'")]
    LanguageNotFound { group: String, language: String },

    /// The group is not registered in the registry
    #[error("Group not found: '{group}'")]
    GroupNotFound { group: String },

    /// A template placeholder has no matching format value
    #[error("Missing format key: '{key}'")]
    MissingFormatKey { key: String },

    /// A template string could not be parsed
    #[error("Invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// The extension has no known parser
    #[error("Unsupported translation file extension: '{extension}'")]
    UnsupportedExtension { extension: String },

    /// A translation file could not be decoded
    #[error("Failed to parse translation file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A translation file or directory could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl I18nError {
    /// True for the errors a lookup with a default swallows.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Self::PathTooDeep { .. } | Self::KeyNotFound { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
