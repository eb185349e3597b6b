//! Default values for every configuration section.

use crate::schema::{LoggingSettings, TranslationsConfig};
use ytrans_common::LogFormat;
use ytrans_i18n::{DEFAULT_EXTENSIONS, DEFAULT_ROOT};

/// Log level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            root_dir: DEFAULT_ROOT.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
            file_path: None,
        }
    }
}
