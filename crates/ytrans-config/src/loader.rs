//! Configuration loading utilities

use crate::schema::Config;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};
use ytrans_common::LogFormat;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_VAR: &str = "YTRANS_CONFIG_PATH";

/// File names probed, in order, when no configuration path is given
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["ytrans.yaml", "ytrans.yml", "ytrans.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file {}: {source}", path.display())]
    IoError {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The file extension is neither YAML nor TOML
    #[error("Unsupported configuration file format: {}", path.display())]
    UnsupportedFormat {
        /// Offending file
        path: PathBuf,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Why the value was rejected
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

enum FileFormat {
    Yaml,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a YAML or TOML file, apply overrides read through `lookup` and
    /// validate the result
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::read_layered(Some(path.as_ref()), Path::new("."), lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Resolve and validate the configuration, probing `dir` for default
    /// files and reading variables through `lookup`
    pub fn load_from<F>(dir: &Path, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::read_layered(None, dir, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Read the configuration file and apply overrides, leaving validation
    /// to the caller.
    ///
    /// The file is `explicit` when given, else the one named by
    /// [`CONFIG_PATH_VAR`], else the first of [`DEFAULT_CONFIG_FILES`] found
    /// in `dir`. Without any file the defaults are used.
    pub fn read_layered<F>(
        explicit: Option<&Path>,
        dir: &Path,
        lookup: F,
    ) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| lookup(CONFIG_PATH_VAR).map(PathBuf::from))
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(|name| dir.join(name))
                    .find(|candidate| candidate.is_file())
            });

        let mut config = match &path {
            Some(path) => {
                let config = Self::read_file(path)?;
                info!("Loaded configuration from {:?}", path);
                config
            }
            None => {
                // No config file found, use defaults with env overrides
                debug!("No configuration file found in {:?}, using defaults", dir);
                Config::default()
            }
        };
        Self::apply_overrides_from(&mut config, lookup)?;
        Ok(config)
    }

    /// Parse a configuration file without overrides or validation
    pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(match format {
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        })
    }

    /// Apply overrides read through `lookup` to configuration
    pub fn apply_overrides_from<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Translation overrides
        if let Some(root_dir) = lookup("YTRANS_TRANSLATIONS_DIR") {
            config.translations.root_dir = root_dir;
        }

        if let Some(extensions) = lookup("YTRANS_EXTENSIONS") {
            config.translations.extensions = extensions
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Logging overrides
        if let Some(level) = lookup("YTRANS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("YTRANS_LOG_FORMAT") {
            config.logging.format =
                LogFormat::from_str(&format).map_err(|e| ConfigError::EnvParseError {
                    var: "YTRANS_LOG_FORMAT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Some(file_path) = lookup("YTRANS_LOG_FILE") {
            config.logging.file_path = Some(file_path).filter(|path| !path.trim().is_empty());
        }

        Ok(())
    }
}
