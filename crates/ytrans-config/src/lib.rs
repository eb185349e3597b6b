//! # ytrans config
//!
//! Validated configuration for ytrans.
//!
//! Configuration comes from a YAML or TOML file, falls back to built-in
//! defaults, and can be overridden through `YTRANS_*` environment variables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use defaults::DEFAULT_LOG_LEVEL;
pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_VAR, DEFAULT_CONFIG_FILES};
pub use schema::{Config, LoggingSettings, TranslationsConfig};
