//! # ytrans
//!
//! Command line access to nested translation files.
//!
//! ```text
//! ytrans --root translations get site home:greeting en --arg name=Ana
//! ytrans get-all site home:menu --by-key --output json
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Commands, OutputFormat};
pub use error::{CliError, CliResult};

use std::path::Path;
use tracing::info;
use ytrans_config::{Config, ConfigError, ConfigLoader};
use ytrans_i18n::GroupRegistry;

/// Load the configuration file (explicit or discovered) and layer the
/// command line options on top.
pub fn resolve_config(cli: &Cli) -> CliResult<Config> {
    resolve_config_from(cli, Path::new("."), |name| std::env::var(name).ok())
}

/// Like [`resolve_config`], probing `dir` for default files and reading
/// environment overrides through `lookup`. Validation runs once, after the
/// command line options are applied.
pub fn resolve_config_from<F>(cli: &Cli, dir: &Path, lookup: F) -> CliResult<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ConfigLoader::read_layered(cli.config.as_deref(), dir, lookup)?;
    apply_cli_overrides(cli, &mut config);
    config.validate_all().map_err(ConfigError::from)?;
    Ok(config)
}

/// Command line options take precedence over file and environment values
pub fn apply_cli_overrides(cli: &Cli, config: &mut Config) {
    if let Some(root) = &cli.root {
        config.translations.root_dir = root.to_string_lossy().into_owned();
    }
    if !cli.extensions.is_empty() {
        config.translations.extensions = cli.extensions.clone();
    }
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
}

/// Load the translation tree described by `config`, run the subcommand and
/// return the serialized result.
pub fn run(cli: &Cli, config: &Config) -> CliResult<String> {
    let extensions = config.extension_set()?;
    let registry = GroupRegistry::load(config.root_dir(), &extensions)?;
    info!(
        "Loaded {} groups from {:?}",
        registry.len(),
        registry.root()
    );

    let value = commands::execute(&cli.command, &registry)?;
    output::render(&value, cli.output)
}
