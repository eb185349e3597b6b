//! Main entry point for the ytrans command line tool.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error};
use ytrans_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("ytrans failed: {:#}", e);
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<String> {
    let config = ytrans_cli::resolve_config(cli).context("Failed to load configuration")?;

    ytrans_common::init_logging(config.logging_config())
        .context("Failed to initialize logging")?;
    debug!("Effective configuration: {:?}", config);

    ytrans_cli::run(cli, &config).context("Lookup failed")
}
