//! Docsite - validate and resolve documentation site configuration.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{ConfigError, SiteConfig, init_config};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    if let Commands::Init { name, dry } = &cli.command {
        return cli::init::new_site(&cwd, name.as_deref(), &cli.config, *dry);
    }

    let config = load_config(&cli, &cwd)?;

    match &cli.command {
        Commands::Check => cli::check::check_config(&config),
        Commands::Resolve { args } => cli::resolve::output_config(&config, args),
        Commands::Init { .. } => Ok(()),
    }
}

/// Locate, load and resolve the config, then store it process-wide.
///
/// Validation failures are printed as a grouped report and end the process.
fn load_config(cli: &Cli, cwd: &std::path::Path) -> Result<Arc<SiteConfig>> {
    let path = cli::common::locate_config(cwd, &cli.config)?;

    match SiteConfig::load(&path) {
        Ok(config) => init_config(config),
        Err(err) => {
            if let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() {
                eprintln!("{diag}");
                std::process::exit(1);
            }
            Err(err.context(format!("Failed to load '{}'", path.display())))
        }
    }
}
