//! CLI module for courier-rs
//!
//! This module provides:
//! - Argument parsing with clap
//! - Settings loading from config files plus CLI overrides
//! - The interactive selection-and-dispatch flow

pub mod executor;
pub mod parser;
pub mod prompt;
pub mod validation;

pub use executor::execute;
pub use parser::Cli;

use crate::config::{ConfigLoader, Settings};

/// Load settings, applying CLI argument overrides
///
/// `--config` pins a single configuration file; otherwise the layered
/// loader applies, with `--env` forcing the environment layer. The
/// `--verbose`/`--quiet` flags override the configured log level.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let loader = match cli.config {
        Some(ref path) => ConfigLoader::with_file(path),
        None => ConfigLoader::new()?,
    };
    let loader = match cli.env {
        Some(env) => loader.with_environment(env.into()),
        None => loader,
    };

    let mut settings = loader.load()?;
    apply_verbosity(cli, &mut settings);

    Ok(settings)
}

/// Map `--verbose`/`--quiet` onto the configured log level
fn apply_verbosity(cli: &Cli, settings: &mut Settings) {
    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }
}
