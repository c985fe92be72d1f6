//! CLI argument parsing with clap
//!
//! Defines the command-line interface structure using clap. The tool is
//! single-shot and interactive, so there are no subcommands — only global
//! flags controlling configuration and log verbosity.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// An interactive console notifier
#[derive(Parser, Debug)]
#[command(name = "courier-rs")]
#[command(about = "Dispatch a message through an interactively chosen notification channel")]
#[command(long_about = "
Courier-rs is a small interactive console notifier. It asks which channel to
use (1. Email, 2. SMS, 3. Telegram), asks for a message, and dispatches the
message once through the chosen channel.

EXAMPLES:
    # Run interactively
    courier-rs

    # Use a custom configuration file
    courier-rs --config /path/to/courier.toml

    # Run with verbose logging on stderr
    courier-rs --verbose

    # Pipe the two input lines in
    printf '2\\nTest\\n' | courier-rs
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the layered
    /// config directory. The file should be in TOML format and must exist
    /// and be readable.
    ///
    /// Example: --config /etc/courier-rs/production.toml
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration.
    /// This affects which configuration files are loaded.
    ///
    /// Available values: development (dev), production (prod), test
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Increases log output on stderr to debug level. Useful for seeing how
    /// the selection and dispatch flow behaves. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output on stderr
    ///
    /// Reduces log output to error level only. The prompts and the delivery
    /// line on stdout are unaffected. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Environment options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Environment {
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "production", alias = "prod")]
    Production,
    #[value(name = "test")]
    Test,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Development => crate::config::Environment::Development,
            Environment::Production => crate::config::Environment::Production,
            Environment::Test => crate::config::Environment::Test,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["courier-rs"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.env.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["courier-rs", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_aliases() {
        let cli = Cli::try_parse_from(["courier-rs", "--env", "prod"]).unwrap();
        assert!(matches!(cli.env, Some(Environment::Production)));
        let cli = Cli::try_parse_from(["courier-rs", "--env", "dev"]).unwrap();
        assert!(matches!(cli.env, Some(Environment::Development)));
    }

    #[test]
    fn test_missing_config_file_rejected() {
        let result = Cli::try_parse_from(["courier-rs", "--config", "/no/such/file.toml"]);
        assert!(result.is_err());
    }
}
