//! Configuration management for checkfile.
//!
//! Handles command-line argument parsing. The checking behavior itself is
//! fixed; the only setting is the log filter for standard error.

use anyhow::Result;
use clap::Parser;

/// Log filter used when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments for checkfile
#[derive(Debug, Parser)]
#[command(name = "checkfile")]
#[command(about = "Check that every line of standard input holds two integers")]
#[command(version)]
pub struct Args {
    /// Log level for messages on standard error
    #[arg(
        long,
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Log filter, overridden by `RUST_LOG` when set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            log_level: args.log_level,
        })
    }

    /// Install `env_logger` on standard error
    pub fn init_logging(&self) {
        let env = env_logger::Env::default().default_filter_or(self.log_level.as_str());
        // An already-installed logger wins.
        let _ =env_logger::Builder::from_env(env).try_init();
    }
}
