//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use literalura_core::config::DEFAULT_DATABASE_PATH;
use literalura_core::gutendex::{
    DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS,
};
use literalura_core::{AppConfig, DatabaseLocation, HttpTimeouts};

/// Search Gutendex and keep a local catalog of books and authors.
///
/// Starts an interactive menu on stdin/stdout. Logs are written to stderr.
#[derive(Parser, Debug)]
#[command(name = "literalura")]
#[command(author, version, about)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Catalog database file
    #[arg(short = 'd', long, default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Keep the catalog in memory for this session only
    #[arg(long, conflicts_with = "database")]
    pub in_memory: bool,

    /// Gutendex API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// HTTP connect timeout in seconds (1-300)
    #[arg(
        long,
        default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..=300)
    )]
    pub connect_timeout: u64,

    /// HTTP request timeout in seconds (1-3600)
    #[arg(
        long,
        default_value_t = DEFAULT_READ_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..=3600)
    )]
    pub timeout: u64,
}

impl Args {
    /// Default log level when `RUST_LOG` is not set.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Converts parsed arguments into the library configuration.
    #[must_use]
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            database: if self.in_memory {
                DatabaseLocation::InMemory
            } else {
                DatabaseLocation::File(self.database.clone())
            },
            api_base_url: self.api_base_url.clone(),
            timeouts: HttpTimeouts {
                connect_secs: self.connect_timeout,
                read_secs: self.timeout,
            },
        }
    }
}
