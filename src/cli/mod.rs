//! Command-line interface for deploykit.
//!
//! The binary is a thin wrapper over the library: it reads files, builds the
//! engine configuration, calls the pure core, and prints the result to stdout.
//! Logs go to stderr.
//!
//! # Available Commands
//!
//! - `normalize` - Unify a resource list into a name-keyed map of canonical fields
//! - `parse` - Resolve keywords in one JSON file and print the parsed value
//! - `checksum` - Print the SHA-256 digest of a file, or compare two files
//! - `reduce` - Remove named properties at every depth of a JSON document
//!
//! # Examples
//!
//! ```bash
//! deploykit normalize databases.json --config databases.toml
//! deploykit parse tenant.json --keywords prod.json
//! deploykit checksum pages/login.html --compare remote/login.html
//! deploykit reduce client.json --exclude client_id --exclude updated_at
//! ```
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only report errors

mod checksum;
mod common;
mod normalize;
mod parse;
mod reduce;

pub use checksum::ChecksumCommand;
pub use common::{CommandContext, SourceArgs};
pub use normalize::NormalizeCommand;
pub use parse::ParseCommand;
pub use reduce::ReduceCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Top-level command-line interface.
#[derive(Parser, Debug)]
#[command(
    name = "deploykit",
    about = "Keyword templating and normalization for deployment assets",
    version,
    long_about = "deploykit resolves @@keyword@@ placeholders in deployment assets, \
                  normalizes resource lists into canonical text, and computes digests \
                  for change detection."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to `RUST_LOG=debug`).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress everything except errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Unify a JSON list of resources into a name-keyed map
    Normalize(NormalizeCommand),

    /// Resolve keywords in a JSON file and print the parsed result
    Parse(ParseCommand),

    /// Print the SHA-256 digest of a file
    Checksum(ChecksumCommand),

    /// Remove properties from a JSON document at every depth
    Reduce(ReduceCommand),
}

impl Cli {
    /// Install logging and run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns whatever the subcommand returns; the caller is expected to render
    /// it with [`user_friendly_error`](crate::core::user_friendly_error).
    pub fn execute(self) -> Result<()> {
        init_logging(self.log_level());

        match self.command {
            Commands::Normalize(cmd) => cmd.execute(),
            Commands::Parse(cmd) => cmd.execute(),
            Commands::Checksum(cmd) => cmd.execute(),
            Commands::Reduce(cmd) => cmd.execute(),
        }
    }

    /// Log level requested on the command line.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. Calling this twice is harmless.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
