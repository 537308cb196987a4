//! `deploykit checksum` - digest a file, optionally comparing it with another.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::{SourceArgs, read_input};
use crate::checksum::{checksum_str, checksums_match};
use crate::templating::resolve_tokens;

/// Print the SHA-256 digest of a file after keyword substitution.
#[derive(Args, Debug)]
pub struct ChecksumCommand {
    /// File to digest.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Compare with this file instead of printing the digest.
    ///
    /// Prints `identical` or `different`; both files are keyword-resolved first.
    #[arg(long, value_name = "OTHER")]
    pub compare: Option<PathBuf>,

    #[command(flatten)]
    pub sources: SourceArgs,
}

impl ChecksumCommand {
    pub fn execute(self) -> Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    /// Produce the rendered output without printing it.
    pub fn run(&self) -> Result<String> {
        let ctx = self.sources.load()?;
        let local = resolve_tokens(&read_input(&self.input)?, &ctx.mappings);

        match &self.compare {
            Some(other) => {
                let remote = resolve_tokens(&read_input(other)?, &ctx.mappings);
                let verdict = if checksums_match(&local, &remote) {
                    "identical"
                } else {
                    "different"
                };
                tracing::debug!(
                    target: "cli",
                    "{} vs {}: {}",
                    self.input.display(),
                    other.display(),
                    verdict
                );
                Ok(verdict.to_string())
            }
            None => Ok(checksum_str(&local)),
        }
    }
}
