//! `deploykit parse` - resolve keywords in one JSON file and print the result.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::{SourceArgs, read_input, render_json};
use crate::templating::parse_json_file;
use crate::validation::reject_reserved_keys;

/// Parse a single JSON asset after keyword substitution.
///
/// When the config lists `reserved_keys`, the parsed value must not contain any
/// of them at the top level.
#[derive(Args, Debug)]
pub struct ParseCommand {
    /// JSON file to parse.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Print compact JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,
}

impl ParseCommand {
    pub fn execute(self) -> Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    /// Produce the rendered output without printing it.
    pub fn run(&self) -> Result<String> {
        let ctx = self.sources.load()?;
        let label = self.input.display().to_string();
        let text = read_input(&self.input)?;

        let value = parse_json_file(&label, &text, &ctx.mappings)?;

        if !ctx.config.reserved_keys.is_empty() {
            reject_reserved_keys(&value, &ctx.config.reserved_keys, &label)?;
        }

        let reduced = ctx.config.property_reducer().reduce(&value);
        Ok(render_json(&reduced, !self.compact))
    }
}
