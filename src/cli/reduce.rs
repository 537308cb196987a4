//! `deploykit reduce` - strip properties from a JSON document at every depth.

use anyhow::Result;
use clap::Args;
use std::collections::HashSet;
use std::path::PathBuf;

use super::common::{SourceArgs, read_input, render_json};
use crate::reducer::PropertyReducer;
use crate::templating::parse_json_file;

/// Remove the named properties wherever they appear.
///
/// Names come from `--exclude` and from `exclude_properties` in the config.
/// With neither, the document is printed unchanged.
#[derive(Args, Debug)]
pub struct ReduceCommand {
    /// JSON file to filter.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Property name to remove (repeatable).
    #[arg(short, long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Pretty-print instead of compact output.
    #[arg(long)]
    pub pretty: bool,
}

impl ReduceCommand {
    pub fn execute(self) -> Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    /// Produce the rendered output without printing it.
    pub fn run(&self) -> Result<String> {
        let ctx = self.sources.load()?;
        let label = self.input.display().to_string();
        let value = parse_json_file(&label, &read_input(&self.input)?, &ctx.mappings)?;

        let names: HashSet<String> =
            ctx.config.exclude_properties.iter().chain(&self.exclude).cloned().collect();
        let reducer = PropertyReducer::new(names);

        if self.pretty {
            Ok(render_json(&reducer.reduce(&value), true))
        } else {
            Ok(reducer.to_json_string(&value)?)
        }
    }
}
