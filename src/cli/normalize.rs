//! `deploykit normalize` - unify a resource list into a name-keyed map.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use super::common::{SourceArgs, read_input, render_json};
use crate::assets::unify;
use crate::core::KeywordMappings;
use crate::templating::parse_json_file;

/// Normalize a JSON list of resource definitions.
///
/// Templated fields (from `templated_fields` in the config) become canonical
/// strings; the configured child list becomes a map keyed by child name.
#[derive(Args, Debug)]
pub struct NormalizeCommand {
    /// JSON file containing an array of resources, each with a `name`.
    #[arg(value_name = "RESOURCES")]
    pub input: PathBuf,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Print compact JSON instead of pretty-printed output.
    #[arg(long)]
    pub compact: bool,
}

impl NormalizeCommand {
    pub fn execute(self) -> Result<()> {
        println!("{}", self.run()?);
        Ok(())
    }

    /// Produce the rendered output without printing it.
    pub fn run(&self) -> Result<String> {
        let ctx = self.sources.load()?;
        let label = self.input.display().to_string();
        let text = read_input(&self.input)?;

        // Placeholders inside string fields are resolved by unify, not here.
        let resources = match parse_json_file(&label, &text, &KeywordMappings::new())? {
            Value::Array(items) => items,
            _ => anyhow::bail!("{label} must contain a JSON array of resources"),
        };

        let unified = unify(&resources, &ctx.mappings, &ctx.config.unify_options())
            .with_context(|| format!("Failed to normalize resources from {label}"))?;

        tracing::info!(target: "cli", "Normalized {} resource(s) from {}", unified.len(), label);

        let reduced = ctx.config.property_reducer().reduce(&Value::Object(unified));
        Ok(render_json(&reduced, !self.compact))
    }
}
