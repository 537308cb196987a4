//! Options and helpers shared by every subcommand.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::config::{EngineConfig, load_keyword_file};
use crate::core::KeywordMappings;
use crate::templating::parse_json_file;

/// Where keyword mappings and engine settings come from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Engine configuration file (TOML).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with keyword mappings.
    #[arg(short, long, value_name = "FILE")]
    pub keywords: Option<PathBuf>,

    /// Inline JSON object with keyword mappings; overrides every other source.
    #[arg(long, value_name = "JSON", env = "DEPLOYKIT_KEYWORD_MAPPINGS")]
    pub keyword_mappings: Option<String>,
}

/// Engine settings and merged keyword mappings for one command run.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    pub config: EngineConfig,
    pub mappings: KeywordMappings,
}

impl SourceArgs {
    /// Load the configuration and merge keyword sources in precedence order.
    ///
    /// # Errors
    ///
    /// Fails if any configured source cannot be read or parsed.
    pub fn load(&self) -> Result<CommandContext> {
        let config = match &self.config {
            Some(path) => EngineConfig::load(path)?,
            None => EngineConfig::default(),
        };

        let mut mappings = config.keyword_mappings()?;

        if let Some(path) = &self.keywords {
            mappings.extend(load_keyword_file(path)?);
        }

        if let Some(inline) = &self.keyword_mappings {
            match parse_json_file("--keyword-mappings", inline, &KeywordMappings::new())? {
                Value::Object(map) => mappings.extend(map),
                _ => anyhow::bail!("--keyword-mappings must be a JSON object"),
            }
        }

        tracing::debug!(target: "cli", "Using {} keyword mapping(s)", mappings.len());

        Ok(CommandContext {
            config,
            mappings,
        })
    }
}

/// Read an input file as text.
///
/// # Errors
///
/// Fails with the file path in the message if the file cannot be read.
pub fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Render a JSON value for stdout.
#[must_use]
pub fn render_json(value: &Value, pretty: bool) -> String {
    if pretty {
        crate::validation::dump_json(value)
    } else {
        value.to_string()
    }
}
