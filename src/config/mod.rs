//! Configuration loading for the deploykit binary.
//!
//! The core modules take everything as arguments. This module is where those
//! arguments come from when deploykit runs as a command: a TOML file describing
//! one resource kind plus optional keyword sources.
//!
//! # Modules
//!
//! - `engine` - [`EngineConfig`], the per-resource-kind settings
//! - `parser` - Generic TOML parsing with file path context
//!
//! # Keyword precedence
//!
//! Later sources override earlier ones, key by key:
//!
//! 1. `keywords_file` named in the config
//! 2. `[keywords]` table in the config
//! 3. `--keywords <file.json>` on the command line
//! 4. `--keyword-mappings <json>` or `DEPLOYKIT_KEYWORD_MAPPINGS`

mod engine;
mod parser;

pub use engine::{EngineConfig, load_keyword_file};
pub use parser::parse_config;
