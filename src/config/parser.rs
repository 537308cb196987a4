//! Generic TOML configuration parsing.
//!
//! Reads a file and deserializes it into any [`serde::de::DeserializeOwned`]
//! type, attaching the file path to both read and parse failures.
//!
//! Example error output:
//! ```text
//! Failed to parse config file: /path/to/deploykit.toml
//! Caused by:
//!     invalid type: integer `1`, expected a string
//! ```

use anyhow::{Context, Result};
use std::path::Path;

/// Parse a TOML configuration file into the specified type.
///
/// # Examples
///
/// ```rust,no_run
/// use deploykit::config::{EngineConfig, parse_config};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let config: EngineConfig = parse_config(Path::new("deploykit.toml"))?;
/// println!("{} templated field(s)", config.templated_fields.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails when the file cannot be read, is not valid TOML, or does not match `T`.
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
