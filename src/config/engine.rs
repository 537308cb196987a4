//! Per-resource-kind engine configuration (`deploykit.toml`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::parse_config;
use crate::assets::{DuplicatePolicy, UnifyOptions};
use crate::core::{DeployError, KeywordMappings};
use crate::reducer::PropertyReducer;
use crate::templating::parse_json_file;

/// Settings for normalizing one kind of resource.
///
/// Every field is optional in the file; an empty file yields a configuration with
/// no templated fields, no child list, and overwrite-on-duplicate.
///
/// ```toml
/// templated_fields = ["metadataFile", "scriptFile", "htmlFile"]
/// child_list_field = "scripts"
/// duplicate_names = "reject"
/// reserved_keys = ["login", "password_reset"]
/// exclude_properties = ["id", "updated_at"]
/// keywords_file = "keywords.json"
///
/// [keywords]
/// hello = "goodbye"
/// two = 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Field names whose values are canonicalized by `unify`.
    pub templated_fields: Vec<String>,

    /// Field holding a nested list of resources of the same shape.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_list_field: Option<String>,

    /// What to do with repeated resource names.
    pub duplicate_names: DuplicatePolicy,

    /// Keys that must not appear inline in settings objects.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reserved_keys: Vec<String>,

    /// Properties stripped from JSON output at every depth.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_properties: Vec<String>,

    /// Inline keyword mappings. Override entries loaded from `keywords_file`.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub keywords: KeywordMappings,

    /// JSON file with keyword mappings, relative to the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_file: Option<PathBuf>,
}

impl EngineConfig {
    /// Load from a TOML file and resolve `keywords_file` against its directory.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config: Self = parse_config(path)?;

        if let Some(keywords_file) = config.keywords_file.take() {
            let resolved = if keywords_file.is_relative() {
                path.parent().map_or(keywords_file.clone(), |dir| dir.join(&keywords_file))
            } else {
                keywords_file
            };
            config.keywords_file = Some(resolved);
        }

        tracing::debug!(
            target: "config",
            "Loaded {} with {} templated field(s)",
            path.display(),
            config.templated_fields.len()
        );
        Ok(config)
    }

    /// Options for [`unify`](crate::assets::unify) derived from this configuration.
    #[must_use]
    pub fn unify_options(&self) -> UnifyOptions {
        let options = UnifyOptions::new(self.templated_fields.iter().cloned())
            .with_duplicate_policy(self.duplicate_names);
        match &self.child_list_field {
            Some(field) => options.with_child_list(field.clone()),
            None => options,
        }
    }

    /// Reducer for the configured `exclude_properties`.
    #[must_use]
    pub fn property_reducer(&self) -> PropertyReducer {
        PropertyReducer::new(self.exclude_properties.clone())
    }

    /// Collect keyword mappings: `keywords_file` first, then inline `keywords`.
    ///
    /// # Errors
    ///
    /// Fails if the keywords file cannot be read, is not valid JSON, or is not an object.
    pub fn keyword_mappings(&self) -> Result<KeywordMappings> {
        let mut mappings = KeywordMappings::new();

        if let Some(path) = &self.keywords_file {
            mappings.extend(load_keyword_file(path)?);
        }

        for (key, value) in &self.keywords {
            mappings.insert(key.clone(), value.clone());
        }

        Ok(mappings)
    }
}

/// Read a JSON object of keyword mappings from disk.
///
/// # Errors
///
/// Fails if the file cannot be read, does not parse, or is not a JSON object.
pub fn load_keyword_file(path: &Path) -> Result<KeywordMappings> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keywords file: {}", path.display()))?;

    let label = path.display().to_string();
    match parse_json_file(&label, &contents, &KeywordMappings::new())? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(DeployError::ConfigError {
            message: format!(
                "Keywords file {} must contain a JSON object, found {}",
                label,
                if other.is_array() { "an array" } else { "a scalar" }
            ),
        }
        .into()),
    }
}
