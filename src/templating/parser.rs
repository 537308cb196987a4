//! Keyword-aware JSON parsing for single asset files.
//!
//! [`parse_json_file`] resolves `@@keyword@@` placeholders and then parses the
//! result. A failure names the source label so an operator can find the broken
//! file among hundreds of assets. This is also where a missing keyword shows up:
//! the unresolved placeholder makes the text invalid JSON.

use serde_json::Value;

use super::tokens::{resolve_tokens, suggest_keywords, unresolved_tokens};
use crate::core::{DeployError, KeywordMappings, Result};

/// Resolve keywords in `contents` and parse the result as JSON.
///
/// # Arguments
///
/// * `source_label` - Name used in error messages, usually the file path
/// * `contents` - Raw file text, possibly containing placeholders
/// * `mappings` - Keyword values; pass an empty map when there are none
///
/// # Errors
///
/// Returns [`DeployError::JsonParseError`] carrying `source_label` and the
/// serde_json diagnostic when the resolved text is not valid JSON.
///
/// # Examples
///
/// ```
/// use deploykit::core::KeywordMappings;
/// use deploykit::templating::parse_json_file;
/// use serde_json::json;
///
/// let value = parse_json_file("test", r#"{ "a": 1 }"#, &KeywordMappings::new()).unwrap();
/// assert_eq!(value, json!({ "a": 1 }));
///
/// let err = parse_json_file("clients/app.json", "json?", &KeywordMappings::new()).unwrap_err();
/// assert!(err.to_string().contains("clients/app.json"));
/// ```
pub fn parse_json_file(
    source_label: &str,
    contents: &str,
    mappings: &KeywordMappings,
) -> Result<Value> {
    let resolved = resolve_tokens(contents, mappings);

    serde_json::from_str(&resolved).map_err(|e| {
        let mut reason = e.to_string();

        let missing = unresolved_tokens(&resolved, mappings);
        if !missing.is_empty() {
            tracing::debug!(
                target: "templating::parser",
                "{} references undefined keyword(s): {}",
                source_label,
                missing.join(", ")
            );
            reason.push_str(&format!(" (undefined keywords: {})", missing.join(", ")));
            for keyword in &missing {
                let similar = suggest_keywords(keyword, mappings);
                if !similar.is_empty() {
                    reason.push_str(&format!(
                        "; did you mean {} for '{}'?",
                        similar.join(" or "),
                        keyword
                    ));
                }
            }
        }

        DeployError::JsonParseError {
            source_label: source_label.to_string(),
            reason,
        }
    })
}

/// Same as [`parse_json_file`], deserializing straight into `T`.
///
/// Shape mismatches are reported as [`DeployError::JsonParseError`] as well.
pub fn parse_json_file_as<T>(
    source_label: &str,
    contents: &str,
    mappings: &KeywordMappings,
) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let value = parse_json_file(source_label, contents, mappings)?;
    serde_json::from_value(value).map_err(|e| DeployError::JsonParseError {
        source_label: source_label.to_string(),
        reason: e.to_string(),
    })
}
