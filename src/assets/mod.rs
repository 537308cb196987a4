//! Asset normalization.
//!
//! Resource definitions arrive as lists of JSON objects, each with a `name` and
//! some templated fields. A templated field holds either structured data (already
//! parsed, e.g. loaded from a `.json` sibling file) or raw text with placeholders
//! (a script, an HTML page, or JSON that has not been parsed yet).
//!
//! [`unify`] turns such a list into a name-keyed map where every templated field is
//! a canonical string, so local and remote copies can be compared as text:
//!
//! - structured values become compact JSON in definition order
//! - strings have their keywords resolved and are otherwise left untouched
//!
//! Strings are never parsed here. HTML and script bodies are not JSON, and
//! validation belongs to [`parse_json_file`](crate::templating::parse_json_file).

mod options;


pub use options::{DuplicatePolicy, UnifyOptions};

use serde_json::{Map, Value};

use crate::core::{DeployError, KeywordMappings, Result};
use crate::templating::{resolve_tokens, unresolved_tokens};

/// Field every resource entry must carry.
pub const NAME_FIELD: &str = "name";

/// A single normalized resource: templated fields are strings, children are keyed by name.
pub type NormalizedResource = Map<String, Value>;

/// Normalized resources keyed by `name`.
pub type NormalizedAssets = Map<String, Value>;

/// Canonicalize one templated field.
///
/// Structured values ignore `mappings` and become compact JSON text. Strings are
/// keyword-resolved and returned verbatim otherwise.
///
/// # Examples
///
/// ```
/// use deploykit::assets::normalize_field;
/// use serde_json::json;
///
/// let mappings = json!({ "two": 2 });
/// let mappings = mappings.as_object().unwrap();
///
/// assert_eq!(normalize_field(&json!({ "b": 2 }), mappings), r#"{"b":2}"#);
/// assert_eq!(normalize_field(&json!(r#"{"b":@@two@@}"#), mappings), r#"{"b":2}"#);
/// ```
#[must_use]
pub fn normalize_field(value: &Value, mappings: &KeywordMappings) -> String {
    match value {
        Value::String(text) => resolve_tokens(text, mappings),
        structured => structured.to_string(),
    }
}

/// Normalize a list of resources into a map keyed by resource name.
///
/// For each entry:
/// - fields named in `options` as templated are replaced by [`normalize_field`]
/// - the child list field, when configured and present, is unified recursively
///   with the same mappings and options and replaced by the resulting map
/// - every other field is copied unchanged; absent fields stay absent
///
/// Entries sharing a name follow [`UnifyOptions::duplicate_policy`].
///
/// # Errors
///
/// - [`DeployError::InvalidResource`] if an entry is not an object, lacks a string
///   `name`, or has a child list field that is not an array
/// - [`DeployError::DuplicateResourceName`] under [`DuplicatePolicy::Reject`]
///
/// Errors raised inside a child list name the enclosing resources.
///
/// # Examples
///
/// ```
/// use deploykit::assets::{UnifyOptions, unify};
/// use serde_json::json;
///
/// let resources = vec![
///     json!({ "name": "client1", "metadataFile": { "b": 2 }, "configFile": { "a": 1 } }),
///     json!({ "name": "client2", "metadataFile": "{\"b\":@@two@@}" }),
/// ];
/// let mappings = json!({ "two": 2 });
/// let options = UnifyOptions::new(["metadataFile", "configFile"]);
///
/// let unified = unify(&resources, mappings.as_object().unwrap(), &options).unwrap();
/// assert_eq!(unified["client1"]["configFile"], r#"{"a":1}"#);
/// assert_eq!(unified["client2"]["metadataFile"], r#"{"b":2}"#);
/// assert!(unified["client2"].get("configFile").is_none());
/// ```
pub fn unify(
    resources: &[Value],
    mappings: &KeywordMappings,
    options: &UnifyOptions,
) -> Result<NormalizedAssets> {
    let mut unified = NormalizedAssets::new();

    for (index, entry) in resources.iter().enumerate() {
        let Value::Object(fields) = entry else {
            return Err(DeployError::InvalidResource {
                message: format!("resource at index {index} must be an object, found {}", kind_of(entry)),
            });
        };

        let name = fields.get(NAME_FIELD).and_then(Value::as_str).ok_or_else(|| {
            DeployError::InvalidResource {
                message: format!("resource at index {index} has no string '{NAME_FIELD}' field"),
            }
        })?;

        let normalized = normalize_resource(name, fields, mappings, options)?;

        if unified.contains_key(name) {
            match options.duplicate_policy() {
                DuplicatePolicy::Reject => {
                    return Err(DeployError::DuplicateResourceName {
                        name: name.to_string(),
                        parent: None,
                    });
                }
                DuplicatePolicy::Overwrite => {
                    tracing::warn!(
                        target: "assets",
                        "Resource '{}' is defined more than once; the later definition wins",
                        name
                    );
                }
            }
        }

        unified.insert(name.to_string(), Value::Object(normalized));
    }

    tracing::debug!(target: "assets", "Unified {} resource(s) into {} entries", resources.len(), unified.len());
    Ok(unified)
}

fn normalize_resource(
    name: &str,
    fields: &Map<String, Value>,
    mappings: &KeywordMappings,
    options: &UnifyOptions,
) -> Result<NormalizedResource> {
    let mut normalized = NormalizedResource::new();

    for (field, value) in fields {
        if options.child_list_field() == Some(field.as_str()) {
            let Value::Array(children) = value else {
                return Err(DeployError::InvalidResource {
                    message: format!(
                        "field '{field}' of resource '{name}' must be a list, found {}",
                        kind_of(value)
                    ),
                });
            };
            let nested = unify(children, mappings, options).map_err(|e| nest_error(name, e))?;
            normalized.insert(field.clone(), Value::Object(nested));
        } else if options.is_templated(field) {
            let text = normalize_field(value, mappings);
            if value.is_string() {
                let missing = unresolved_tokens(&text, mappings);
                if !missing.is_empty() {
                    tracing::debug!(
                        target: "assets",
                        "Field '{}' of resource '{}' keeps undefined keyword(s): {}",
                        field,
                        name,
                        missing.join(", ")
                    );
                }
            }
            normalized.insert(field.clone(), Value::String(text));
        } else {
            normalized.insert(field.clone(), value.clone());
        }
    }

    Ok(normalized)
}

fn nest_error(parent: &str, error: DeployError) -> DeployError {
    match error {
        DeployError::InvalidResource {
            message,
        } => DeployError::InvalidResource {
            message: format!("in resource '{parent}': {message}"),
        },
        DeployError::DuplicateResourceName {
            name,
            parent: inner,
        } => DeployError::DuplicateResourceName {
            name,
            parent: Some(match inner {
                Some(inner) => format!("{parent}/{inner}"),
                None => parent.to_string(),
            }),
        },
        other => other,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
