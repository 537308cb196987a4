//! Shared validation helpers for resource handlers.
//!
//! Some settings objects must not carry keys that are deployed through a
//! dedicated resource kind. Tenant settings are the usual example: custom pages
//! like `login` or `password_reset` live in their own definitions, and finding them
//! inline means the deploy would push them twice.

use serde_json::Value;

use crate::core::{DeployError, Result};

/// Pretty-print a JSON value with two-space indentation, for error messages.
#[must_use]
pub fn dump_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Fail if `settings` contains any key from `reserved`.
///
/// `kind` names the settings object in the message (e.g. `"tenant settings"`).
/// Offending keys are reported in the order they appear in `settings`.
/// Non-object settings have no keys and always pass.
///
/// # Errors
///
/// Returns [`DeployError::ValidationError`] listing every reserved key found.
///
/// # Examples
///
/// ```
/// use deploykit::validation::reject_reserved_keys;
/// use serde_json::json;
///
/// let tenant = json!({ "friendly_name": "Acme", "login": { "html": "<p/>" } });
/// let err = reject_reserved_keys(&tenant, &["login", "error_page"], "tenant settings").unwrap_err();
/// assert!(err.to_string().contains("login"));
///
/// assert!(reject_reserved_keys(&json!({ "friendly_name": "Acme" }), &["login"], "tenant settings").is_ok());
/// ```
pub fn reject_reserved_keys<S>(settings: &Value, reserved: &[S], kind: &str) -> Result<()>
where
    S: AsRef<str>,
{
    let Value::Object(members) = settings else {
        return Ok(());
    };

    let found: Vec<Value> = members
        .keys()
        .filter(|key| reserved.iter().any(|r| r.as_ref() == key.as_str()))
        .map(|key| Value::String(key.clone()))
        .collect();

    if found.is_empty() {
        return Ok(());
    }

    tracing::debug!(target: "validation", "{} carries {} reserved key(s)", kind, found.len());

    Err(DeployError::ValidationError {
        message: format!(
            "The following keys {} were found in {}. They should be set separately.",
            dump_json(&Value::Array(found)),
            kind
        ),
    })
}
