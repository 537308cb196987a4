//! SHA-256 content digests for change detection.
//!
//! Callers compare the digest of a locally rendered asset with the digest of the
//! remote copy to decide whether an update is needed. Digests are 64 lowercase
//! hexadecimal characters with no algorithm prefix.

use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::core::{DeployError, Result};

/// Length of a rendered digest in characters.
pub const CHECKSUM_HEX_LEN: usize = 64;

/// Compute the SHA-256 digest of `data` as lowercase hex.
///
/// Hashes the exact UTF-8 bytes, so line endings and whitespace matter.
///
/// # Examples
///
/// ```
/// use deploykit::checksum::checksum_str;
///
/// assert_eq!(
///     checksum_str("Some string value"),
///     "ec52355b4573bfac072b4fd2391e4b536edaabb09b55a4b71493b19fcf2461f1"
/// );
/// ```
#[must_use]
pub fn checksum_str(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the digest of a JSON payload that must be a string.
///
/// Intended for payloads whose type is only known at runtime (e.g. a field read
/// from an asset). Anything other than a string is rejected rather than hashed
/// through some stringified form.
///
/// # Errors
///
/// Returns [`DeployError::ArgumentError`] when `data` is not a JSON string.
///
/// # Examples
///
/// ```
/// use deploykit::checksum::generate_checksum;
/// use serde_json::json;
///
/// assert!(generate_checksum(&json!("Some string value")).is_ok());
/// assert!(generate_checksum(&json!({})).is_err());
/// ```
pub fn generate_checksum(data: &Value) -> Result<String> {
    match data {
        Value::String(text) => Ok(checksum_str(text)),
        other => Err(DeployError::ArgumentError {
            message: format!(
                "Must provide data as a string to generate a checksum, got {}",
                json_type_name(other)
            ),
        }),
    }
}

/// Whether two payloads have identical content, compared by digest.
#[must_use]
pub fn checksums_match(local: &str, remote: &str) -> bool {
    checksum_str(local) == checksum_str(remote)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
