//! Test utilities for deploykit
//!
//! Helpers shared by unit tests and the integration suite: one-time logging setup
//! and small fixtures for keyword mappings and resource lists.
//!
//! # Example
//!
//! ```rust,no_run
//! use deploykit::test_utils::{init_test_logging, keyword_mappings};
//! use serde_json::json;
//!
//! init_test_logging(None);
//! let mappings = keyword_mappings(json!({ "hello": "goodbye" }));
//! assert_eq!(mappings.len(), 1);
//! ```

use std::sync::Once;

use serde_json::Value;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::core::KeywordMappings;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. Uses `level` when given, otherwise
/// `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Turn a `json!({...})` object literal into [`KeywordMappings`].
///
/// # Panics
///
/// Panics if `value` is not an object.
#[must_use]
pub fn keyword_mappings(value: Value) -> KeywordMappings {
    match value {
        Value::Object(map) => map,
        other => panic!("keyword mappings must be a JSON object, got {other}"),
    }
}

/// A database connection with two custom scripts, in raw (un-normalized) form.
///
/// Expects mappings `hello` and `two`.
#[must_use]
pub fn database_fixture() -> Vec<Value> {
    vec![serde_json::json!({
        "name": "database",
        "scripts": [
            {
                "name": "login",
                "htmlFile": "<html>@@hello@@</html>",
                "metadataFile": { "b": 2 },
                "scriptFile": { "a": 1 }
            },
            {
                "name": "else",
                "metadataFile": "{\"b\":@@two@@}",
                "scriptFile": "console.log(@@hello@@);"
            }
        ]
    })]
}
