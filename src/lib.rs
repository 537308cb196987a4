//! deploykit - keyword templating and normalization for deployment assets
//!
//! Deployment tooling keeps resource definitions (tenant settings, clients,
//! database connections with their scripts, custom pages) as files with
//! `@@keyword@@` placeholders, and pushes them to a remote management API per
//! environment. deploykit is the pure core those per-resource handlers share:
//!
//! - [`templating`] - Resolve placeholders against a keyword mapping, and parse a
//!   single JSON asset with errors that name the file
//! - [`assets`] - Normalize lists of named resources into name-keyed maps whose
//!   templated fields are canonical strings
//! - [`checksum`] - SHA-256 digests for deciding whether content changed
//! - [`reducer`] - Recursive property exclusion for filtered JSON output
//! - [`validation`] - Reserved-key checks shared by handlers
//!
//! None of these modules perform I/O or keep state; every call reads its
//! arguments and returns a fresh value, so they are safe to call from many
//! threads at once. [`config`] and [`cli`] are the only modules that read files.
//!
//! # Example
//!
//! ```
//! use deploykit::assets::{UnifyOptions, unify};
//! use deploykit::checksum::checksum_str;
//! use serde_json::json;
//!
//! let mappings = json!({ "hello": "goodbye" });
//! let mappings = mappings.as_object().unwrap();
//!
//! let pages = vec![json!({ "name": "login", "html": "<p>@@hello@@</p>" })];
//! let unified = unify(&pages, mappings, &UnifyOptions::new(["html"])).unwrap();
//!
//! let html = unified["login"]["html"].as_str().unwrap();
//! assert_eq!(html, r#"<p>"goodbye"</p>"#);
//! assert_eq!(checksum_str(html).len(), 64);
//! ```

// Core library
pub mod assets;
pub mod checksum;
pub mod core;
pub mod reducer;
pub mod templating;
pub mod validation;

// Binary support
pub mod cli;
pub mod config;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
