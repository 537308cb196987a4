//! Core types for deploykit
//!
//! This module holds the pieces every other module shares: the error type and the
//! JSON aliases the templating and normalization code pass around.
//!
//! - [`DeployError`] - Enumerated failure kinds (argument, parse, validation, ...)
//! - [`ErrorContext`] - Terminal-friendly wrapper with suggestions
//! - [`user_friendly_error`] - Convert any [`anyhow::Error`] for display
//! - [`KeywordMappings`] - The keyword table placeholders resolve against

pub mod error;

pub use error::{DeployError, ErrorContext, user_friendly_error};

/// Name-to-value table supplying replacement values for `@@keyword@@` placeholders.
///
/// Values may be any JSON value. Object order is the order keys were defined.
pub type KeywordMappings = serde_json::Map<String, serde_json::Value>;

/// Result alias for deploykit library operations.
pub type Result<T, E = DeployError> = std::result::Result<T, E>;
