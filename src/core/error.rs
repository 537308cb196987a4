//! Error handling for deploykit
//!
//! This module provides the error type shared by every deploykit operation and the
//! user-friendly reporting used by the command-line surface. It follows two rules:
//! 1. **Strongly-typed errors** so callers can tell a parse failure from an argument
//!    or validation failure without inspecting message text
//! 2. **Human-readable messages** that always name the offending source or resource
//!
//! # Architecture
//!
//! - [`DeployError`] - Enumerated error kinds for all deploykit failures
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for terminal output
//!
//! Library functions return `Result<T, DeployError>`. The binary works with
//! [`anyhow::Error`] and calls [`user_friendly_error`] once at the top level.
//!
//! # Examples
//!
//! ```rust,no_run
//! use deploykit::core::{DeployError, user_friendly_error};
//!
//! let error = DeployError::JsonParseError {
//!     source_label: "clients/app.json".to_string(),
//!     reason: "expected value at line 1 column 1".to_string(),
//! };
//!
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for deploykit operations
///
/// Every variant carries enough text to locate the failure among many resources:
/// a source label, a resource name, or the offending keys.
///
/// # Error Categories
///
/// - [`ArgumentError`] - A primitive received input of the wrong shape
/// - [`JsonParseError`] - Resolved text did not parse as JSON
/// - [`ValidationError`] - Resource content broke a caller-supplied rule
/// - [`InvalidResource`] - A resource list entry has the wrong shape
/// - [`DuplicateResourceName`] - Two entries share a name under the strict policy
/// - [`ConfigError`] - A configuration or keywords file is unusable
///
/// I/O and TOML failures stay inside [`anyhow::Error`] chains with the offending
/// path attached; [`user_friendly_error`] inspects them there.
///
/// [`ArgumentError`]: DeployError::ArgumentError
/// [`JsonParseError`]: DeployError::JsonParseError
/// [`ValidationError`]: DeployError::ValidationError
/// [`InvalidResource`]: DeployError::InvalidResource
/// [`DuplicateResourceName`]: DeployError::DuplicateResourceName
/// [`ConfigError`]: DeployError::ConfigError
#[derive(Error, Debug, Clone)]
pub enum DeployError {
    /// An operation was handed a value of the wrong type
    ///
    /// Raised by [`generate_checksum`](crate::checksum::generate_checksum) when the
    /// payload is not a string. Hashing a stringified object would silently hide the bug.
    #[error("Invalid argument: {message}")]
    ArgumentError {
        /// What was wrong with the argument
        message: String,
    },

    /// Resolved text could not be parsed as JSON
    ///
    /// The message embeds both the caller's source label and the low-level parser
    /// diagnostic. An unresolved `@@token@@` left in JSON text surfaces here.
    #[error("Error parsing JSON from metadata file: {source_label}: {reason}")]
    JsonParseError {
        /// Caller-supplied label identifying the file or asset
        source_label: String,
        /// The parser diagnostic, including line and column
        reason: String,
    },

    /// Resource content violated a validation rule
    #[error("Validation failed: {message}")]
    ValidationError {
        /// Description of the violated rule and the offending values
        message: String,
    },

    /// A resource entry is not an object, has no string `name`, or its child
    /// list is not a list
    #[error("Invalid resource definition: {message}")]
    InvalidResource {
        /// Which entry is malformed and how, prefixed by its enclosing resources
        message: String,
    },

    /// Two entries in one resource list share a name and duplicates are rejected
    #[error("Duplicate resource name '{name}'{}", parent_suffix(.parent))]
    DuplicateResourceName {
        /// The repeated name
        name: String,
        /// Enclosing resources, outermost first and joined by `/`; `None` at top level
        parent: Option<String>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// Generic error for cases not covered by specific variants
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

fn parent_suffix(parent: &Option<String>) -> String {
    parent.as_ref().map(|p| format!(" in resource '{p}'")).unwrap_or_default()
}

/// Error wrapper that adds a suggestion and details for terminal display
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying deploykit error
    pub error: DeployError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DeployError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with suggestions where we have them
///
/// [`DeployError`] values found anywhere in the chain get tailored suggestions,
/// and any context wrapped around them (typically the input file) is kept as
/// details. I/O and TOML failures get generic suggestions. Everything is reported
/// with its full `Caused by` chain unless a [`DeployError`] already names the cause.
///
/// # Examples
///
/// ```rust,no_run
/// use deploykit::core::user_friendly_error;
///
/// let error = anyhow::anyhow!("Something went wrong");
/// let context = user_friendly_error(error);
/// context.display();
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(deploy_error) = error.downcast_ref::<DeployError>() {
        let outer: Vec<String> = error
            .chain()
            .take_while(|cause| !cause.is::<DeployError>())
            .map(ToString::to_string)
            .collect();
        return with_outer_context(create_error_context(deploy_error.clone()), &outer);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        if io_error.kind() == std::io::ErrorKind::NotFound {
            return ErrorContext::new(DeployError::Other {
                message: chain_message(&error),
            })
            .with_suggestion("Check that the file exists and the path is correct");
        }
    }

    if error.downcast_ref::<toml::de::Error>().is_some() {
        return ErrorContext::new(DeployError::ConfigError {
            message: chain_message(&error),
        })
        .with_suggestion("Check the TOML syntax of the configuration file. Verify quotes and brackets");
    }

    ErrorContext::new(DeployError::Other {
        message: chain_message(&error),
    })
}

fn with_outer_context(mut ctx: ErrorContext, outer: &[String]) -> ErrorContext {
    if outer.is_empty() {
        return ctx;
    }

    let mut details = outer.join(": ");
    if let Some(existing) = ctx.details.take() {
        details.push('\n');
        details.push_str(&existing);
    }
    ctx.details = Some(details);
    ctx
}

fn chain_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();

    let chain: Vec<String> = error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

fn create_error_context(error: DeployError) -> ErrorContext {
    match &error {
        DeployError::JsonParseError {
            source_label,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Check the JSON syntax in {source_label}. Every @@keyword@@ it uses must be defined in the keyword mappings"
            ))
            .with_details(
                "Unresolved keywords are left in place and usually make the file invalid JSON",
            ),

        DeployError::ArgumentError {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Pass the payload as text; serialize structured data before checksumming"),

        DeployError::DuplicateResourceName {
            name,
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion(format!(
                "Rename one of the resources called '{name}' or set duplicate_names = \"overwrite\""
            ))
            .with_details("Resource names must be unique within one list when duplicates are rejected"),

        DeployError::ValidationError {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Move the listed settings into their own resource definitions"),

        DeployError::InvalidResource {
            ..
        } => ErrorContext::new(error.clone()).with_suggestion(
            "Each resource must be a JSON object with a string 'name'; the child list field must hold an array",
        ),

        DeployError::ConfigError {
            ..
        } => ErrorContext::new(error.clone())
            .with_suggestion("Check the configuration file and the keywords file it references"),

        _ => ErrorContext::new(error.clone()),
    }
}
