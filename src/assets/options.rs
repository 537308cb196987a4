//! Per-resource-kind settings for [`unify`](super::unify).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// What `unify` does when two entries in one list share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Later entries replace earlier ones (a warning is logged).
    #[default]
    Overwrite,
    /// Fail with [`DeployError::DuplicateResourceName`](crate::core::DeployError::DuplicateResourceName).
    Reject,
}

/// Which fields of a resource kind are templated, and where its children live.
///
/// Handlers for each resource kind build one of these; the normalizer itself has
/// no built-in field list.
///
/// # Examples
///
/// ```
/// use deploykit::assets::{DuplicatePolicy, UnifyOptions};
///
/// let options = UnifyOptions::new(["metadataFile", "scriptFile", "htmlFile"])
///     .with_child_list("scripts")
///     .with_duplicate_policy(DuplicatePolicy::Reject);
///
/// assert!(options.is_templated("scriptFile"));
/// assert_eq!(options.child_list_field(), Some("scripts"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifyOptions {
    templated_fields: HashSet<String>,
    child_list_field: Option<String>,
    duplicate_policy: DuplicatePolicy,
}

impl UnifyOptions {
    /// Options with the given templated field names, no child list, and overwrite policy.
    pub fn new<I, S>(templated_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templated_fields: templated_fields.into_iter().map(Into::into).collect(),
            child_list_field: None,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Treat `field` as a nested list of resources, unified recursively.
    #[must_use]
    pub fn with_child_list(mut self, field: impl Into<String>) -> Self {
        self.child_list_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    #[must_use]
    pub fn is_templated(&self, field: &str) -> bool {
        self.templated_fields.contains(field)
    }

    #[must_use]
    pub fn child_list_field(&self) -> Option<&str> {
        self.child_list_field.as_deref()
    }

    #[must_use]
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }
}
