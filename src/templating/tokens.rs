//! `@@keyword@@` placeholder resolution.
//!
//! A placeholder is `@@` followed by one or more ASCII letters, digits, or
//! underscores and a closing `@@`.
//! Resolution is a single non-recursive pass over the input:
//!
//! - String values are inserted as JSON string literals (quoted and escaped), so a
//!   placeholder can sit directly in a JSON document or in quoted script text.
//! - Any other JSON value is inserted as its compact JSON text.
//! - Placeholders the mappings do not define are left verbatim.
//!
//! Text produced by a substitution is never scanned again, so a mapped value that
//! itself looks like `@@other@@` stays literal.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;
use strsim::levenshtein;

use crate::core::KeywordMappings;

/// Maximum edit distance, as a percentage of the keyword length, for suggestions.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"@@([A-Za-z0-9_]+)@@").expect("placeholder pattern is valid"))
}

/// Render a mapped value the way it is spliced into text.
///
/// Strings become quoted JSON literals; everything else is compact JSON.
#[must_use]
pub fn substitution_text(value: &Value) -> String {
    // Display on Value is compact JSON, and for strings it is the quoted literal.
    value.to_string()
}

/// Replace every `@@keyword@@` in `text` with its mapped value.
///
/// Each distinct keyword is rendered once, so all occurrences of the same keyword
/// receive identical text. Unknown keywords are kept as-is; a later JSON parse of
/// the result is what reports them.
///
/// # Examples
///
/// ```
/// use deploykit::templating::resolve_tokens;
/// use serde_json::json;
///
/// let mappings = json!({ "hello": "goodbye", "two": 2 });
/// let mappings = mappings.as_object().unwrap();
///
/// assert_eq!(resolve_tokens("<x>@@hello@@</x>", mappings), r#"<x>"goodbye"</x>"#);
/// assert_eq!(resolve_tokens(r#"{"b":@@two@@}"#, mappings), r#"{"b":2}"#);
/// assert_eq!(resolve_tokens("@@missing@@", mappings), "@@missing@@");
/// ```
#[must_use]
pub fn resolve_tokens(text: &str, mappings: &KeywordMappings) -> String {
    if mappings.is_empty() || !text.contains("@@") {
        return text.to_string();
    }

    let mut rendered: HashMap<&str, String> = HashMap::new();
    for caps in placeholder_regex().captures_iter(text) {
        let Some(identifier) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if rendered.contains_key(identifier) {
            continue;
        }
        if let Some(value) = mappings.get(identifier) {
            rendered.insert(identifier, substitution_text(value));
        }
    }

    if rendered.is_empty() {
        tracing::trace!(target: "templating::tokens", "No known keywords in text");
        return text.to_string();
    }

    tracing::trace!(
        target: "templating::tokens",
        "Resolving {} distinct keyword(s)",
        rendered.len()
    );

    let replaced: Cow<'_, str> = placeholder_regex().replace_all(text, |caps: &Captures<'_>| {
        match rendered.get(&caps[1]) {
            Some(substitution) => substitution.clone(),
            None => caps[0].to_string(),
        }
    });
    replaced.into_owned()
}

/// List the distinct keywords referenced in `text`, in first-occurrence order.
#[must_use]
pub fn find_tokens(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for caps in placeholder_regex().captures_iter(text) {
        let identifier = &caps[1];
        if !found.iter().any(|existing| existing == identifier) {
            found.push(identifier.to_string());
        }
    }
    found
}

/// List the keywords referenced in `text` that `mappings` does not define.
#[must_use]
pub fn unresolved_tokens(text: &str, mappings: &KeywordMappings) -> Vec<String> {
    find_tokens(text).into_iter().filter(|identifier| !mappings.contains_key(identifier)).collect()
}

/// Suggest defined keywords close to an unknown one (at most three, closest first).
#[must_use]
pub fn suggest_keywords(unknown: &str, mappings: &KeywordMappings) -> Vec<String> {
    let mut scored: Vec<(&String, usize)> =
        mappings.keys().map(|key| (key, levenshtein(unknown, key))).collect();

    scored.sort_by_key(|(_, distance)| *distance);

    let limit = (unknown.len() * SIMILARITY_THRESHOLD_PERCENT / 100).max(1);
    scored
        .into_iter()
        .filter(|(_, distance)| *distance <= limit)
        .take(3)
        .map(|(key, _)| key.clone())
        .collect()
}
