//! Parsing JSON assets with keyword substitution

use deploykit::core::{DeployError, KeywordMappings, user_friendly_error};
use deploykit::templating::parse_json_file;
use deploykit::test_utils::keyword_mappings;
use deploykit::validation::reject_reserved_keys;
use serde_json::json;

#[test]
fn test_parse_returns_structure() {
    let value = parse_json_file("f", "{ \"a\": 1 }", &KeywordMappings::new()).unwrap();
    assert_eq!(value, json!({ "a": 1 }));
}

#[test]
fn test_parse_failure_names_source() {
    let err = parse_json_file("f", "not json", &KeywordMappings::new()).unwrap_err();
    assert!(matches!(err, DeployError::JsonParseError { .. }));
    assert!(err.to_string().contains("metadata file: f:"));
}

#[test]
fn test_failure_in_one_file_does_not_affect_others() {
    let mappings = keyword_mappings(json!({ "domain": "acme.example" }));
    let files = [
        ("tenant.json", r#"{ "friendly_name": @@domain@@ }"#),
        ("clients/broken.json", r#"{ "name": @@undefined@@ }"#),
        ("clients/app.json", r#"{ "name": "app", "web_origins": [@@domain@@] }"#),
    ];

    let results: Vec<_> =
        files.iter().map(|(label, text)| (*label, parse_json_file(label, text, &mappings))).collect();

    assert!(results[0].1.is_ok());
    assert!(results[2].1.is_ok());
    let err = results[1].1.as_ref().unwrap_err();
    assert!(err.to_string().contains("clients/broken.json"));
    assert!(err.to_string().contains("undefined"));
    assert_eq!(results[2].1.as_ref().unwrap()["web_origins"][0], "acme.example");
}

#[test]
fn test_parse_error_renders_with_suggestion() {
    let err = parse_json_file("pages/login.json", "{", &KeywordMappings::new()).unwrap_err();
    let ctx = user_friendly_error(anyhow::Error::from(err));
    let rendered = ctx.to_string();
    assert!(rendered.contains("pages/login.json"));
    assert!(rendered.contains("Suggestion:"));
}

#[test]
fn test_tenant_settings_must_not_contain_pages() {
    let mappings = keyword_mappings(json!({ "support": "support@acme.example" }));
    let tenant = parse_json_file(
        "tenant.json",
        r#"{ "support_email": @@support@@, "password_reset": { "enabled": true } }"#,
        &mappings,
    )
    .unwrap();

    let err = reject_reserved_keys(&tenant, &["login", "password_reset"], "tenant settings")
        .unwrap_err();
    assert!(matches!(err, DeployError::ValidationError { .. }));
    assert!(err.to_string().contains("password_reset"));
}
