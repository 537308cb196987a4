//! Checksums and property filtering used before diffing against a remote copy

use deploykit::assets::{UnifyOptions, unify};
use deploykit::checksum::{CHECKSUM_HEX_LEN, checksum_str, generate_checksum};
use deploykit::core::DeployError;
use deploykit::reducer::property_reducer;
use deploykit::test_utils::keyword_mappings;
use serde_json::{Value, json};

#[test]
fn test_checksum_contract() {
    let first = generate_checksum(&json!("Some string value")).unwrap();
    assert_eq!(first, generate_checksum(&json!("Some string value")).unwrap());
    assert_eq!(first.len(), CHECKSUM_HEX_LEN);
    assert_eq!(first, first.to_lowercase());

    let err = generate_checksum(&json!({})).unwrap_err();
    assert!(matches!(err, DeployError::ArgumentError { .. }));
}

#[test]
fn test_local_and_remote_pages_compared_by_digest() {
    let mappings = keyword_mappings(json!({ "brand": "Acme" }));
    let local = vec![json!({ "name": "login", "html": "<h1>@@brand@@</h1>" })];
    let unified = unify(&local, &mappings, &UnifyOptions::new(["html"])).unwrap();

    let rendered = unified["login"]["html"].as_str().unwrap();
    let remote_same = "<h1>\"Acme\"</h1>";
    let remote_changed = "<h1>\"Acme Corp\"</h1>";

    assert_eq!(checksum_str(rendered), checksum_str(remote_same));
    assert_ne!(checksum_str(rendered), checksum_str(remote_changed));
}

#[test]
fn test_filtered_remote_matches_local_definition() {
    let remote = json!({
        "name": "app",
        "client_id": "abc123",
        "callbacks": ["https://acme.example/cb"],
        "jwt_configuration": { "alg": "RS256", "secret_encoded": false, "client_id": "abc123" },
        "signing_keys": [{ "cert": "...", "client_id": "abc123" }]
    });
    let local = json!({
        "name": "app",
        "callbacks": ["https://acme.example/cb"],
        "jwt_configuration": { "alg": "RS256", "secret_encoded": false },
        "signing_keys": [{ "cert": "..." }]
    });

    let reducer = property_reducer("client_id");
    let filtered: Value = serde_json::from_str(&reducer.to_json_string(&remote).unwrap()).unwrap();
    assert_eq!(filtered, local);

    // Same definition order on both sides, so the compact text is byte-identical
    assert_eq!(checksum_str(&filtered.to_string()), checksum_str(&local.to_string()));
}

#[test]
fn test_empty_filter_round_trips_byte_for_byte() {
    let value = json!({ "b": [1, { "c": null }], "a": "x\ny", "n": 1.5 });
    let text = property_reducer(Vec::<String>::new()).to_json_string(&value).unwrap();
    assert_eq!(text, value.to_string());
    let back: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(back, value);
}
