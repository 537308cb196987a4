//! Tests for the `deploykit` binary

use predicates::prelude::*;
use serde_json::{Value, json};

use crate::common::TestProject;

const DATABASES: &str = r#"[
  {
    "name": "database",
    "scripts": [
      { "name": "login", "htmlFile": "<html>@@hello@@</html>", "metadataFile": { "b": 2 } },
      { "name": "else", "scriptFile": "console.log(@@hello@@);", "id": "internal" }
    ]
  }
]"#;

const DATABASE_CONFIG: &str = r#"
templated_fields = ["htmlFile", "metadataFile", "scriptFile"]
child_list_field = "scripts"
exclude_properties = ["id"]

[keywords]
hello = "goodbye"
"#;

#[test]
fn test_normalize_command() {
    let project = TestProject::new().unwrap();
    project.write("databases.json", DATABASES).unwrap();
    project.write("databases.toml", DATABASE_CONFIG).unwrap();

    let output = project
        .command()
        .args(["normalize", "databases.json", "--config", "databases.toml", "--compact"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        value,
        json!({
            "database": {
                "name": "database",
                "scripts": {
                    "login": { "name": "login", "htmlFile": "<html>\"goodbye\"</html>", "metadataFile": "{\"b\":2}" },
                    "else": { "name": "else", "scriptFile": "console.log(\"goodbye\");" }
                }
            }
        })
    );
}

#[test]
fn test_keyword_sources_precedence() {
    let project = TestProject::new().unwrap();
    project.write("databases.json", DATABASES).unwrap();
    project.write("databases.toml", DATABASE_CONFIG).unwrap();
    project.write("prod.json", r#"{ "hello": "from-file" }"#).unwrap();

    project
        .command()
        .args(["normalize", "databases.json", "-c", "databases.toml", "-k", "prod.json", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"console.log(\"from-file\");"#));

    project
        .command()
        .args(["normalize", "databases.json", "-c", "databases.toml", "-k", "prod.json", "--compact"])
        .env("DEPLOYKIT_KEYWORD_MAPPINGS", r#"{ "hello": "from-env" }"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"console.log(\"from-env\");"#));
}

#[test]
fn test_parse_command_with_keywords() {
    let project = TestProject::new().unwrap();
    project.write("tenant.json", r#"{ "friendly_name": @@name@@, "session_lifetime": @@hours@@ }"#).unwrap();

    let output = project
        .command()
        .args(["parse", "tenant.json", "--keyword-mappings", r#"{ "name": "Acme", "hours": 168 }"#])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value, json!({ "friendly_name": "Acme", "session_lifetime": 168 }));
}

#[test]
fn test_parse_command_reports_source_label() {
    let project = TestProject::new().unwrap();
    project.write("clients/app.json", r#"{ "name": @@missing@@ }"#).unwrap();

    project
        .command()
        .args(["parse", "clients/app.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error parsing JSON from metadata file"))
        .stderr(predicate::str::contains("app.json"));
}

#[test]
fn test_parse_command_rejects_reserved_keys() {
    let project = TestProject::new().unwrap();
    project.write("tenant.toml", r#"reserved_keys = ["login", "error_page"]"#).unwrap();
    project.write("tenant.json", r#"{ "friendly_name": "Acme", "login": {} }"#).unwrap();

    project
        .command()
        .args(["parse", "tenant.json", "--config", "tenant.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"))
        .stderr(predicate::str::contains("login"));
}

#[test]
fn test_normalize_command_names_input_file_on_bad_resource() {
    let project = TestProject::new().unwrap();
    project.write("clients.json", r#"[{ "configFile": "x" }]"#).unwrap();

    project
        .command()
        .args(["normalize", "clients.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid resource definition"))
        .stderr(predicate::str::contains("no string 'name' field"))
        .stderr(predicate::str::contains("clients.json"))
        .stderr(predicate::str::contains("settings").not());
}

#[test]
fn test_normalize_command_names_broken_config_file() {
    let project = TestProject::new().unwrap();
    project.write("clients.json", r#"[{ "name": "app" }]"#).unwrap();
    project.write("broken.toml", "templated_fields = [").unwrap();

    project
        .command()
        .args(["normalize", "clients.json", "-c", "broken.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("broken.toml"))
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn test_normalize_command_names_parent_of_duplicate() {
    let project = TestProject::new().unwrap();
    project.write("databases.json", r#"[{ "name": "db", "scripts": [{ "name": "login" }, { "name": "login" }] }]"#).unwrap();
    project.write("strict.toml", "child_list_field = \"scripts\"\nduplicate_names = \"reject\"\n").unwrap();

    project
        .command()
        .args(["normalize", "databases.json", "-c", "strict.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate resource name 'login' in resource 'db'"))
        .stderr(predicate::str::contains("databases.json"));
}

#[test]
fn test_checksum_command() {
    let project = TestProject::new().unwrap();
    project.write("value.txt", "Some string value").unwrap();
    project.write("copy.txt", "Some string value").unwrap();
    project.write("other.txt", "Some other value").unwrap();

    project
        .command()
        .args(["checksum", "value.txt"])
        .assert()
        .success()
        .stdout("ec52355b4573bfac072b4fd2391e4b536edaabb09b55a4b71493b19fcf2461f1\n");

    project
        .command()
        .args(["checksum", "value.txt", "--compare", "copy.txt"])
        .assert()
        .success()
        .stdout("identical\n");

    project
        .command()
        .args(["checksum", "value.txt", "--compare", "other.txt"])
        .assert()
        .success()
        .stdout("different\n");
}

#[test]
fn test_reduce_command() {
    let project = TestProject::new().unwrap();
    project
        .write(
            "object.json",
            r#"{ "prop1": "value 1", "prop3": "value 3", "prop5": "value 5", "prop6": { "prop1": "value 1", "prop3": "value 3" } }"#,
        )
        .unwrap();

    project
        .command()
        .args(["reduce", "object.json", "--exclude", "prop3", "-e", "prop5"])
        .assert()
        .success()
        .stdout(r#"{"prop1":"value 1","prop6":{"prop1":"value 1"}}"#.to_string() + "\n");

    project
        .command()
        .args(["reduce", "object.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""prop5":"value 5""#));
}

#[test]
fn test_missing_input_file() {
    let project = TestProject::new().unwrap();

    project
        .command()
        .args(["checksum", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.txt"));
}
