//! Integration tests for the `check` command.
//!
//! Responsibilities:
//! - Prove that a satisfied schema prints the loaded configuration.
//! - Prove that prefix, separator, and output format options apply.

mod common;

use common::{SAMPLE_SCHEMA, envschema_cmd, write_schema};
use predicates::prelude::*;
use serde_json::{Value, json};

#[test]
fn test_check_prints_loaded_configuration_as_json() {
    let (_dir, schema) = write_schema(SAMPLE_SCHEMA);

    let output = envschema_cmd()
        .arg("--schema")
        .arg(&schema)
        .arg("check")
        .env("DATABASE__HOST", "db.internal")
        .env("DEBUG", "yes")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        json!({
            "database": { "host": "db.internal", "port": 5432 },
            "mode": "dev",
            "debug": true
        })
    );
}

#[test]
fn test_check_with_prefix_and_separator() {
    let (_dir, schema) = write_schema(SAMPLE_SCHEMA);

    envschema_cmd()
        .arg("check")
        .env("ENVSCHEMA_SCHEMA", &schema)
        .env("ENVSCHEMA_PREFIX", "APP_")
        .args(["--separator", "_"])
        .env("APP_DATABASE_HOST", "prefixed.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("prefixed.example.com"));
}

#[test]
fn test_check_yaml_output() {
    let (_dir, schema) = write_schema(SAMPLE_SCHEMA);

    envschema_cmd()
        .arg("-s")
        .arg(&schema)
        .args(["check", "-o", "yaml"])
        .env("DATABASE__HOST", "localhost")
        .env("MODE", "prod")
        .assert()
        .success()
        .stdout(predicate::str::contains("host: localhost"))
        .stdout(predicate::str::contains("mode: prod"));
}

#[test]
fn test_check_writes_output_file() {
    let (dir, schema) = write_schema(SAMPLE_SCHEMA);
    let out = dir.path().join("out").join("config.json");

    envschema_cmd()
        .arg("--schema")
        .arg(&schema)
        .arg("check")
        .arg("--output-file")
        .arg(&out)
        .env("DATABASE__HOST", "localhost")
        .assert()
        .success()
        .stderr(predicate::str::contains("Results written to"));

    let written: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["database"]["host"], json!("localhost"));
}

#[test]
fn test_check_rejects_unknown_output_format() {
    let (_dir, schema) = write_schema(SAMPLE_SCHEMA);

    envschema_cmd()
        .arg("--schema")
        .arg(&schema)
        .args(["check", "-o", "xml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}
