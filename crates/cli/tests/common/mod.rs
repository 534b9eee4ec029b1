//! Shared test utilities for envschema CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write schema documents into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Variables the sample schema reads are cleared from the inherited environment.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Schema used by most CLI tests.
#[allow(dead_code)]
pub const SAMPLE_SCHEMA: &str = r#"{
    "database": {
        "host": { "type": "string", "required": true, "description": "Database host" },
        "port": { "type": "number", "default": 5432, "min": 1, "max": 65535 }
    },
    "mode": { "type": "enum", "values": ["dev", "prod"], "default": "dev" },
    "debug": { "type": "boolean" }
}"#;

/// Returns a hermetic `envschema` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `ENVSCHEMA_*` options and the sample schema's keys are cleared.
pub fn envschema_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envschema");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    for key in [
        "ENVSCHEMA_SCHEMA",
        "ENVSCHEMA_PREFIX",
        "ENVSCHEMA_SEPARATOR",
        "ENVSCHEMA_ENV_FILE",
        "RUST_LOG",
        "DATABASE__HOST",
        "DATABASE__PORT",
        "MODE",
        "DEBUG",
    ] {
        cmd.env_remove(key);
    }

    cmd
}

/// Write `contents` as `schema.json` inside a fresh temp dir.
pub fn write_schema(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.json");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}
