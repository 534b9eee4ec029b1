//! Tests for the schema-driven environment loader.
//!
//! Responsibilities:
//! - Test leaf resolution for each built-in type against in-memory sources.
//! - Test nested groups, key synthesis options, and tree assembly.
//! - Test default handling, required policy, and error reporting.
//! - Test loading from the real process environment.
//!
//! Does NOT handle:
//! - Individual parser edge cases (tested next to each parser).
//! - Schema document reading (tested in `schema::document`).
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `temp_env`.

use std::collections::HashMap;


/// Build an owned environment map from string pairs.
pub fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
