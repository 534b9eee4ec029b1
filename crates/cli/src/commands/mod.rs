//! CLI command implementations.
//!
//! Both commands read the schema the same way; `check` additionally builds
//! the layered environment source.

pub mod check;
pub mod keys;

use anyhow::{Context, Result};
use envschema::Schema;
use std::path::Path;

use crate::formatters::{OutputFormat, write_to_file};

/// Read and validate the schema document named by `--schema`.
pub fn read_schema(path: Option<&Path>) -> Result<Schema> {
    let path = path.context("No schema given. Pass --schema <FILE> or set ENVSCHEMA_SCHEMA")?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read schema {}", path.display()))?;
    let schema = Schema::from_json_str(&text)
        .with_context(|| format!("Invalid schema {}", path.display()))?;
    tracing::debug!(path = %path.display(), entries = schema.len(), "Schema loaded");
    Ok(schema)
}

/// Print rendered output, or write it to `output_file` when given.
pub fn emit(output: &str, format: OutputFormat, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Results written to {} ({:?} format)", path.display(), format);
    } else {
        print!("{}", output);
    }
    Ok(())
}
