//! Output formatting for loaded configurations and key listings.
//!
//! Responsibilities:
//! - Render a `ConfigTree` or a `KeyInfo` list as JSON, YAML, or a table.
//! - Write rendered output to a file when requested.
//!
//! Does NOT handle:
//! - Deciding what to render (see `commands`).

use anyhow::{Context, Result};
use envschema::{ConfigTree, KeyInfo};
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, yaml, table", s),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Flatten nested objects into `path = value` rows, in key order.
fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&path, child, rows);
            }
        }
        other => rows.push((prefix.to_string(), scalar_text(other))),
    }
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let line = |cells: Vec<&str>, output: &mut String| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        output.push_str(padded.join("  ").trim_end());
        output.push('\n');
    };
    line(headers.to_vec(), &mut output);
    for row in rows {
        line(row.iter().map(String::as_str).collect(), &mut output);
    }
    output
}

pub fn format_config(config: &ConfigTree, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(config)?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(config)?),
        OutputFormat::Table => {
            let mut rows = Vec::new();
            flatten("", &Value::Object(config.as_map().clone()), &mut rows);
            let rows: Vec<Vec<String>> = rows.into_iter().map(|(k, v)| vec![k, v]).collect();
            Ok(render_table(&["PATH", "VALUE"], &rows))
        }
    }
}

pub fn format_keys(keys: &[KeyInfo], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(keys)?)),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(keys)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = keys
                .iter()
                .map(|k| {
                    vec![
                        k.key.clone(),
                        k.type_tag.clone(),
                        if k.required { "yes" } else { "no" }.to_string(),
                        k.default.as_ref().map_or_else(|| "-".to_string(), scalar_text),
                        k.description.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            Ok(render_table(
                &["KEY", "TYPE", "REQUIRED", "DEFAULT", "DESCRIPTION"],
                &rows,
            ))
        }
    }
}

/// Write output to a file, creating parent directories as needed.
pub fn write_to_file(output: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, output)?;
    Ok(())
}
