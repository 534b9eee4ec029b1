//! Schema model describing the expected configuration shape.
//!
//! Responsibilities:
//! - Represent the schema tree: groups of named children, leaves with a type tag.
//! - Check static well-formedness of a schema (`Schema::validate`).
//! - Read schema trees from JSON documents (see `document.rs`).
//!
//! Does NOT handle:
//! - Reading the environment or parsing raw values (see `loader` and `parser`).
//!
//! Invariants:
//! - A node is either a leaf (has a type tag) or a group, never both.
//! - Schemas are trees. The loader never mutates them; defaults are cloned
//!   into results.

mod document;
mod hooks;
mod leaf;

use thiserror::Error;

pub use hooks::{Transform, Validator};
pub use leaf::{ArrayConstraints, LeafKind, LeafSchema, NumberConstraints, StringConstraints};

/// A child of a group.
#[derive(Debug, Clone)]
pub enum SchemaNode {
    Leaf(LeafSchema),
    Group(Schema),
}

impl From<LeafSchema> for SchemaNode {
    fn from(leaf: LeafSchema) -> Self {
        SchemaNode::Leaf(leaf)
    }
}

impl From<Schema> for SchemaNode {
    fn from(group: Schema) -> Self {
        SchemaNode::Group(group)
    }
}

/// A group of named schema nodes, kept in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    entries: Vec<(String, SchemaNode)>,
}

/// Errors in a schema definition, detected before any environment is read.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to parse schema document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema node at {path} must be an object")]
    NotAnObject { path: String },

    #[error("Invalid leaf definition at {path}: {source}")]
    InvalidLeaf {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid pattern at {path}: {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: regex::Error,
    },

    #[error("Enum at {path} must declare at least one value")]
    EmptyEnum { path: String },

    #[error("Default for enum at {path} is not one of its values")]
    EnumDefaultNotAllowed { path: String },

    #[error("Array at {path} must declare an items schema")]
    MissingItems { path: String },

    #[error("Default for array at {path} must be an array")]
    ArrayDefaultNotArray { path: String },

    #[error("Invalid bounds at {path}: {message}")]
    InvalidBounds { path: String, message: String },
}

/// Render a structural path for messages (`database.host`, or `<root>`).
pub fn display_path(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf child. Re-using a key replaces the earlier node in place.
    pub fn leaf(mut self, key: impl Into<String>, leaf: LeafSchema) -> Self {
        self.insert(key, SchemaNode::Leaf(leaf));
        self
    }

    /// Add a nested group. Re-using a key replaces the earlier node in place.
    pub fn group(mut self, key: impl Into<String>, group: Schema) -> Self {
        self.insert(key, SchemaNode::Group(group));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<SchemaNode>) {
        let key = key.into();
        let node = node.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, node)| node)
    }

    /// Children in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, SchemaNode)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every leaf for definitions that could never load correctly.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut stack: Vec<(&Schema, Vec<String>)> = vec![(self, Vec::new())];
        while let Some((group, path)) = stack.pop() {
            for (key, node) in group.iter() {
                let mut child_path = path.clone();
                child_path.push(key.clone());
                match node {
                    SchemaNode::Leaf(leaf) => validate_leaf(leaf, &child_path)?,
                    SchemaNode::Group(nested) => stack.push((nested, child_path)),
                }
            }
        }
        Ok(())
    }
}

fn validate_leaf(leaf: &LeafSchema, path: &[String]) -> Result<(), SchemaError> {
    let mut current = Some(leaf);
    let mut path = path.to_vec();
    while let Some(leaf) = current.take() {
        match &leaf.kind {
            LeafKind::String(c) => {
                check_bounds(c.min_length, c.max_length, "minLength", "maxLength", &path)?;
            }
            LeafKind::Number(c) => {
                if let (Some(min), Some(max)) = (c.min, c.max) {
                    if min > max {
                        return Err(bounds_error(&path, "min", "max"));
                    }
                }
            }
            LeafKind::Enum(values) => {
                if values.is_empty() {
                    return Err(SchemaError::EmptyEnum {
                        path: display_path(&path),
                    });
                }
                if let Some(default) = &leaf.default {
                    let allowed = default
                        .as_str()
                        .is_some_and(|d| values.iter().any(|v| v == d));
                    if !allowed {
                        return Err(SchemaError::EnumDefaultNotAllowed {
                            path: display_path(&path),
                        });
                    }
                }
            }
            LeafKind::Array(c) => {
                if leaf.default.as_ref().is_some_and(|d| !d.is_array()) {
                    return Err(SchemaError::ArrayDefaultNotArray {
                        path: display_path(&path),
                    });
                }
                check_bounds(c.min_items, c.max_items, "minItems", "maxItems", &path)?;
                path.push("items".to_string());
                current = Some(c.items.as_ref());
            }
            LeafKind::Boolean | LeafKind::Custom { .. } => {}
        }
    }
    Ok(())
}

fn check_bounds(
    min: Option<usize>,
    max: Option<usize>,
    min_label: &str,
    max_label: &str,
    path: &[String],
) -> Result<(), SchemaError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(bounds_error(path, min_label, max_label)),
        _ => Ok(()),
    }
}

fn bounds_error(path: &[String], min_label: &str, max_label: &str) -> SchemaError {
    SchemaError::InvalidBounds {
        path: display_path(path),
        message: format!("{} must not exceed {}", min_label, max_label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_existing_key() {
        let schema = Schema::new()
            .leaf("port", LeafSchema::string())
            .leaf("port", LeafSchema::number());
        assert_eq!(schema.len(), 1);
        match schema.get("port") {
            Some(SchemaNode::Leaf(leaf)) => assert_eq!(leaf.type_tag(), "number"),
            other => panic!("expected number leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_schema() {
        let schema = Schema::new()
            .leaf(
                "mode",
                LeafSchema::enumeration(["dev", "prod"]).with_default("dev"),
            )
            .group(
                "server",
                Schema::new().leaf("port", LeafSchema::number().with_min(1.0).with_max(65535.0)),
            );
        assert!(schema.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_enum_default_outside_values() {
        let schema = Schema::new().group(
            "app",
            Schema::new().leaf("mode", LeafSchema::enumeration(["dev"]).with_default("prod")),
        );
        let err = schema.validate().unwrap_err();
        assert!(matches!(err, SchemaError::EnumDefaultNotAllowed { ref path } if path == "app.mode"));
    }

    #[test]
    fn test_validate_rejects_empty_enum_and_inverted_bounds() {
        let empty = Schema::new().leaf("mode", LeafSchema::enumeration(Vec::<String>::new()));
        assert!(matches!(empty.validate(), Err(SchemaError::EmptyEnum { .. })));

        let inverted = Schema::new().leaf("name", LeafSchema::string().with_min_length(5).with_max_length(2));
        assert!(matches!(inverted.validate(), Err(SchemaError::InvalidBounds { .. })));
    }

    #[test]
    fn test_validate_descends_into_array_items() {
        let schema = Schema::new().leaf(
            "levels",
            LeafSchema::array(LeafSchema::enumeration(Vec::<String>::new())),
        );
        let err = schema.validate().unwrap_err();
        assert!(matches!(err, SchemaError::EmptyEnum { ref path } if path == "levels.items"));
    }

    #[test]
    fn test_validate_rejects_non_array_default() {
        let schema = Schema::new().leaf(
            "hosts",
            LeafSchema::array(LeafSchema::string()).with_default(json!("a,b")),
        );
        assert!(matches!(schema.validate(), Err(SchemaError::ArrayDefaultNotArray { .. })));
    }
}
