//! Reading schema trees from JSON documents.
//!
//! An object with a string `type` field is a leaf; any other object is a
//! group. Field names follow the camelCase convention of hand-written
//! schema literals (`minLength`, `maxItems`, ...). Fields not understood by
//! a built-in type are kept as options for custom parsers.

use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::leaf::{ArrayConstraints, LeafKind, LeafSchema, NumberConstraints, StringConstraints};
use super::{Schema, SchemaError, SchemaNode, display_path};
use crate::constants::{TYPE_ARRAY, TYPE_BOOLEAN, TYPE_ENUM, TYPE_NUMBER, TYPE_STRING};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLeaf {
    #[serde(rename = "type")]
    type_tag: String,
    name: Option<String>,
    required: Option<bool>,
    description: Option<String>,
    default: Option<Value>,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    integer: Option<bool>,
    values: Option<Vec<String>>,
    items: Option<Box<RawLeaf>>,
    min_items: Option<usize>,
    max_items: Option<usize>,
    #[serde(flatten)]
    options: Map<String, Value>,
}

impl Schema {
    /// Parse and validate a schema from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value)
    }

    /// Build and validate a schema from an already-parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self, SchemaError> {
        let schema = read_group(value, &mut Vec::new())?;
        schema.validate()?;
        Ok(schema)
    }
}

fn is_leaf_object(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|map| map.get("type"))
        .is_some_and(Value::is_string)
}

fn read_group(value: &Value, path: &mut Vec<String>) -> Result<Schema, SchemaError> {
    let Value::Object(map) = value else {
        return Err(SchemaError::NotAnObject {
            path: display_path(path),
        });
    };

    let mut schema = Schema::new();
    for (key, child) in map {
        path.push(key.clone());
        let node = if is_leaf_object(child) {
            let raw = RawLeaf::deserialize(child).map_err(|source| SchemaError::InvalidLeaf {
                path: display_path(path),
                source,
            })?;
            SchemaNode::Leaf(into_leaf(raw, path)?)
        } else {
            SchemaNode::Group(read_group(child, path)?)
        };
        path.pop();
        schema.insert(key.clone(), node);
    }
    Ok(schema)
}

fn into_leaf(raw: RawLeaf, path: &[String]) -> Result<LeafSchema, SchemaError> {
    let kind = match raw.type_tag.as_str() {
        TYPE_STRING => {
            let pattern = raw
                .pattern
                .as_deref()
                .map(Regex::new)
                .transpose()
                .map_err(|source| SchemaError::InvalidPattern {
                    path: display_path(path),
                    source,
                })?;
            LeafKind::String(StringConstraints {
                min_length: raw.min_length,
                max_length: raw.max_length,
                pattern,
            })
        }
        TYPE_NUMBER => LeafKind::Number(NumberConstraints {
            min: raw.min,
            max: raw.max,
            integer: raw.integer.unwrap_or(false),
        }),
        TYPE_BOOLEAN => LeafKind::Boolean,
        TYPE_ENUM => LeafKind::Enum(raw.values.unwrap_or_default()),
        TYPE_ARRAY => {
            let Some(items) = raw.items else {
                return Err(SchemaError::MissingItems {
                    path: display_path(path),
                });
            };
            let mut items_path = path.to_vec();
            items_path.push("items".to_string());
            LeafKind::Array(ArrayConstraints {
                items: Box::new(into_leaf(*items, &items_path)?),
                min_items: raw.min_items,
                max_items: raw.max_items,
            })
        }
        _ => LeafKind::Custom {
            type_tag: raw.type_tag,
            options: raw.options,
        },
    };

    Ok(LeafSchema {
        kind,
        name: raw.name,
        required: raw.required,
        description: raw.description,
        default: raw.default,
        validator: None,
        transform: None,
    })
}
