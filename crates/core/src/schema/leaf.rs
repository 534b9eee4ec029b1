//! Leaf schema nodes: one configuration value and its constraints.

use regex::Regex;
use serde_json::{Map, Value};

use super::hooks::{Transform, Validator};
use crate::constants::{TYPE_ARRAY, TYPE_BOOLEAN, TYPE_ENUM, TYPE_NUMBER, TYPE_STRING};

/// Constraints checked by the `string` parser.
#[derive(Debug, Clone, Default)]
pub struct StringConstraints {
    /// Minimum length in characters.
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Pattern the whole value must match somewhere (unanchored unless the regex is).
    pub pattern: Option<Regex>,
}

/// Constraints checked by the `number` parser.
#[derive(Debug, Clone, Default)]
pub struct NumberConstraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Reject values with a fractional part.
    pub integer: bool,
}

/// Element schema and length bounds for the `array` parser.
#[derive(Debug, Clone)]
pub struct ArrayConstraints {
    pub items: Box<LeafSchema>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
}

/// Type-specific part of a leaf.
#[derive(Debug, Clone)]
pub enum LeafKind {
    String(StringConstraints),
    Number(NumberConstraints),
    Boolean,
    /// Allowed values in display order.
    Enum(Vec<String>),
    Array(ArrayConstraints),
    /// A type served by a caller-registered parser.
    Custom {
        type_tag: String,
        options: Map<String, Value>,
    },
}

/// A schema node describing a single value.
#[derive(Debug, Clone)]
pub struct LeafSchema {
    pub kind: LeafKind,
    /// Explicit environment key, used verbatim (plus the loader prefix).
    pub name: Option<String>,
    /// `None` defers to the loader's default-required policy.
    pub required: Option<bool>,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub validator: Option<Validator>,
    pub transform: Option<Transform>,
}

impl LeafSchema {
    pub fn new(kind: LeafKind) -> Self {
        Self {
            kind,
            name: None,
            required: None,
            description: None,
            default: None,
            validator: None,
            transform: None,
        }
    }

    pub fn string() -> Self {
        Self::new(LeafKind::String(StringConstraints::default()))
    }

    pub fn number() -> Self {
        Self::new(LeafKind::Number(NumberConstraints::default()))
    }

    pub fn boolean() -> Self {
        Self::new(LeafKind::Boolean)
    }

    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(LeafKind::Enum(values.into_iter().map(Into::into).collect()))
    }

    pub fn array(items: LeafSchema) -> Self {
        Self::new(LeafKind::Array(ArrayConstraints {
            items: Box::new(items),
            min_items: None,
            max_items: None,
        }))
    }

    pub fn custom(type_tag: impl Into<String>) -> Self {
        Self::new(LeafKind::Custom {
            type_tag: type_tag.into(),
            options: Map::new(),
        })
    }

    /// The tag used to select a parser from the registry.
    pub fn type_tag(&self) -> &str {
        match &self.kind {
            LeafKind::String(_) => TYPE_STRING,
            LeafKind::Number(_) => TYPE_NUMBER,
            LeafKind::Boolean => TYPE_BOOLEAN,
            LeafKind::Enum(_) => TYPE_ENUM,
            LeafKind::Array(_) => TYPE_ARRAY,
            LeafKind::Custom { type_tag, .. } => type_tag,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    // Constraint setters below are ignored for kinds they do not apply to.

    pub fn with_min_length(mut self, min: usize) -> Self {
        if let LeafKind::String(c) = &mut self.kind {
            c.min_length = Some(min);
        }
        self
    }

    pub fn with_max_length(mut self, max: usize) -> Self {
        if let LeafKind::String(c) = &mut self.kind {
            c.max_length = Some(max);
        }
        self
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        if let LeafKind::String(c) = &mut self.kind {
            c.pattern = Some(pattern);
        }
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        if let LeafKind::Number(c) = &mut self.kind {
            c.min = Some(min);
        }
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        if let LeafKind::Number(c) = &mut self.kind {
            c.max = Some(max);
        }
        self
    }

    pub fn integer(mut self) -> Self {
        if let LeafKind::Number(c) = &mut self.kind {
            c.integer = true;
        }
        self
    }

    pub fn with_min_items(mut self, min: usize) -> Self {
        if let LeafKind::Array(c) = &mut self.kind {
            c.min_items = Some(min);
        }
        self
    }

    pub fn with_max_items(mut self, max: usize) -> Self {
        if let LeafKind::Array(c) = &mut self.kind {
            c.max_items = Some(max);
        }
        self
    }

    /// Set a free-form option read by a custom parser.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        if let LeafKind::Custom { options, .. } = &mut self.kind {
            options.insert(key.into(), value.into());
        }
        self
    }

    /// Options of a custom leaf; empty for built-in kinds.
    pub fn option(&self, key: &str) -> Option<&Value> {
        match &self.kind {
            LeafKind::Custom { options, .. } => options.get(key),
            _ => None,
        }
    }
}
