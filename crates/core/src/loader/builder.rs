//! Schema traversal and per-leaf value resolution.
//!
//! Responsibilities:
//! - Walk the schema tree with an explicit stack, visiting every node once.
//! - Resolve each leaf's environment key, apply the required/default policy,
//!   and dispatch present values to the parser registry.
//! - Assemble the nested result tree.
//!
//! Does NOT handle:
//! - Parsing individual values (see `parser`).
//! - Reading `.env` files or mutating the process environment.
//!
//! Invariants / Assumptions:
//! - Fail-fast: the first missing or invalid leaf aborts the load and no
//!   partial tree is returned.
//! - Defaults are cloned into the result; the schema is never mutated.
//! - Relative processing order of sibling leaves is unspecified; only the
//!   final tree shape is guaranteed.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::Level;

use super::options::LoaderOptions;
use super::source::{ProcessEnv, VarSource};
use super::tree::ConfigTree;
use crate::error::EnvError;
use crate::parser::{ParseContext, Parser, ParserRegistry};
use crate::schema::{LeafSchema, Schema, SchemaNode};

/// Loads typed configuration from an environment according to a schema.
#[derive(Debug)]
pub struct EnvLoader {
    schema: Schema,
    registry: ParserRegistry,
    options: LoaderOptions,
}

/// One group waiting to be expanded.
struct Frame<'s> {
    group: &'s Schema,
    slot: usize,
    path: Vec<String>,
}

/// Accumulator for one group's values, linked to its parent by index.
struct Slot {
    parent: Option<usize>,
    key: String,
    values: Map<String, Value>,
}

/// Documentation of one leaf's environment binding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyInfo {
    pub path: Vec<String>,
    pub key: String,
    pub type_tag: String,
    pub required: bool,
    pub default: Option<Value>,
    pub description: Option<String>,
}

impl EnvLoader {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            registry: ParserRegistry::new(),
            options: LoaderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoaderOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the parser registry wholesale.
    pub fn with_registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register a parser factory for a type tag on this loader's registry.
    pub fn register<F>(&mut self, type_tag: impl Into<String>, factory: F) -> &mut Self
    where
        F: for<'r> Fn(&'r ParserRegistry) -> Box<dyn Parser + 'r> + Send + Sync + 'static,
    {
        self.registry.register(type_tag, factory);
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    fn diagnostics(&self, level: Level) -> bool {
        level <= self.options.verbosity()
    }

    /// Load from the real process environment.
    pub fn load_from_process(&self) -> Result<ConfigTree, EnvError> {
        self.load(&ProcessEnv)
    }

    /// Resolve every leaf of the schema against `env`.
    pub fn load<S: VarSource + ?Sized>(&self, env: &S) -> Result<ConfigTree, EnvError> {
        let mut slots = vec![Slot {
            parent: None,
            key: String::new(),
            values: Map::new(),
        }];
        let mut stack = vec![Frame {
            group: &self.schema,
            slot: 0,
            path: Vec::new(),
        }];

        while let Some(frame) = stack.pop() {
            for (key, node) in frame.group.iter().rev() {
                let mut path = frame.path.clone();
                path.push(key.clone());
                match node {
                    SchemaNode::Leaf(leaf) => {
                        let value = self.resolve_leaf(leaf, &path, env)?;
                        slots[frame.slot].values.insert(key.clone(), value);
                    }
                    SchemaNode::Group(group) => {
                        if self.diagnostics(Level::DEBUG) {
                            tracing::debug!(path = %path.join("."), "Descending into group");
                        }
                        slots.push(Slot {
                            parent: Some(frame.slot),
                            key: key.clone(),
                            values: Map::new(),
                        });
                        stack.push(Frame {
                            group,
                            slot: slots.len() - 1,
                            path,
                        });
                    }
                }
            }
        }

        // Children always sit after their parent, so folding from the back
        // attaches every group before its parent is folded.
        let mut root = Map::new();
        while let Some(slot) = slots.pop() {
            match slot.parent {
                Some(parent) => {
                    slots[parent]
                        .values
                        .insert(slot.key, Value::Object(slot.values));
                }
                None => root = slot.values,
            }
        }
        Ok(ConfigTree::from_map(root))
    }

    fn resolve_leaf<S: VarSource + ?Sized>(
        &self,
        leaf: &LeafSchema,
        path: &[String],
        env: &S,
    ) -> Result<Value, EnvError> {
        let key = self.options.resolve_key(leaf, path);
        let raw = env.var(&key);
        let present = raw.as_deref().map(str::trim).filter(|v| !v.is_empty());

        let Some(value) = present else {
            if self.options.is_required(leaf) {
                if self.diagnostics(Level::DEBUG) {
                    tracing::debug!(key = %key, path = %path.join("."), "Required variable is missing");
                }
                return Err(EnvError::missing(key, path));
            }
            if self.diagnostics(Level::DEBUG) {
                tracing::debug!(
                    key = %key,
                    has_default = leaf.default.is_some(),
                    "Variable not set, using default"
                );
            }
            return Ok(leaf.default.clone().unwrap_or(Value::Null));
        };

        if self.diagnostics(Level::DEBUG) {
            tracing::debug!(key = %key, type_tag = leaf.type_tag(), "Parsing variable");
        }
        let ctx = ParseContext::new(key, path.to_vec(), leaf, Some(value.to_string()));
        self.registry.parse(&ctx)
    }

    /// List every leaf's environment binding, sorted by key.
    pub fn describe(&self) -> Vec<KeyInfo> {
        let mut keys = Vec::new();
        let mut stack: Vec<(&Schema, Vec<String>)> = vec![(&self.schema, Vec::new())];
        while let Some((group, path)) = stack.pop() {
            for (key, node) in group.iter() {
                let mut child_path = path.clone();
                child_path.push(key.clone());
                match node {
                    SchemaNode::Leaf(leaf) => keys.push(KeyInfo {
                        key: self.options.resolve_key(leaf, &child_path),
                        path: child_path,
                        type_tag: leaf.type_tag().to_string(),
                        required: self.options.is_required(leaf),
                        default: leaf.default.clone(),
                        description: leaf.description.clone(),
                    }),
                    SchemaNode::Group(nested) => stack.push((nested, child_path)),
                }
            }
        }
        keys.sort_by(|a, b| a.key.cmp(&b.key));
        keys
    }
}
