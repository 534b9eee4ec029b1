//! Type-tag to parser dispatch.
//!
//! Responsibilities:
//! - Hold the mapping from type tag to parser factory for one loader.
//! - Resolve and invoke the parser for a `ParseContext`.
//!
//! Invariants:
//! - A new registry always knows `string`, `number`, `boolean`, `enum`, `array`.
//! - Registering an existing tag replaces it (last write wins).
//! - Factories receive the registry itself so parsers can dispatch recursively.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::array::ArrayParser;
use super::boolean::BooleanParser;
use super::enumeration::EnumParser;
use super::number::NumberParser;
use super::string::StringParser;
use super::{ParseContext, Parser};
use crate::constants::{TYPE_ARRAY, TYPE_BOOLEAN, TYPE_ENUM, TYPE_NUMBER, TYPE_STRING};
use crate::error::EnvError;

/// Builds a parser for one dispatch. The parser may borrow the registry.
pub type ParserFactory =
    Box<dyn for<'r> Fn(&'r ParserRegistry) -> Box<dyn Parser + 'r> + Send + Sync>;

/// Registry of parser factories keyed by type tag.
pub struct ParserRegistry {
    factories: HashMap<String, ParserFactory>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("type_tags", &self.type_tags())
            .finish()
    }
}

fn string_parser(_: &ParserRegistry) -> Box<dyn Parser + '_> {
    Box::new(StringParser)
}

fn number_parser(_: &ParserRegistry) -> Box<dyn Parser + '_> {
    Box::new(NumberParser)
}

fn boolean_parser(_: &ParserRegistry) -> Box<dyn Parser + '_> {
    Box::new(BooleanParser::default())
}

fn enum_parser(_: &ParserRegistry) -> Box<dyn Parser + '_> {
    Box::new(EnumParser)
}

fn array_parser(registry: &ParserRegistry) -> Box<dyn Parser + '_> {
    Box::new(ArrayParser::new(registry))
}

impl ParserRegistry {
    /// A registry with the five built-in types.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry
            .register(TYPE_STRING, string_parser)
            .register(TYPE_NUMBER, number_parser)
            .register(TYPE_BOOLEAN, boolean_parser)
            .register(TYPE_ENUM, enum_parser)
            .register(TYPE_ARRAY, array_parser);
        registry
    }

    /// A registry with no types at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Associate a type tag with a parser factory, replacing any earlier one.
    pub fn register<F>(&mut self, type_tag: impl Into<String>, factory: F) -> &mut Self
    where
        F: for<'r> Fn(&'r ParserRegistry) -> Box<dyn Parser + 'r> + Send + Sync + 'static,
    {
        let type_tag = type_tag.into();
        if self.factories.contains_key(&type_tag) {
            tracing::debug!(type_tag = %type_tag, "Replacing registered parser");
        }
        self.factories.insert(type_tag, Box::new(factory));
        self
    }

    pub fn is_registered(&self, type_tag: &str) -> bool {
        self.factories.contains_key(type_tag)
    }

    /// Registered tags in sorted order.
    pub fn type_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Parse a context with the parser registered for its schema's type tag.
    pub fn parse(&self, ctx: &ParseContext<'_>) -> Result<Value, EnvError> {
        let type_tag = ctx.schema.type_tag();
        let Some(factory) = self.factories.get(type_tag) else {
            return Err(ctx.parse_error(format!("No parser registered for type: {}", type_tag)));
        };
        tracing::trace!(key = %ctx.key, type_tag, "Dispatching to parser");
        factory(self).parse(ctx)
    }
}
