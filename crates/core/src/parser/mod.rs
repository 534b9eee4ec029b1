//! Per-type parsers and the registry that dispatches to them.
//!
//! Responsibilities:
//! - Convert one raw environment string into one typed `serde_json::Value`.
//! - Apply type constraints, then the leaf's validator, then its transform.
//! - Map type tags to parser factories (`ParserRegistry`), open for extension.
//!
//! Does NOT handle:
//! - Environment lookup, defaults, or required policy (see `loader`).
//!
//! Invariants:
//! - Parsers are stateless per call; a factory may build a new one per dispatch.
//! - Errors carry the context's key and path unchanged.

mod array;
mod base;
mod boolean;
mod enumeration;
mod number;
mod registry;
mod string;

use serde_json::Value;

use crate::error::EnvError;
use crate::schema::LeafSchema;

pub use array::ArrayParser;
pub use base::{finish, number_value, strip_quotes};
pub use boolean::BooleanParser;
pub use enumeration::EnumParser;
pub use number::NumberParser;
pub use registry::{ParserFactory, ParserRegistry};
pub use string::StringParser;

/// Converts the raw value in a `ParseContext` into a typed value.
pub trait Parser {
    fn parse(&self, ctx: &ParseContext<'_>) -> Result<Value, EnvError>;
}

/// Everything a parser needs to handle one leaf visit.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Resolved environment key (`PORT`, `HOSTS[2]`).
    pub key: String,
    /// Structural path from the schema root.
    pub path: Vec<String>,
    pub schema: &'a LeafSchema,
    /// Raw value; `None` when the key was absent.
    pub value: Option<String>,
    /// Set when `value` is an already-decoded JSON string (an array item)
    /// rather than text read from the environment.
    pub decoded: bool,
}

impl<'a> ParseContext<'a> {
    pub fn new(
        key: impl Into<String>,
        path: Vec<String>,
        schema: &'a LeafSchema,
        value: Option<String>,
    ) -> Self {
        Self {
            key: key.into(),
            path,
            schema,
            value,
            decoded: false,
        }
    }

    /// Mark the value as decoded JSON string content, which is taken verbatim.
    pub fn decoded(mut self) -> Self {
        self.decoded = true;
        self
    }

    /// The raw value to parse.
    ///
    /// Absence is always `Missing`; a blank environment value is `Missing`
    /// only when the leaf is explicitly required. Decoded values are never
    /// blank-checked.
    pub fn raw(&self) -> Result<&str, EnvError> {
        match self.value.as_deref() {
            None => Err(self.missing()),
            Some(value)
                if !self.decoded
                    && value.trim().is_empty()
                    && self.schema.required == Some(true) =>
            {
                Err(self.missing())
            }
            Some(value) => Ok(value),
        }
    }

    /// The scalar text to interpret: environment values are trimmed and
    /// unquoted, decoded values are returned unchanged.
    pub fn text(&self) -> Result<&str, EnvError> {
        let raw = self.raw()?;
        Ok(if self.decoded { raw } else { strip_quotes(raw) })
    }

    pub fn missing(&self) -> EnvError {
        EnvError::missing(&self.key, &self.path)
    }

    pub fn validation_error(&self, message: impl Into<String>) -> EnvError {
        EnvError::validation(&self.key, message, &self.path)
    }

    pub fn parse_error(&self, message: impl Into<String>) -> EnvError {
        EnvError::parse(&self.key, message, &self.path)
    }
}
