use serde_json::Value;

use super::base::finish;
use super::{ParseContext, Parser};
use crate::constants::{FALSY_VALUES, TRUTHY_VALUES};
use crate::error::EnvError;

/// Parser for `boolean` leaves.
///
/// Matching is case-insensitive against a truthy and a falsy vocabulary.
/// The default vocabulary is `true/1/yes/y/on` and `false/0/no/n/off`;
/// register a parser built with `with_vocabulary` to change it.
#[derive(Debug, Clone)]
pub struct BooleanParser {
    truthy: Vec<String>,
    falsy: Vec<String>,
}

impl Default for BooleanParser {
    fn default() -> Self {
        Self::with_vocabulary(TRUTHY_VALUES, FALSY_VALUES)
    }
}

impl BooleanParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary<T, F>(truthy: T, falsy: F) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        Self {
            truthy: truthy.into_iter().map(|v| v.as_ref().to_lowercase()).collect(),
            falsy: falsy.into_iter().map(|v| v.as_ref().to_lowercase()).collect(),
        }
    }

    fn accepted(&self) -> String {
        self.truthy
            .iter()
            .chain(self.falsy.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Parser for BooleanParser {
    fn parse(&self, ctx: &ParseContext<'_>) -> Result<Value, EnvError> {
        let normalized = ctx.text()?.trim().to_lowercase();

        let value = if self.truthy.contains(&normalized) {
            true
        } else if self.falsy.contains(&normalized) {
            false
        } else {
            return Err(ctx.validation_error(format!("Must be one of: {}", self.accepted())));
        };

        finish(ctx, Value::Bool(value))
    }
}
