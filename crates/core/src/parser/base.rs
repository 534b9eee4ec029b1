//! Helpers shared by every parser: quote stripping and the
//! validator/transform tail of the pipeline.

use serde_json::{Number, Value};

use super::ParseContext;
use crate::constants::{MAX_SAFE_INTEGER, QUOTE_CHARS};
use crate::error::EnvError;

/// Trim whitespace, then remove one pair of matching surrounding quotes.
///
/// Whitespace inside the quotes is kept.
pub fn strip_quotes(raw: &str) -> &str {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && QUOTE_CHARS.contains(&first) => {
            &trimmed[first.len_utf8()..trimmed.len() - last.len_utf8()]
        }
        _ => trimmed,
    }
}

/// Run the leaf's validator, then its transform, over an already-parsed value.
pub fn finish(ctx: &ParseContext<'_>, value: Value) -> Result<Value, EnvError> {
    if let Some(validator) = &ctx.schema.validator {
        if !validator.check(&value) {
            return Err(ctx.validation_error(validator.message()));
        }
    }

    match &ctx.schema.transform {
        Some(transform) => transform.apply(value).map_err(|source| {
            EnvError::transform(&ctx.key, source.to_string(), &ctx.path).with_source(source)
        }),
        None => Ok(value),
    }
}

/// JSON representation of a finite number: integral values within the
/// exactly-representable range become integers, everything else a float.
pub fn number_value(number: f64) -> Value {
    if number.fract() == 0.0 && number.abs() < MAX_SAFE_INTEGER {
        Value::from(number as i64)
    } else {
        Number::from_f64(number).map_or(Value::Null, Value::Number)
    }
}
