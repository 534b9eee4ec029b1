use serde_json::Value;

use super::base::finish;
use super::{ParseContext, Parser};
use crate::error::EnvError;
use crate::schema::{LeafKind, StringConstraints};

/// Parser for `string` leaves. No coercion beyond quote stripping.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringParser;

impl Parser for StringParser {
    fn parse(&self, ctx: &ParseContext<'_>) -> Result<Value, EnvError> {
        let value = ctx.text()?;
        if let LeafKind::String(constraints) = &ctx.schema.kind {
            check_constraints(ctx, value, constraints)?;
        }
        finish(ctx, Value::String(value.to_string()))
    }
}

fn check_constraints(
    ctx: &ParseContext<'_>,
    value: &str,
    constraints: &StringConstraints,
) -> Result<(), EnvError> {
    let length = value.chars().count();
    if let Some(min) = constraints.min_length {
        if length < min {
            return Err(ctx.validation_error(format!(
                "Must be at least {} characters long",
                min
            )));
        }
    }
    if let Some(max) = constraints.max_length {
        if length > max {
            return Err(ctx.validation_error(format!(
                "Must be at most {} characters long",
                max
            )));
        }
    }
    if let Some(pattern) = &constraints.pattern {
        if !pattern.is_match(value) {
            return Err(ctx.validation_error(format!(
                "Must match pattern {}",
                pattern.as_str()
            )));
        }
    }
    Ok(())
}
