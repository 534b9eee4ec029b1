use serde_json::Value;

use super::base::{finish, number_value};
use super::{ParseContext, Parser};
use crate::error::EnvError;
use crate::schema::{LeafKind, NumberConstraints};

/// Parser for `number` leaves.
///
/// Accepts integer, decimal, and scientific-notation literals. Anything that
/// does not reduce to a finite `f64` is a validation failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumberParser;

impl Parser for NumberParser {
    fn parse(&self, ctx: &ParseContext<'_>) -> Result<Value, EnvError> {
        let literal = ctx.text()?.trim();

        if literal == "NaN" {
            return Err(ctx.validation_error("Invalid number: NaN is not allowed"));
        }

        let number: f64 = literal
            .parse()
            .map_err(|source| ctx.validation_error("Invalid number").with_source(source))?;
        if !number.is_finite() {
            return Err(ctx.validation_error("Invalid number: must be finite"));
        }

        if let LeafKind::Number(constraints) = &ctx.schema.kind {
            check_constraints(ctx, number, constraints)?;
        }
        finish(ctx, number_value(number))
    }
}

fn check_constraints(
    ctx: &ParseContext<'_>,
    number: f64,
    constraints: &NumberConstraints,
) -> Result<(), EnvError> {
    if let Some(min) = constraints.min {
        if number < min {
            return Err(ctx.validation_error(format!("Must be at least {}", min)));
        }
    }
    if let Some(max) = constraints.max {
        if number > max {
            return Err(ctx.validation_error(format!("Must be at most {}", max)));
        }
    }
    if constraints.integer && number.fract() != 0.0 {
        return Err(ctx.validation_error("Must be an integer"));
    }
    Ok(())
}
