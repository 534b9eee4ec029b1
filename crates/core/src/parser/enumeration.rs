use serde_json::Value;

use super::base::finish;
use super::{ParseContext, Parser};
use crate::error::EnvError;
use crate::schema::LeafKind;

/// Parser for `enum` leaves: exact membership in the declared values.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnumParser;

impl Parser for EnumParser {
    fn parse(&self, ctx: &ParseContext<'_>) -> Result<Value, EnvError> {
        let LeafKind::Enum(values) = &ctx.schema.kind else {
            return Err(ctx.parse_error(format!(
                "Enum parser cannot handle type: {}",
                ctx.schema.type_tag()
            )));
        };

        let value = ctx.text()?;
        if !values.iter().any(|allowed| allowed == value) {
            return Err(ctx.validation_error(format!("Allowed values: {}", values.join(", "))));
        }

        finish(ctx, Value::String(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::schema::LeafSchema;
    use serde_json::json;

    fn parse(leaf: &LeafSchema, raw: &str) -> Result<Value, EnvError> {
        let ctx = ParseContext::new(
            "TEST_KEY",
            vec!["TEST_PATH".to_string()],
            leaf,
            Some(raw.to_string()),
        );
        EnumParser.parse(&ctx)
    }

    #[test]
    fn test_rejects_value_outside_set() {
        let leaf = LeafSchema::enumeration(["value1", "value2", "value3"]);
        let err = parse(&leaf, "invalid_value").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "Allowed values: value1, value2, value3");
        assert_eq!(
            err.to_string(),
            "Invalid value for TEST_KEY: Allowed values: value1, value2, value3"
        );
    }

    #[test]
    fn test_accepts_member_after_trimming() {
        let leaf = LeafSchema::enumeration(["value1", "value2", "value3"]);
        assert_eq!(parse(&leaf, "value2").unwrap(), json!("value2"));
        assert_eq!(parse(&leaf, "  value3 ").unwrap(), json!("value3"));
        assert_eq!(parse(&leaf, "\"value1\"").unwrap(), json!("value1"));
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        let leaf = LeafSchema::enumeration(["a", "b", "c"]);
        let err = parse(&leaf, "A").unwrap_err();
        assert_eq!(err.message(), "Allowed values: a, b, c");
    }

    #[test]
    fn test_non_enum_schema_is_a_parse_error() {
        let leaf = LeafSchema::string();
        assert_eq!(parse(&leaf, "a").unwrap_err().kind(), ErrorKind::Parse);
    }
}
