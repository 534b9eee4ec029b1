use serde_json::Value;

use super::base::finish;
use super::registry::ParserRegistry;
use super::{ParseContext, Parser};
use crate::error::EnvError;
use crate::schema::{LeafKind, LeafSchema};

/// Parser for `array` leaves.
///
/// The raw value must be a single JSON array literal. Each element is
/// dispatched back through the registry with the `items` schema, so items
/// may be any registered type, including nested arrays.
pub struct ArrayParser<'r> {
    registry: &'r ParserRegistry,
}

impl<'r> ArrayParser<'r> {
    pub fn new(registry: &'r ParserRegistry) -> Self {
        Self { registry }
    }
}

/// Context for one element. Strings pass their decoded content, marked so
/// the item parser keeps it verbatim; other elements are re-serialized as JSON.
fn element_context<'a>(
    ctx: &ParseContext<'_>,
    items: &'a LeafSchema,
    index: usize,
    element: &Value,
) -> ParseContext<'a> {
    let mut path = ctx.path.clone();
    path.push(index.to_string());
    let key = format!("{}[{}]", ctx.key, index);
    match element {
        Value::String(text) => ParseContext::new(key, path, items, Some(text.clone())).decoded(),
        other => ParseContext::new(key, path, items, Some(other.to_string())),
    }
}

impl Parser for ArrayParser<'_> {
    fn parse(&self, ctx: &ParseContext<'_>) -> Result<Value, EnvError> {
        let LeafKind::Array(constraints) = &ctx.schema.kind else {
            return Err(ctx.parse_error(format!(
                "Array parser cannot handle type: {}",
                ctx.schema.type_tag()
            )));
        };

        let raw = ctx.raw()?;
        let parsed: Value = serde_json::from_str(raw.trim())
            .map_err(|source| ctx.parse_error("Invalid JSON format").with_source(source))?;
        let Value::Array(elements) = parsed else {
            return Err(ctx.parse_error("Not a valid JSON array"));
        };

        if let Some(min) = constraints.min_items {
            if elements.len() < min {
                return Err(ctx.validation_error(format!("Must have at least {} items", min)));
            }
        }
        if let Some(max) = constraints.max_items {
            if elements.len() > max {
                return Err(ctx.validation_error(format!("Must have at most {} items", max)));
            }
        }

        let mut values = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let item_ctx = element_context(ctx, &constraints.items, index, element);
            let value = self.registry.parse(&item_ctx).map_err(|source| {
                ctx.validation_error(format!("Item {}: {}", index, source))
                    .with_source(source)
            })?;
            values.push(value);
        }

        finish(ctx, Value::Array(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::schema::{Transform, Validator};
    use serde_json::json;

    fn parse(leaf: &LeafSchema, raw: &str) -> Result<Value, EnvError> {
        let registry = ParserRegistry::new();
        let ctx = ParseContext::new("TEST_KEY", Vec::new(), leaf, Some(raw.to_string()));
        ArrayParser::new(&registry).parse(&ctx)
    }

    #[test]
    fn test_invalid_json_is_parse_error_with_cause() {
        let leaf = LeafSchema::array(LeafSchema::string());
        let err = parse(&leaf, "not-an-array").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.message(), "Invalid JSON format");
        let cause = std::error::Error::source(&err).expect("JSON error should be attached");
        assert!(cause.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn test_non_array_json_is_parse_error() {
        let leaf = LeafSchema::array(LeafSchema::string());
        let err = parse(&leaf, r#"{"a": 1}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.message(), "Not a valid JSON array");
    }

    #[test]
    fn test_parses_string_items() {
        let leaf = LeafSchema::array(LeafSchema::string());
        assert_eq!(
            parse(&leaf, r#"["item1", "item2"]"#).unwrap(),
            json!(["item1", "item2"])
        );
    }

    #[test]
    fn test_string_items_keep_escaped_characters() {
        let leaf = LeafSchema::array(LeafSchema::string());
        assert_eq!(
            parse(&leaf, r#"["C:\\dir", "say \"hi\""]"#).unwrap(),
            json!(["C:\\dir", "say \"hi\""])
        );
    }

    #[test]
    fn test_string_items_are_not_renormalized() {
        let leaf = LeafSchema::array(LeafSchema::string());
        assert_eq!(
            parse(&leaf, r#"["  padded  ", "'quoted'", "`tick`", "\"dq\""]"#).unwrap(),
            json!(["  padded  ", "'quoted'", "`tick`", "\"dq\""])
        );
    }

    #[test]
    fn test_blank_string_item_is_kept_when_required() {
        let leaf = LeafSchema::array(LeafSchema::string().with_required(true));
        assert_eq!(parse(&leaf, r#"[" ", ""]"#).unwrap(), json!([" ", ""]));
    }

    #[test]
    fn test_enum_items_match_decoded_content() {
        let leaf = LeafSchema::array(LeafSchema::enumeration(["info"]));
        let err = parse(&leaf, r#"[" info "]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(parse(&leaf, r#"["info"]"#).unwrap(), json!(["info"]));
    }

    #[test]
    fn test_scalar_string_items_still_coerce() {
        let numbers = LeafSchema::array(LeafSchema::number());
        assert_eq!(parse(&numbers, r#"[" 5 ", "6"]"#).unwrap(), json!([5, 6]));
        let flags = LeafSchema::array(LeafSchema::boolean());
        assert_eq!(parse(&flags, r#"["yes", false]"#).unwrap(), json!([true, false]));
    }

    #[test]
    fn test_parses_nested_arrays() {
        let leaf = LeafSchema::array(LeafSchema::array(LeafSchema::number()));
        assert_eq!(
            parse(&leaf, "[[1,2],[3,4]]").unwrap(),
            json!([[1, 2], [3, 4]])
        );
    }

    #[test]
    fn test_item_failure_names_index() {
        let leaf = LeafSchema::array(LeafSchema::number());
        let err = parse(&leaf, r#"[1, "two", 3]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(
            err.message().starts_with("Item 1: "),
            "unexpected message: {}",
            err.message()
        );
        assert!(err.message().contains("TEST_KEY[1]"));
        assert!(err.path().is_empty());
        let cause = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<EnvError>())
            .expect("item error should be attached");
        assert_eq!(cause.path(), ["1".to_string()]);
    }

    #[test]
    fn test_enum_items() {
        let leaf = LeafSchema::array(LeafSchema::enumeration(["debug", "info"]));
        assert_eq!(parse(&leaf, r#"["info","debug"]"#).unwrap(), json!(["info", "debug"]));
        let err = parse(&leaf, r#"["trace"]"#).unwrap_err();
        assert!(err.message().contains("Allowed values: debug, info"));
    }

    #[test]
    fn test_length_checked_before_items() {
        let leaf = LeafSchema::array(LeafSchema::number()).with_min_items(2).with_max_items(3);
        assert_eq!(parse(&leaf, r#"["x"]"#).unwrap_err().message(), "Must have at least 2 items");
        assert_eq!(parse(&leaf, "[1,2,3,4]").unwrap_err().message(), "Must have at most 3 items");
        assert_eq!(parse(&leaf, "[1,2]").unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_whole_array_validator_and_transform() {
        let leaf = LeafSchema::array(LeafSchema::number())
            .with_validator(Validator::for_array("Must be sorted", |items| {
                items.windows(2).all(|w| w[0].as_f64() <= w[1].as_f64())
            }))
            .with_transform(Transform::infallible(|v| {
                json!(v.as_array().map(|items| items.len()).unwrap_or_default())
            }));
        assert_eq!(parse(&leaf, "[1,2,3]").unwrap(), json!(3));
        assert_eq!(parse(&leaf, "[3,1]").unwrap_err().message(), "Must be sorted");
    }

    #[test]
    fn test_empty_array() {
        let leaf = LeafSchema::array(LeafSchema::boolean());
        assert_eq!(parse(&leaf, "[]").unwrap(), json!([]));
    }
}
