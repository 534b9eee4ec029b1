use serde_json::Value;

use crate::schema::Validator;

/// Render a value for messages: strings without quotes, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// The value must equal one of `options`.
pub fn one_of<I, V>(options: I) -> Validator
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let options: Vec<Value> = options.into_iter().map(Into::into).collect();
    let listed = options.iter().map(display_value).collect::<Vec<_>>().join(", ");
    Validator::new(format!("Value must be one of: {}", listed), move |value| {
        options.contains(value)
    })
    .with_description(format!("Validates value is one of a predefined set: {}", listed))
}

/// A number within `min..=max`.
pub fn range(min: f64, max: f64) -> Validator {
    Validator::for_f64(format!("Value must be between {} and {}", min, max), move |n| {
        (min..=max).contains(&n)
    })
    .with_description(format!("Validates number is within range {}-{}", min, max))
}

/// Length bounds for `length`. `exact` takes precedence over `min`/`max`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub exact: Option<usize>,
}

impl LengthBounds {
    fn accepts(&self, length: usize) -> bool {
        if let Some(exact) = self.exact {
            return length == exact;
        }
        self.min.is_none_or(|min| length >= min) && self.max.is_none_or(|max| length <= max)
    }

    fn message(&self) -> String {
        match (self.exact, self.min, self.max) {
            (Some(exact), _, _) => format!("Must have exactly {} items", exact),
            (None, Some(min), Some(max)) => format!("Length must be between {} and {}", min, max),
            (None, Some(min), None) => format!("Must have at least {} items", min),
            (None, None, Some(max)) => format!("Must have at most {} items", max),
            (None, None, None) => "Invalid length".to_string(),
        }
    }
}

/// Length of a string (in characters) or an array within `bounds`.
pub fn length(bounds: LengthBounds) -> Validator {
    Validator::new(bounds.message(), move |value| {
        let length = match value {
            Value::String(text) => text.chars().count(),
            Value::Array(items) => items.len(),
            _ => return false,
        };
        bounds.accepts(length)
    })
    .with_description("Validates length constraints")
}
