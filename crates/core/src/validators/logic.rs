use crate::schema::Validator;

/// Passes when every validator passes. An empty list always passes.
pub fn all(validators: Vec<Validator>) -> Validator {
    let count = validators.len();
    Validator::new("Failed to satisfy all validation requirements", move |value| {
        validators.iter().all(|v| v.check(value))
    })
    .with_description(format!("Validates value passes all of {} requirements", count))
}

/// Passes when at least one validator passes. An empty list never passes.
pub fn any(validators: Vec<Validator>) -> Validator {
    let count = validators.len();
    Validator::new("Failed to satisfy any validation requirement", move |value| {
        validators.iter().any(|v| v.check(value))
    })
    .with_description(format!(
        "Validates value passes at least one of {} requirements",
        count
    ))
}

/// Inverts a validator.
pub fn not(validator: Validator) -> Validator {
    let message = format!("Must not satisfy: {}", validator.message());
    Validator::new(message, move |value| !validator.check(value))
        .with_description("Validates value does NOT pass the provided validation")
}
