//! Validator and transform descriptors attached to schema leaves.
//!
//! Both hooks are normalized at construction: a plain closure becomes a
//! descriptor with a default message, so parsers never branch on the shape
//! a caller used to supply it.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::constants::DEFAULT_VALIDATOR_MESSAGE;
use crate::error::BoxError;

type ValidatorFn = dyn Fn(&Value) -> bool + Send + Sync;
type TransformFn = dyn Fn(Value) -> Result<Value, BoxError> + Send + Sync;

/// A predicate over a parsed value, with the message reported when it fails.
#[derive(Clone)]
pub struct Validator {
    function: Arc<ValidatorFn>,
    message: String,
    description: Option<String>,
}

impl Validator {
    pub fn new<F>(message: impl Into<String>, function: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
            message: message.into(),
            description: None,
        }
    }

    /// Wrap a bare predicate, reporting the generic failure message.
    pub fn from_fn<F>(function: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(DEFAULT_VALIDATOR_MESSAGE, function)
    }

    /// Predicate over string values. Non-string values fail.
    pub fn for_str<F>(message: impl Into<String>, function: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::new(message, move |value| value.as_str().is_some_and(&function))
    }

    /// Predicate over numeric values. Non-numeric values fail.
    pub fn for_f64<F>(message: impl Into<String>, function: F) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        Self::new(message, move |value| value.as_f64().is_some_and(&function))
    }

    /// Predicate over array values. Non-array values fail.
    pub fn for_array<F>(message: impl Into<String>, function: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        Self::new(message, move |value| {
            value.as_array().is_some_and(|items| function(items))
        })
    }

    /// Replace the failure message, keeping the predicate.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn check(&self, value: &Value) -> bool {
        (self.function)(value)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("message", &self.message)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// A post-validation rewrite of a parsed value. May fail.
#[derive(Clone)]
pub struct Transform {
    function: Arc<TransformFn>,
    description: Option<String>,
}

impl Transform {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Value) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            function: Arc::new(function),
            description: None,
        }
    }

    /// Wrap a rewrite that cannot fail.
    pub fn infallible<F>(function: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::new(move |value| Ok(function(value)))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn apply(&self, value: Value) -> Result<Value, BoxError> {
        (self.function)(value)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
