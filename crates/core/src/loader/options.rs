//! Loader configuration: key synthesis, required policy, diagnostics level.
//!
//! Invariants:
//! - Options never change which leaves are visited, only how keys are named
//!   and whether absent leaves are errors.
//! - `verbosity` only gates diagnostics; it has no behavioral effect.

use std::fmt;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;

use crate::constants::{DEFAULT_KEY_PREFIX, DEFAULT_KEY_SEPARATOR};
use crate::schema::LeafSchema;

type KeyTransformFn = dyn Fn(&str) -> String + Send + Sync;
type PathJoinFn = dyn Fn(&[String], &str) -> String + Send + Sync;

/// Options controlling how an `EnvLoader` resolves keys and absences.
#[derive(Clone)]
pub struct LoaderOptions {
    separator: String,
    prefix: String,
    key_transform: Option<Arc<KeyTransformFn>>,
    path_join: Option<Arc<PathJoinFn>>,
    required_by_default: bool,
    verbosity: LevelFilter,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_KEY_SEPARATOR.to_string(),
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            key_transform: None,
            path_join: None,
            required_by_default: false,
            verbosity: LevelFilter::WARN,
        }
    }
}

impl fmt::Debug for LoaderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderOptions")
            .field("separator", &self.separator)
            .field("prefix", &self.prefix)
            .field("custom_key_transform", &self.key_transform.is_some())
            .field("custom_path_join", &self.path_join.is_some())
            .field("required_by_default", &self.required_by_default)
            .field("verbosity", &self.verbosity)
            .finish()
    }
}

impl LoaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Separator placed between path segments of synthesized keys.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Prefix prepended to every resolved key, explicit names included.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the default SCREAMING_SNAKE transform applied to joined paths.
    pub fn with_key_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.key_transform = Some(Arc::new(transform));
        self
    }

    /// Replace the default path join. Receives the path and the separator.
    pub fn with_path_join<F>(mut self, join: F) -> Self
    where
        F: Fn(&[String], &str) -> String + Send + Sync + 'static,
    {
        self.path_join = Some(Arc::new(join));
        self
    }

    /// Treat leaves without an explicit `required` flag as required.
    pub fn with_required_by_default(mut self, required: bool) -> Self {
        self.required_by_default = required;
        self
    }

    pub fn with_verbosity(mut self, verbosity: LevelFilter) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn verbosity(&self) -> LevelFilter {
        self.verbosity
    }

    /// Effective required flag for a leaf.
    pub fn is_required(&self, leaf: &LeafSchema) -> bool {
        leaf.required.unwrap_or(self.required_by_default)
    }

    /// Environment key for a leaf at `path`.
    ///
    /// An explicit `name` is used verbatim; otherwise the path is joined and
    /// transformed. The prefix is prepended in both cases.
    pub fn resolve_key(&self, leaf: &LeafSchema, path: &[String]) -> String {
        if let Some(name) = &leaf.name {
            return format!("{}{}", self.prefix, name);
        }

        let joined = match &self.path_join {
            Some(join) => join(path, &self.separator),
            None => path.join(&self.separator),
        };
        let transformed = match &self.key_transform {
            Some(transform) => transform(&joined),
            None => screaming_snake(&joined),
        };
        format!("{}{}", self.prefix, transformed)
    }
}

/// Upper-case a key, splitting camelCase words with `_`.
///
/// `testString` becomes `TEST_STRING`; `database__host` becomes `DATABASE__HOST`.
pub fn screaming_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut previous: Option<char> = None;
    for c in key.chars() {
        if c.is_uppercase() && previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        previous = Some(c);
    }
    out
}
