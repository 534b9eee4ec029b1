//! Centralized constants for the envschema engine.
//!
//! Default values shared by the loader, the parsers, and the schema
//! document reader, kept in one place to avoid magic string duplication.

// =============================================================================
// Key Resolution Defaults
// =============================================================================

/// Separator placed between path segments when synthesizing an environment key.
pub const DEFAULT_KEY_SEPARATOR: &str = "__";

/// Prefix prepended to every resolved environment key.
pub const DEFAULT_KEY_PREFIX: &str = "";

// =============================================================================
// Built-in Type Tags
// =============================================================================

pub const TYPE_STRING: &str = "string";
pub const TYPE_NUMBER: &str = "number";
pub const TYPE_BOOLEAN: &str = "boolean";
pub const TYPE_ENUM: &str = "enum";
pub const TYPE_ARRAY: &str = "array";

// =============================================================================
// Parser Vocabulary
// =============================================================================

/// Characters stripped as one matching pair around string-like raw values.
pub const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Accepted (case-insensitive) spellings of `true`.
pub const TRUTHY_VALUES: [&str; 5] = ["true", "1", "yes", "y", "on"];

/// Accepted (case-insensitive) spellings of `false`.
pub const FALSY_VALUES: [&str; 5] = ["false", "0", "no", "n", "off"];

/// Largest magnitude at which an integral `f64` is emitted as a JSON integer (2^53).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// Validator Defaults
// =============================================================================

/// Message used when a plain validator function is supplied without one.
pub const DEFAULT_VALIDATOR_MESSAGE: &str = "Custom validation failed";
