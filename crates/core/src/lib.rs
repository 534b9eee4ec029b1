//! Schema-driven loading of environment variables.
//!
//! This crate turns flat `KEY=value` environment strings into a nested,
//! typed configuration tree described by a `Schema`. Values are parsed by
//! type (string, number, boolean, enum, JSON array, or caller-registered
//! types), checked against constraints and validators, and optionally
//! transformed. Failures are reported as an `EnvError` naming the
//! environment key and the structural path.
//!
//! ```
//! use envschema::{EnvLoader, LeafSchema, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new().group(
//!     "database",
//!     Schema::new()
//!         .leaf("host", LeafSchema::string().with_required(true))
//!         .leaf("port", LeafSchema::number().with_default(5432)),
//! );
//! let env = [("DATABASE__HOST", "localhost")];
//!
//! let config = EnvLoader::new(schema).load(&env).unwrap();
//! assert_eq!(config.get(&["database", "port"]), Some(&json!(5432)));
//! ```

pub mod constants;
mod error;
mod loader;
pub mod parser;
pub mod schema;
pub mod validators;

pub use error::{BoxError, EnvError, ErrorKind};
pub use loader::{
    ConfigTree, EnvLoader, KeyInfo, LoaderOptions, Overlay, ProcessEnv, VarSource,
    screaming_snake,
};
pub use parser::{ParseContext, Parser, ParserRegistry};
pub use schema::{LeafSchema, Schema, SchemaError, SchemaNode, Transform, Validator};
