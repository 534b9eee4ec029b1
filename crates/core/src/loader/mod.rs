//! Environment loader driven by a schema.
//!
//! Responsibilities:
//! - Provide `EnvLoader`, which walks a `Schema` and produces a `ConfigTree`.
//! - Synthesize environment keys from structural paths (`LoaderOptions`).
//! - Abstract the environment behind `VarSource` so tests can pass plain maps.
//! - Describe every leaf's key binding for documentation (`EnvLoader::describe`).
//!
//! Does NOT handle:
//! - Reading `.env` files (the CLI layers those in via `Overlay`).
//! - Writing to the process environment.
//! - Installing a tracing subscriber.
//!
//! Invariants / Assumptions:
//! - Absent and whitespace-only values are treated identically.
//! - Present values are trimmed before they reach a parser.
//! - A load either returns a complete tree or the first error encountered.

mod builder;
mod options;
mod source;
mod tree;

#[cfg(test)]
mod tests;

pub use builder::{EnvLoader, KeyInfo};
pub use options::{LoaderOptions, screaming_snake};
pub use source::{Overlay, ProcessEnv, VarSource};
pub use tree::ConfigTree;
