//! Ready-made validators for common constraints.
//!
//! Responsibilities:
//! - Build `Validator` descriptors (predicate, message, description) for
//!   membership, ranges, lengths, string formats, and network values.
//! - Compose validators with `all`, `any`, and `not`.
//!
//! Does NOT handle:
//! - Running validators (parsers call `Validator::check` after type checks).
//! - Identifier, date, color, version, or password formats; build those with
//!   `matches` or `Validator::new`.
//!
//! Invariants:
//! - Every factory returns a descriptor with a default message; callers
//!   override it with `Validator::with_message`.
//! - Predicates fail on values of the wrong JSON shape instead of panicking.

mod format;
mod general;
mod logic;
mod network;

pub use format::{UrlOptions, alphanumeric, email, matches, url};
pub use general::{LengthBounds, length, one_of, range};
pub use logic::{all, any, not};
pub use network::{ip, ipv4, ipv6, port};
