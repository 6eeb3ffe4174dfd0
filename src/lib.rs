//! Deterministic pseudonymous poster identifiers and display colors.
//!
//! `posterid` lets an anonymous-posting system show consistent per-poster
//! labels without storing real addresses:
//! - [`IdGenerator`] hashes `address || salt || context` (SHA-256) down to
//!   an 8-character lowercase hex token
//! - [`color_for`] maps a token's leading characters to a stable `#RRGGBB`
//!   display color via hue rotation in HSL space
//!
//! The salt is injected at construction ([`Salt::new`], or
//! [`Salt::from_env`] reading `ID_GENERATOR_SALT`); the calendar date used
//! by [`IdGenerator::generate_daily`] comes from an injectable [`Clock`].

/// Calendar date source for daily identifiers.
pub mod clock;
/// Identifier to display color mapping (HSL hue rotation).
pub mod color;
/// Crate error type.
pub mod error;
/// Poster identifier derivation.
pub mod generator;
/// Secret salt configuration.
pub mod salt;

pub use clock::{Clock, SystemClock};
pub use color::{color_for, Color};
pub use error::Error;
pub use generator::{IdGenerator, PosterId};
pub use salt::{Salt, SALT_ENV_VAR};
