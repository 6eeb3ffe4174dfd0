use thiserror::Error;

/// Errors produced by this crate.
///
/// The salt variants are configuration errors: fatal for the caller, since
/// retrying cannot fix absent configuration. The remaining variants are
/// plain input errors; the caller decides how severe they are.
#[derive(Debug, Error)]
pub enum Error {
    /// The salt environment variable is unset (or not valid unicode).
    #[error("salt is not configured: set the `{0}` environment variable")]
    SaltMissing(&'static str),

    /// The configured salt is an empty string.
    #[error("salt must not be empty")]
    EmptySalt,

    /// A color input whose first four characters are not hex digits.
    #[error("expected four leading hex digits in `{0}`")]
    NonHexPrefix(String),

    /// A token that is not 8 lowercase hex characters.
    #[error("malformed poster id `{0}`: expected 8 lowercase hex characters")]
    MalformedId(String),
}
