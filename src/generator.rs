use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::salt::Salt;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Length of a rendered [`PosterId`] in hex characters.
pub const ID_LEN: usize = 8;

/// 8-character lowercase hex token identifying a poster within a scope.
///
/// The token carries the first 32 bits of a SHA-256 digest. That keeps
/// labels short enough to display next to a post, but it is a small
/// collision space at scale; the length is kept for compatibility with
/// existing deployments rather than widened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PosterId(String);

impl PosterId {
    /// The token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PosterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PosterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PosterId {
    type Err = Error;

    /// Re-validate an externally supplied token.
    fn from_str(s: &str) -> Result<Self, Error> {
        let well_formed =
            s.len() == ID_LEN && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'));
        if well_formed {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::MalformedId(s.to_string()))
        }
    }
}

/// Derives pseudonymous poster identifiers.
///
/// Holds the salt and a clock, injected at construction. All methods take
/// `&self` and nothing is mutated, so one generator can be shared across
/// threads freely.
#[derive(Debug, Clone)]
pub struct IdGenerator<C = SystemClock> {
    salt: Salt,
    clock: C,
}

impl IdGenerator {
    /// Generator using the system clock for daily identifiers.
    #[must_use]
    pub fn new(salt: Salt) -> Self {
        Self::with_clock(salt, SystemClock)
    }

    /// Generator configured from the `ID_GENERATOR_SALT` environment
    /// variable.
    ///
    /// # Errors
    /// Returns [`Error::SaltMissing`] or [`Error::EmptySalt`] when the
    /// variable is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Salt::from_env()?))
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Generator with an injected clock (e.g. a fixed `Date` in tests).
    #[must_use]
    pub fn with_clock(salt: Salt, clock: C) -> Self {
        Self { salt, clock }
    }

    /// Derive the identifier for `address` scoped by `context`.
    ///
    /// Hashes the exact byte concatenation `address || salt || context`
    /// with SHA-256 and keeps the first 8 hex characters of the digest.
    /// Both strings may hold anything, including nothing: empty, malformed
    /// and non-ASCII input all derive normally. Pass `""` for an unscoped
    /// identifier.
    #[must_use]
    pub fn generate(&self, address: &str, context: &str) -> PosterId {
        let mut hasher = Sha256::new();
        hasher.update(address.as_bytes());
        hasher.update(self.salt.as_bytes());
        hasher.update(context.as_bytes());
        let mut token = hex::encode(hasher.finalize());
        token.truncate(ID_LEN);
        PosterId(token)
    }

    /// Derive today's identifier for `address`.
    ///
    /// The context is the clock's current calendar date rendered as
    /// `YYYY-MM-DD`, so an address keeps one identifier for the whole day
    /// and gets an independently derived one the next.
    #[must_use]
    pub fn generate_daily(&self, address: &str) -> PosterId {
        self.generate(address, &self.clock.today().to_string())
    }
}
