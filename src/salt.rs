use crate::error::Error;
use std::env;
use std::fmt;

/// Name of the environment variable [`Salt::from_env`] reads.
pub const SALT_ENV_VAR: &str = "ID_GENERATOR_SALT";

/// Secret mixed into every identifier derivation.
///
/// The salt keeps external parties from recomputing identifiers for known
/// addresses. It is injected when the generator is constructed; nothing in
/// this crate reads the environment after [`Salt::from_env`] returns.
#[derive(Clone)]
pub struct Salt(String);

impl Salt {
    /// Build a salt from an explicit value.
    ///
    /// # Errors
    /// Returns [`Error::EmptySalt`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, Error> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptySalt);
        }
        Ok(Self(value))
    }

    /// Read the salt from the `ID_GENERATOR_SALT` environment variable.
    ///
    /// # Errors
    /// Returns [`Error::SaltMissing`] if the variable is unset or not valid
    /// unicode, and [`Error::EmptySalt`] if it is set to an empty string.
    pub fn from_env() -> Result<Self, Error> {
        match env::var(SALT_ENV_VAR) {
            Ok(value) => Self::new(value),
            Err(env::VarError::NotPresent | env::VarError::NotUnicode(_)) => {
                Err(Error::SaltMissing(SALT_ENV_VAR))
            }
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

// Redacted: the salt is a secret and must not leak through debug output.
impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Salt(..)")
    }
}
