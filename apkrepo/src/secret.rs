//! Secret string type for keystore passwords.
//!
//! Keeps `keystorepass` and `keypass` out of debug output, logs and error
//! messages. The value is only reachable through [`SecretString::expose_secret`].

use std::fmt;

/// Placeholder printed instead of a secret value.
pub(crate) const REDACTED: &str = "[REDACTED]";

/// A wrapper for secrets that prevents accidental logging.
///
/// # Examples
///
/// ```
/// use apkrepo::SecretString;
///
/// let pass = SecretString::new("foo");
/// assert_eq!(format!("{pass:?}"), "[REDACTED]");
/// assert_eq!(pass.expose_secret(), "foo");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Create a new secret from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Explicitly expose the secret value.
    #[inline]
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // Best-effort only; copies made elsewhere are not cleared.
        self.0.clear();
        self.0.shrink_to_fit();
    }
}
