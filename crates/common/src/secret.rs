//! Secret wrapper for sensitive string values

use std::fmt;
use zeroize::Zeroize;

/// Sensitive string value - redacted in Debug/Display/logs, zeroed on drop.
///
/// The client secret lives in one of these for the whole client lifetime;
/// call sites that genuinely need the raw value (token-endpoint requests)
/// go through `expose`.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a sensitive value
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the inner value (use sparingly)
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
