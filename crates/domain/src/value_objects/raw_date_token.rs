//! Raw date token value object
//!
//! A substring of extracted document text that looked like a date.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A date-shaped substring exactly as it appeared in the source text
///
/// No validation is performed: a token such as `99/99/9999` is a valid
/// `RawDateToken` even though it will never normalize to a calendar date.
///
/// # Examples
///
/// ```
/// use domain::RawDateToken;
///
/// let token = RawDateToken::new("25/12/2025");
/// assert_eq!(token.as_str(), "25/12/2025");
/// assert_eq!(token.to_string(), "25/12/2025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDateToken(String);

impl RawDateToken {
    /// Wrap a matched substring
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawDateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RawDateToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawDateToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for RawDateToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
