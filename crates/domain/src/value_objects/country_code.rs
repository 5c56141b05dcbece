//! ISO 3166-1 alpha-2 country code

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A validated two-letter country code, stored uppercase
///
/// # Examples
///
/// ```
/// use domain::CountryCode;
///
/// let code = CountryCode::new("br").unwrap();
/// assert_eq!(code.as_str(), "BR");
/// assert_eq!(code, CountryCode::brazil());
///
/// assert!(CountryCode::new("BRA").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a country code, normalizing to uppercase
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidCountryCode`] unless the input is exactly
    /// two ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let code = code.as_ref().trim();
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(DomainError::InvalidCountryCode(code.to_string()))
        }
    }

    /// Brazil, the region every holiday lookup is made for
    #[must_use]
    pub fn brazil() -> Self {
        Self("BR".to_string())
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::brazil()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}
