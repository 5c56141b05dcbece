//! Canonical date value object
//!
//! Every date the holiday checker compares is first normalized to ISO
//! `YYYY-MM-DD` form. Normalization tries a fixed list of input formats in
//! order and keeps the first one that parses.
//!
//! # Examples
//!
//! ```
//! use domain::{CanonicalDate, RawDateToken};
//!
//! let date = CanonicalDate::normalize(&RawDateToken::new("25/12/2025")).unwrap();
//! assert_eq!(date.to_string(), "2025-12-25");
//! assert_eq!(date.year(), 2025);
//!
//! // Tokens that are not calendar dates are rejected
//! assert!(CanonicalDate::normalize(&RawDateToken::new("99/99/9999")).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::RawDateToken;

/// Input formats tried during normalization, in priority order
///
/// Day-first formats win over ISO, so `01/02/2025` is the 1st of February.
pub const INPUT_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

const MIN_YEAR: i32 = 1;

/// A calendar date rendered as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalDate(NaiveDate);

impl CanonicalDate {
    /// Normalize a raw token by trying each of [`INPUT_FORMATS`] in order
    ///
    /// Years before 1 are rejected, whatever format matched.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnparseableDate`] if no format matches.
    pub fn normalize(token: &RawDateToken) -> Result<Self, DomainError> {
        INPUT_FORMATS
            .iter()
            .find_map(|fmt| {
                NaiveDate::parse_from_str(token.as_str(), fmt)
                    .ok()
                    .filter(|date| date.year() >= MIN_YEAR)
            })
            .map(Self)
            .ok_or_else(|| DomainError::UnparseableDate(token.to_string()))
    }

    /// Parse a date that is already in `YYYY-MM-DD` form
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnparseableDate`] if the string is not an ISO date.
    pub fn parse_iso(value: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(value, CANONICAL_FORMAT)
            .map(Self)
            .map_err(|_| DomainError::UnparseableDate(value.to_string()))
    }

    /// Calendar year of this date
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

}

impl From<NaiveDate> for CanonicalDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for CanonicalDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(s)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}
