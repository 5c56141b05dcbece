//! Date extraction from free text
//!
//! Finds date-shaped substrings with a fixed list of regular expressions and
//! normalizes them to [`CanonicalDate`]s.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use domain::{CanonicalDate, DomainError, RawDateToken};
use regex::Regex;
use tracing::debug;

/// Date-shaped patterns, matched in this order: `DD/MM/YYYY`, `DD-MM-YYYY`, `YYYY-MM-DD`
pub const DATE_PATTERNS: [&str; 3] = [
    r"\b\d{1,2}/\d{1,2}/\d{4}\b",
    r"\b\d{1,2}-\d{1,2}-\d{4}\b",
    r"\b\d{4}-\d{1,2}-\d{1,2}\b",
];

static COMPILED_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with valid static patterns
    DATE_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("Failed to compile date pattern"))
        .collect()
});

/// Extracts and normalizes dates found in text
#[derive(Debug, Clone, Copy, Default)]
pub struct DateExtractor;

impl DateExtractor {
    /// Create a new extractor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Collect every unique date-shaped token in `text`
    ///
    /// Matches from all patterns are pooled and deduplicated. Empty text
    /// yields an empty set.
    pub fn extract(&self, text: &str) -> BTreeSet<RawDateToken> {
        let tokens: BTreeSet<RawDateToken> = COMPILED_PATTERNS
            .iter()
            .flat_map(|re| re.find_iter(text))
            .map(|m| RawDateToken::new(m.as_str()))
            .collect();

        debug!(count = tokens.len(), "Extracted date tokens");
        tokens
    }

    /// Normalize a token to `YYYY-MM-DD`
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnparseableDate`] if the token is not a real
    /// calendar date in any supported format.
    pub fn normalize(&self, token: &RawDateToken) -> Result<CanonicalDate, DomainError> {
        CanonicalDate::normalize(token)
    }
}
