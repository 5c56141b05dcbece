//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A raw date token matched none of the known input formats
    #[error("Unparseable date: {0}")]
    UnparseableDate(String),

    /// Invalid ISO 3166-1 alpha-2 country code
    #[error("Invalid country code: {0}")]
    InvalidCountryCode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_date_error_message() {
        let err = DomainError::UnparseableDate("99/99/9999".to_string());
        assert_eq!(err.to_string(), "Unparseable date: 99/99/9999");
    }

    #[test]
    fn invalid_country_code_error_message() {
        let err = DomainError::InvalidCountryCode("BRA".to_string());
        assert_eq!(err.to_string(), "Invalid country code: BRA");
    }
}
