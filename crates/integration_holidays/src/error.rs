//! Holiday API error types

use thiserror::Error;

/// Errors that can occur while fetching public holidays
#[derive(Debug, Error)]
pub enum HolidayError {
    /// Connection to the holiday service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request to the holiday service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the holiday service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}
