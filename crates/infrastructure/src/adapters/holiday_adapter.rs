//! Holiday adapter - Implements HolidayPort using integration_holidays

use application::error::ApplicationError;
use application::ports::HolidayPort;
use async_trait::async_trait;
use domain::{CountryCode, YearHolidaySet};
use integration_holidays::{HolidayClient, HolidayConfig, HolidayError, NagerDateClient};
use tracing::{instrument, warn};

/// Adapter for public holidays using the Nager.Date API
#[derive(Debug)]
pub struct HolidayAdapter {
    client: NagerDateClient,
}

impl HolidayAdapter {
    /// Create an adapter around an existing client
    pub const fn new(client: NagerDateClient) -> Self {
        Self { client }
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: &HolidayConfig) -> Result<Self, ApplicationError> {
        let client = NagerDateClient::new(config).map_err(Self::map_error)?;
        Ok(Self::new(client))
    }

    /// Map integration holiday error to application error
    fn map_error(err: HolidayError) -> ApplicationError {
        match err {
            HolidayError::ConnectionFailed(e)
            | HolidayError::RequestFailed(e)
            | HolidayError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            HolidayError::Timeout { .. } => ApplicationError::ExternalService(err.to_string()),
            HolidayError::RateLimitExceeded => ApplicationError::RateLimited,
            HolidayError::ParseError(e) => ApplicationError::Internal(e),
            HolidayError::ConfigurationError(_) => ApplicationError::Configuration(err.to_string()),
        }
    }
}

#[async_trait]
impl HolidayPort for HolidayAdapter {
    #[instrument(skip(self), fields(country = %country))]
    async fn fetch_year(
        &self,
        year: i32,
        country: &CountryCode,
    ) -> Result<YearHolidaySet, ApplicationError> {
        self.client
            .public_holidays(year, country)
            .await
            .map_err(|e| {
                warn!(error = %e, "Public holiday request failed");
                Self::map_error(e)
            })
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
