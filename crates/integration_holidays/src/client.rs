//! Nager.Date holiday client
//!
//! HTTP client for the `PublicHolidays` endpoint of the Nager.Date API.

use std::time::Duration;

use async_trait::async_trait;
use domain::{CountryCode, HolidayRecord, YearHolidaySet};
use reqwest::{Client, StatusCode, header};
use tracing::{debug, instrument};

use crate::config::HolidayConfig;
use crate::error::HolidayError;
use crate::models::NagerHoliday;

/// Trait for public holiday clients
#[async_trait]
pub trait HolidayClient: Send + Sync {
    /// Fetch every public holiday of `country` in `year`
    async fn public_holidays(
        &self,
        year: i32,
        country: &CountryCode,
    ) -> Result<YearHolidaySet, HolidayError>;

    /// Check if the holiday service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Nager.Date HTTP client
#[derive(Debug)]
pub struct NagerDateClient {
    client: Client,
    config: HolidayConfig,
}

impl NagerDateClient {
    /// Create a new Nager.Date client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &HolidayConfig) -> Result<Self, HolidayError> {
        config
            .validate()
            .map_err(HolidayError::ConfigurationError)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("holiday-checker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HolidayError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Build the `PublicHolidays` URL for a year and country
    fn public_holidays_url(&self, year: i32, country: &CountryCode) -> String {
        format!(
            "{}/api/v3/PublicHolidays/{year}/{country}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Map a transport-level reqwest error
    fn map_send_error(&self, err: &reqwest::Error) -> HolidayError {
        if err.is_timeout() {
            HolidayError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if err.is_connect() {
            HolidayError::ConnectionFailed(err.to_string())
        } else {
            HolidayError::RequestFailed(err.to_string())
        }
    }

    /// Map a non-success HTTP status
    fn map_status(status: StatusCode, url: &str) -> HolidayError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => HolidayError::RateLimitExceeded,
            s if s.is_server_error() => HolidayError::ServiceUnavailable(format!("HTTP {s}")),
            s => HolidayError::RequestFailed(format!("HTTP {s} for {url}")),
        }
    }

    /// Parse the JSON array body into a holiday set
    fn parse_holidays_response(
        body: &str,
        year: i32,
        country: &CountryCode,
    ) -> Result<YearHolidaySet, HolidayError> {
        let raw: Vec<NagerHoliday> =
            serde_json::from_str(body).map_err(|e| HolidayError::ParseError(e.to_string()))?;

        let records = raw
            .into_iter()
            .map(NagerHoliday::into_record)
            .collect::<Result<Vec<HolidayRecord>, _>>()?;

        Ok(YearHolidaySet::new(year, country.clone(), records))
    }
}

#[async_trait]
impl HolidayClient for NagerDateClient {
    #[instrument(skip(self), fields(country = %country))]
    async fn public_holidays(
        &self,
        year: i32,
        country: &CountryCode,
    ) -> Result<YearHolidaySet, HolidayError> {
        let url = self.public_holidays_url(year, country);
        debug!(url = %url, "Fetching public holidays");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::map_status(status, &url));
        }

        let body = response
            .text()
            .await
            .map_err(|e| HolidayError::ParseError(e.to_string()))?;

        let holidays = Self::parse_holidays_response(&body, year, country)?;
        debug!(count = holidays.len(), "Fetched public holidays");
        Ok(holidays)
    }

    async fn is_healthy(&self) -> bool {
        let url = format!(
            "{}/api/v3/AvailableCountries",
            self.config.base_url.trim_end_matches('/')
        );

        match self.client.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
