//! Holiday source port
//!
//! Defines the interface for retrieving a year's public holidays.

use async_trait::async_trait;
use domain::{CountryCode, YearHolidaySet};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for public holiday lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HolidayPort: Send + Sync {
    /// Fetch every public holiday of `country` in `year`
    ///
    /// Each call is a fresh remote lookup; caching is the caller's concern.
    async fn fetch_year(
        &self,
        year: i32,
        country: &CountryCode,
    ) -> Result<YearHolidaySet, ApplicationError>;

    /// Check if the holiday source is reachable
    async fn is_available(&self) -> bool;
}
