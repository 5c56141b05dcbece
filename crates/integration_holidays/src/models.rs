//! Nager.Date API response models

use domain::{CanonicalDate, HolidayRecord};
use serde::{Deserialize, Serialize};

use crate::error::HolidayError;

/// One entry of the `PublicHolidays` response array
///
/// Only `date` and `name` are required; everything else is optional so that
/// older or trimmed responses still decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NagerHoliday {
    /// Holiday date in `YYYY-MM-DD` form
    pub date: String,
    /// Name in the country's language
    #[serde(default)]
    pub local_name: Option<String>,
    /// English name
    pub name: String,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default)]
    pub country_code: Option<String>,
    /// Whether the holiday falls on the same date every year
    #[serde(default)]
    pub fixed: bool,
    /// Whether the holiday applies to the whole country
    #[serde(default = "default_global")]
    pub global: bool,
    /// Subdivision codes when the holiday is regional
    #[serde(default)]
    pub counties: Option<Vec<String>>,
    /// First year the holiday was observed
    #[serde(default)]
    pub launch_year: Option<i32>,
    /// Holiday categories (`Public`, `Bank`, ...)
    #[serde(default)]
    pub types: Vec<String>,
}

const fn default_global() -> bool {
    true
}

impl NagerHoliday {
    /// Convert the wire entry into a domain record
    ///
    /// # Errors
    ///
    /// Returns [`HolidayError::ParseError`] if `date` is not an ISO date.
    pub fn into_record(self) -> Result<HolidayRecord, HolidayError> {
        let date = CanonicalDate::parse_iso(&self.date)
            .map_err(|e| HolidayError::ParseError(e.to_string()))?;

        let record = HolidayRecord::new(date, self.name);
        Ok(match self.local_name {
            Some(local_name) => record.with_local_name(local_name),
            None => record,
        })
    }
}
