//! Holiday resolver
//!
//! Decides whether a canonical date is a public holiday. Holiday sets are
//! fetched once per year through a [`HolidayPort`] and kept for the
//! lifetime of the resolver. Failed fetches are never cached, so the next
//! lookup for that year goes back to the network.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use domain::{CanonicalDate, CountryCode, DayStatus, YearHolidaySet};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::HolidayPort;

/// Resolves holiday status with a per-year cache
pub struct HolidayResolver {
    source: Arc<dyn HolidayPort>,
    country: CountryCode,
    cache: HashMap<i32, YearHolidaySet>,
}

impl fmt::Debug for HolidayResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayResolver")
            .field("country", &self.country)
            .field("cached_years", &self.cached_years())
            .finish_non_exhaustive()
    }
}

impl HolidayResolver {
    /// Create a resolver for Brazilian holidays backed by `source`
    pub fn new(source: Arc<dyn HolidayPort>) -> Self {
        Self {
            source,
            country: CountryCode::brazil(),
            cache: HashMap::new(),
        }
    }

    /// Holidays of `year`, fetched on first use and cached afterwards
    ///
    /// # Errors
    ///
    /// Returns the source's error if the fetch fails. Nothing is cached in
    /// that case.
    #[instrument(skip(self), fields(country = %self.country))]
    pub async fn holidays_for_year(
        &mut self,
        year: i32,
    ) -> Result<&YearHolidaySet, ApplicationError> {
        match self.cache.entry(year) {
            Entry::Occupied(entry) => {
                debug!("Holiday cache hit");
                Ok(entry.into_mut())
            },
            Entry::Vacant(entry) => {
                debug!("Holiday cache miss, fetching");
                let set = self.source.fetch_year(year, &self.country).await?;
                debug!(count = set.len(), "Cached holidays");
                Ok(entry.insert(set))
            },
        }
    }

    /// Holiday status of `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the holidays of the date's year could not be fetched.
    pub async fn resolve(&mut self, date: &CanonicalDate) -> Result<DayStatus, ApplicationError> {
        let holidays = self.holidays_for_year(date.year()).await?;

        Ok(holidays
            .find(date)
            .map_or(DayStatus::OrdinaryDay, |record| DayStatus::Holiday {
                name: record.name.clone(),
            }))
    }

    /// Cached years in ascending order
    pub fn cached_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.cache.keys().copied().collect();
        years.sort_unstable();
        years
    }
}
