//! Holidays of one calendar year for one region

use serde::{Deserialize, Serialize};

use crate::entities::HolidayRecord;
use crate::value_objects::{CanonicalDate, CountryCode};

/// All public holidays for a (year, region) pair
///
/// # Examples
///
/// ```
/// use domain::{CanonicalDate, CountryCode, HolidayRecord, YearHolidaySet};
///
/// let christmas = CanonicalDate::parse_iso("2025-12-25").unwrap();
/// let set = YearHolidaySet::new(
///     2025,
///     CountryCode::brazil(),
///     vec![HolidayRecord::new(christmas, "Natal")],
/// );
///
/// assert_eq!(set.find(&christmas).map(|h| h.name.as_str()), Some("Natal"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearHolidaySet {
    year: i32,
    country: CountryCode,
    records: Vec<HolidayRecord>,
}

impl YearHolidaySet {
    /// Create a set from the records returned for `year` and `country`
    pub fn new(year: i32, country: CountryCode, records: Vec<HolidayRecord>) -> Self {
        Self {
            year,
            country,
            records,
        }
    }

    /// Calendar year covered by this set
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Region covered by this set
    pub const fn country(&self) -> &CountryCode {
        &self.country
    }

    /// First record whose date equals `date`, scanning in source order
    pub fn find(&self, date: &CanonicalDate) -> Option<&HolidayRecord> {
        self.records.iter().find(|record| record.date == *date)
    }

    /// All records in source order
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CanonicalDate {
        CanonicalDate::parse_iso(s).unwrap()
    }

    fn sample() -> YearHolidaySet {
        YearHolidaySet::new(
            2025,
            CountryCode::brazil(),
            vec![
                HolidayRecord::new(date("2025-01-01"), "Confraternização Universal"),
                HolidayRecord::new(date("2025-04-21"), "Tiradentes"),
                HolidayRecord::new(date("2025-12-25"), "Natal"),
            ],
        )
    }

    #[test]
    fn finds_matching_record() {
        let set = sample();
        let found = set.find(&date("2025-04-21")).unwrap();
        assert_eq!(found.name, "Tiradentes");
    }

    #[test]
    fn ordinary_day_is_not_found() {
        let set = sample();
        assert!(set.find(&date("2025-04-22")).is_none());
    }

    #[test]
    fn first_record_wins_on_duplicate_dates() {
        let set = YearHolidaySet::new(
            2025,
            CountryCode::brazil(),
            vec![
                HolidayRecord::new(date("2025-11-20"), "Dia da Consciência Negra"),
                HolidayRecord::new(date("2025-11-20"), "Zumbi dos Palmares"),
            ],
        );
        assert_eq!(
            set.find(&date("2025-11-20")).unwrap().name,
            "Dia da Consciência Negra"
        );
    }

    #[test]
    fn empty_set_has_no_holidays() {
        let set = YearHolidaySet::new(2025, CountryCode::brazil(), Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(set.find(&date("2025-12-25")).is_none());
    }

    #[test]
    fn exposes_year_and_country() {
        let set = sample();
        assert_eq!(set.year(), 2025);
        assert_eq!(set.country().as_str(), "BR");
        assert_eq!(set.len(), 3);
    }
}
