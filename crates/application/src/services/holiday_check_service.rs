//! Holiday check service
//!
//! Runs the full pipeline for one request: document text → date tokens →
//! canonical dates → holiday status, and collects the outcome in a
//! [`HolidayReport`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use domain::{CanonicalDate, DayStatus, RawDateToken};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::date_extractor::DateExtractor;
use crate::error::ApplicationError;
use crate::ports::DocumentTextPort;
use crate::services::HolidayResolver;

/// Outcome of checking one raw token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateCheck {
    /// Token as found in the text
    pub raw: RawDateToken,
    /// Normalized date, absent when the token is not a real date
    pub canonical: Option<CanonicalDate>,
    /// Holiday status, absent when the token was not checked
    pub status: Option<DayStatus>,
}

/// A token that turned out to be a public holiday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedHoliday {
    /// Token as found in the text
    pub raw: RawDateToken,
    /// Normalized date
    pub date: CanonicalDate,
    /// Holiday name
    pub name: String,
}

/// A holiday lookup that failed during the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupFailure {
    /// Date whose lookup failed
    pub date: CanonicalDate,
    /// Error message
    pub message: String,
}

/// Everything one processing request found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayReport {
    raw_dates: Vec<RawDateToken>,
    entries: Vec<DateCheck>,
    holidays: Vec<MatchedHoliday>,
    lookup_errors: Vec<LookupFailure>,
}

impl HolidayReport {
    /// Number of unique date tokens found
    pub fn total_dates(&self) -> usize {
        self.raw_dates.len()
    }

    /// Number of tokens that are public holidays
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Whether any date token was found
    pub fn has_dates(&self) -> bool {
        !self.raw_dates.is_empty()
    }

    /// Every unique token, including those that are not real dates
    pub fn raw_dates(&self) -> &[RawDateToken] {
        &self.raw_dates
    }

    /// Per-token results
    pub fn entries(&self) -> &[DateCheck] {
        &self.entries
    }

    /// Tokens that are public holidays
    pub fn holidays(&self) -> &[MatchedHoliday] {
        &self.holidays
    }

    /// Lookup failures surfaced while checking
    pub fn lookup_errors(&self) -> &[LookupFailure] {
        &self.lookup_errors
    }

    fn push(&mut self, check: DateCheck) {
        if let (Some(date), Some(DayStatus::Holiday { name })) = (check.canonical, &check.status) {
            self.holidays.push(MatchedHoliday {
                raw: check.raw.clone(),
                date,
                name: name.clone(),
            });
        }
        self.entries.push(check);
    }
}

/// Orchestrates text extraction, date extraction and holiday resolution
pub struct HolidayCheckService {
    documents: Arc<dyn DocumentTextPort>,
    extractor: DateExtractor,
    resolver: HolidayResolver,
}

impl fmt::Debug for HolidayCheckService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayCheckService")
            .field("extractor", &self.extractor)
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl HolidayCheckService {
    /// Create a service from a document source and a holiday resolver
    pub fn new(documents: Arc<dyn DocumentTextPort>, resolver: HolidayResolver) -> Self {
        Self {
            documents,
            extractor: DateExtractor::new(),
            resolver,
        }
    }

    /// Access the resolver, e.g. to list a year's holidays
    pub fn resolver_mut(&mut self) -> &mut HolidayResolver {
        &mut self.resolver
    }

    /// Check every date in the document at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the document text cannot be extracted. Holiday
    /// lookup failures do not fail the request; they are recorded in the report.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn check_document(&mut self, path: &Path) -> Result<HolidayReport, ApplicationError> {
        let text = self.documents.extract_text(path)?;
        info!(chars = text.len(), "Extracted document text");
        Ok(self.check_text(&text).await)
    }

    /// Check every date in `text`
    pub async fn check_text(&mut self, text: &str) -> HolidayReport {
        let tokens = self.extractor.extract(text);
        let mut report = HolidayReport {
            raw_dates: tokens.iter().cloned().collect(),
            ..HolidayReport::default()
        };

        for raw in tokens {
            let canonical = match self.extractor.normalize(&raw) {
                Ok(date) => date,
                Err(e) => {
                    debug!(token = %raw, error = %e, "Skipping token");
                    report.push(DateCheck {
                        raw,
                        canonical: None,
                        status: None,
                    });
                    continue;
                },
            };

            let status = match self.resolver.resolve(&canonical).await {
                Ok(status) => status,
                Err(e) => {
                    warn!(date = %canonical, error = %e, "Holiday lookup failed");
                    report.lookup_errors.push(LookupFailure {
                        date: canonical,
                        message: e.to_string(),
                    });
                    DayStatus::OrdinaryDay
                },
            };

            report.push(DateCheck {
                raw,
                canonical: Some(canonical),
                status: Some(status),
            });
        }

        info!(
            dates = report.total_dates(),
            holidays = report.holiday_count(),
            errors = report.lookup_errors.len(),
            "Holiday check finished"
        );
        report
    }
}
