//! Holiday record entity

use serde::{Deserialize, Serialize};

use crate::value_objects::CanonicalDate;

/// One public holiday: a date and its human-readable name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// Date of the holiday
    pub date: CanonicalDate,
    /// Holiday name as reported by the holiday source
    pub name: String,
    /// Name in the region's own language, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
}

impl HolidayRecord {
    /// Create a record without a local name
    pub fn new(date: CanonicalDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            local_name: None,
        }
    }

    /// Attach the local-language name
    #[must_use]
    pub fn with_local_name(mut self, local_name: impl Into<String>) -> Self {
        self.local_name = Some(local_name.into());
        self
    }
}
