//! Holiday status of a single date

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of checking one date against the holiday calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DayStatus {
    /// The date is a public holiday
    Holiday {
        /// Name of the holiday
        name: String,
    },
    /// The date is not a public holiday (or the lookup failed)
    OrdinaryDay,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Holiday { name } => write!(f, "Holiday ({name})"),
            Self::OrdinaryDay => f.write_str("Ordinary day"),
        }
    }
}
