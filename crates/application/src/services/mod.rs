//! Application services
//!
//! Business logic orchestration layer that coordinates domain entities
//! and port interactions.

mod holiday_check_service;
mod holiday_resolver;

pub use holiday_check_service::{DateCheck, HolidayCheckService, HolidayReport, LookupFailure, MatchedHoliday};
pub use holiday_resolver::HolidayResolver;
