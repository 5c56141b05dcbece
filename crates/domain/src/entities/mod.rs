//! Domain entities - Holiday data and per-date outcomes

mod day_status;
mod holiday_record;
mod year_holiday_set;

pub use day_status::DayStatus;
pub use holiday_record::HolidayRecord;
pub use year_holiday_set::YearHolidaySet;
