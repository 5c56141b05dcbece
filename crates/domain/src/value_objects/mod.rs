//! Value Objects - Immutable, identity-less domain primitives

mod canonical_date;
mod country_code;
mod raw_date_token;

pub use canonical_date::{CanonicalDate, INPUT_FORMATS};
pub use country_code::CountryCode;
pub use raw_date_token::RawDateToken;
