//! Public holiday integration
//!
//! Client for the [Nager.Date](https://date.nager.at) public holiday API.
//! The API is free, keyless, and returns every public holiday of a country
//! for a given year in a single request.
//!
//! # Architecture
//!
//! [`HolidayClient`] defines the interface, implemented by [`NagerDateClient`].
//! Responses are converted into domain [`YearHolidaySet`](domain::YearHolidaySet)s
//! so callers never see the wire format.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::CountryCode;
//! use integration_holidays::{HolidayClient, HolidayConfig, NagerDateClient};
//!
//! let client = NagerDateClient::new(&HolidayConfig::default())?;
//! let holidays = client.public_holidays(2025, &CountryCode::brazil()).await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{HolidayClient, NagerDateClient};
pub use config::HolidayConfig;
pub use error::HolidayError;
pub use models::NagerHoliday;
