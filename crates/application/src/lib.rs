//! Application layer - Use cases and orchestration
//!
//! Contains date extraction, the holiday resolver with its per-year cache,
//! and the port definitions that infrastructure adapters implement.

pub mod date_extractor;
pub mod error;
pub mod ports;
pub mod services;

pub use date_extractor::{DATE_PATTERNS, DateExtractor};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
