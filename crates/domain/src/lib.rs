//! Domain layer for the holiday checker
//!
//! Contains the date and holiday vocabulary shared by every other crate:
//! raw date tokens, canonical dates, holiday records and per-year holiday sets.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
