//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Nager.Date holiday
//! source and PDF text extraction. Also owns configuration loading and
//! logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, LoggingConfig, OutputConfig, OutputFormat};
pub use telemetry::{TelemetryError, init_tracing};
