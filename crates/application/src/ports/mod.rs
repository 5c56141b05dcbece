//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod document_text_port;
mod holiday_port;

#[cfg(test)]
pub use document_text_port::MockDocumentTextPort;
pub use document_text_port::DocumentTextPort;
#[cfg(test)]
pub use holiday_port::MockHolidayPort;
pub use holiday_port::HolidayPort;
