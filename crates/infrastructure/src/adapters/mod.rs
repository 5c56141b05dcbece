//! Adapters implementing application ports

mod holiday_adapter;
mod pdf_text_adapter;

pub use holiday_adapter::HolidayAdapter;
pub use pdf_text_adapter::PdfTextAdapter;
