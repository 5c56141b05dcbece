//! PDF text adapter - Implements DocumentTextPort using pdf-extract

use std::path::Path;

use application::error::ApplicationError;
use application::ports::DocumentTextPort;
use tracing::{debug, instrument};

/// Extracts the text of every page of a PDF, concatenated
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextAdapter;

impl PdfTextAdapter {
    /// Create a new adapter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentTextPort for PdfTextAdapter {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn extract_text(&self, path: &Path) -> Result<String, ApplicationError> {
        let bytes = std::fs::read(path).map_err(|e| {
            ApplicationError::Document(format!("Failed to read {}: {e}", path.display()))
        })?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ApplicationError::Document(format!("Failed to extract PDF text: {e}"))
        })?;

        debug!(bytes = bytes.len(), chars = text.len(), "Extracted PDF text");
        Ok(text)
    }
}
