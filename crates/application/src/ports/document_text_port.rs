//! Document text port
//!
//! Defines the interface for turning a document on disk into plain text.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for document text extraction
///
/// Implementations return the text of all pages concatenated; page
/// boundaries are not preserved.
#[cfg_attr(test, automock)]
pub trait DocumentTextPort: Send + Sync {
    /// Extract the full text of the document at `path`
    fn extract_text(&self, path: &Path) -> Result<String, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DocumentTextPort>();
    }
}
