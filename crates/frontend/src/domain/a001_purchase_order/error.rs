use crate::shared::api_utils::ApiError;
use thiserror::Error;

/// Why a purchase order could not be exported
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    #[error("No data found for PO {0}")]
    NotFound(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Malformed purchase order data: {0}")]
    Malformed(String),

    #[error("PDF rendering failed: {0}")]
    Render(String),

    #[error("Download failed: {0}")]
    Download(String),
}

impl ExportError {
    /// Text for the user. Only a missing record gets its own wording.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExportError::NotFound(_) => "No data found for this PO.",
            _ => "Error generating PDF from PO data.",
        }
    }
}
