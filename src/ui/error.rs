//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal setup, drawing, or event polling failed
    #[error("Terminal error: {0}")]
    TerminalError(#[from] std::io::Error),

    /// The system opener could not launch a viewer for a URI
    #[error("Failed to open {uri}: {source}")]
    OpenError {
        uri: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
