//! Error types for the export pipeline.

use thiserror::Error;

/// Errors that can occur while capturing and encoding a visual surface.
///
/// Export failures surface as values, never panics; a failed export leaves
/// the surrounding session usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The surface could not be rendered into a pixel buffer.
    #[error("rasterization failed: {0}")]
    Rasterize(String),

    /// The pixel buffer could not be encoded into the target format.
    #[error("image encoding failed: {0}")]
    Encode(String),

    /// The capture task itself failed to run to completion.
    #[error("capture task failed: {0}")]
    Capture(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
