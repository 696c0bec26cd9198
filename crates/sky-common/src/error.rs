//! Error types for skyspotter.

use thiserror::Error;

/// Result type alias using ViewerError.
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Primary error type for viewer operations.
#[derive(Debug, Error)]
pub enum ViewerError {
    // === Image Errors ===
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Failed to decode FITS data: {0}")]
    DecodeError(String),

    #[error("Unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("No image loaded")]
    NoImageLoaded,

    // === Rendering Errors ===
    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),

    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Survey Errors ===
    #[error("Unknown survey: {0}")]
    UnknownSurvey(String),

    #[error("Remote lookup failed: {0}")]
    RemoteLookup(String),

    // === Infrastructure Errors ===
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl ViewerError {
    /// Heading shown to the user when this error is surfaced as a notification.
    pub fn notification_title(&self) -> &'static str {
        match self {
            ViewerError::InvalidImage(_)
            | ViewerError::DecodeError(_)
            | ViewerError::UnsupportedFile(_) => "Cannot open image",
            ViewerError::NoImageLoaded => "Nothing to display",
            ViewerError::UnknownColormap(_) => "Unknown colormap",
            ViewerError::RenderError(_) => "Rendering failed",
            ViewerError::UnknownSurvey(_) | ViewerError::RemoteLookup(_) => "Image search failed",
            ViewerError::ConfigError(_) => "Configuration error",
            ViewerError::Io(_) => "I/O error",
        }
    }

    /// Whether the error came from the remote image-search collaborator.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ViewerError::RemoteLookup(_) | ViewerError::UnknownSurvey(_)
        )
    }
}

// Conversion from common error types
impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::RenderError(format!("JSON error: {}", err))
    }
}
