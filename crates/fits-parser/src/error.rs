//! Error types for FITS decoding.

use sky_common::ViewerError;
use thiserror::Error;

/// Result type for FITS parser operations.
pub type FitsResult<T> = Result<T, FitsError>;

/// Error types for FITS decoding.
#[derive(Error, Debug)]
pub enum FitsError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with a SIMPLE card
    #[error("not a FITS file: {0}")]
    NotFits(String),

    /// Malformed header card or missing END
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// A mandatory keyword is absent
    #[error("missing keyword {0}")]
    MissingKeyword(&'static str),

    #[error("unsupported BITPIX {0}")]
    UnsupportedBitpix(i64),

    /// The data unit is shorter than the header announces
    #[error("truncated data: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    /// The primary array is not a usable 2-D image
    #[error("{0}")]
    NotAnImage(String),
}

impl From<FitsError> for ViewerError {
    fn from(err: FitsError) -> Self {
        match err {
            FitsError::NotAnImage(msg) => ViewerError::InvalidImage(msg),
            FitsError::Io(e) => ViewerError::Io(e.to_string()),
            other => ViewerError::DecodeError(other.to_string()),
        }
    }
}
