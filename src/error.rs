//! Error types for evap-plots.
//!
//! A single error enum covers every way a rendering call can fail: malformed
//! input dimensions, a missing variable column, drawing backend failures and
//! an unwritable output path.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// The main error type for evap-plots operations.
#[derive(Error, Debug)]
pub enum PlotError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// An input sequence does not have the fixed length the figure layout expects
    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// The requested variable column is absent from a seasonal record
    #[error("Variable '{variable}' not found in {season} data")]
    MissingVariable { season: String, variable: String },

    /// Drawing backend errors
    #[error("Drawing error: {message}")]
    Drawing { message: String },

    /// Image encoding errors (includes failures writing the output file)
    #[error("Image encoding error: {0}")]
    ImageEncoding(#[from] image::ImageError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlotError {
    pub(crate) fn dimension(what: &str, expected: usize, actual: usize) -> Self {
        PlotError::DimensionMismatch {
            what: what.to_string(),
            expected,
            actual,
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for PlotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        PlotError::Drawing {
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for Results with PlotError
pub type Result<T> = std::result::Result<T, PlotError>;
