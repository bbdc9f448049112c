//! Error types for picture and movie rendering.

use skysweep_core::SweepError;
use thiserror::Error;

/// Errors from visualization output.
#[derive(Debug, Error)]
pub enum VizError {
    /// I/O error writing an output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] png::EncodingError),

    /// GIF encoding error.
    #[error("GIF encoding error: {0}")]
    Gif(#[from] gif::EncodingError),

    /// The underlying sweep geometry is invalid for this image.
    #[error(transparent)]
    Sweep(#[from] SweepError),
}
