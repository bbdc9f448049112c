//! Error types for the synthesis core.

use thiserror::Error;

/// Result type for sweep synthesis operations.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors that can occur while sonifying a sky image.
///
/// Every variant is fatal to the current run: the core performs no retries
/// and produces no partial output after a failure.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The low frequency limit is not strictly below the high limit.
    #[error("invalid frequency range: low {low} Hz must be below high {high} Hz")]
    InvalidFrequencyRange {
        /// Low frequency limit in Hz.
        low: f64,
        /// High frequency limit in Hz.
        high: f64,
    },

    /// Unrecognized sweep direction token.
    #[error("unknown sweep direction: '{token}' (expected lr, rl, tb, bt, clk or aclk)")]
    UnknownSweepDirection {
        /// The offending token.
        token: String,
    },

    /// The image is too small for the requested sweep geometry.
    #[error("degenerate image: {message}")]
    DegenerateImage {
        /// Why the image cannot be swept.
        message: String,
    },

    /// Both channels were all-zero at normalization time.
    #[error("silent signal: peak amplitude is zero, nothing to normalize")]
    SilentSignal,

    /// Invalid synthesis parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The image acquisition collaborator failed.
    #[error("image acquisition failed: {message}")]
    Acquisition {
        /// Error message from the collaborator.
        message: String,
    },

    /// An output collaborator (file, device, renderer) failed.
    #[error("encoding failed: {message}")]
    Encoding {
        /// Error message from the collaborator.
        message: String,
    },
}

impl SweepError {
    /// Creates a degenerate-image error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateImage {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an acquisition error.
    pub fn acquisition(message: impl Into<String>) -> Self {
        Self::Acquisition {
            message: message.into(),
        }
    }

    /// Creates an encoding error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }
}
