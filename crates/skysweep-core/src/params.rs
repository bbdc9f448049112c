//! Immutable synthesis parameters.
//!
//! A plain value passed by reference to every synthesis call; the
//! orchestrator derives per-run variants instead of mutating shared state.

use crate::error::{SweepError, SweepResult};

/// Configuration for one synthesis run.
#[derive(Debug, Clone)]
pub struct SoundParams {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Total sound duration in seconds.
    pub duration_seconds: f64,
    /// Low frequency limit in Hz (inclusive).
    pub freq_min_hz: f64,
    /// High frequency limit in Hz (exclusive).
    pub freq_max_hz: f64,
    /// Reverse the slice-index-to-frequency order.
    pub flip_freq: bool,
    /// Traverse each resampled slice in reverse (audibly reverses the sweep).
    pub flip_direction: bool,
    /// Subtract the per-channel envelope minimum from each slice.
    pub min_subtract: bool,
}

impl SoundParams {
    /// Creates parameters with the flip and subtraction knobs off.
    pub fn new(sample_rate: u32, duration_seconds: f64, freq_min_hz: f64, freq_max_hz: f64) -> Self {
        Self {
            sample_rate,
            duration_seconds,
            freq_min_hz,
            freq_max_hz,
            flip_freq: false,
            flip_direction: false,
            min_subtract: false,
        }
    }

    /// Returns a copy with the direction flip set.
    ///
    /// The sweep orchestrator uses this to apply the flip half of the
    /// direction token without mutating caller-owned configuration.
    pub fn with_direction_flip(&self, flip: bool) -> Self {
        Self {
            flip_direction: flip,
            ..self.clone()
        }
    }

    /// Number of output samples per channel: `round(sample_rate × duration)`.
    pub fn num_output_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }

    /// Checks the parameter invariants.
    ///
    /// # Errors
    /// `InvalidFrequencyRange` when `freq_min_hz >= freq_max_hz`;
    /// `InvalidParameter` for a zero sample rate or non-positive duration.
    pub fn validate(&self) -> SweepResult<()> {
        if self.sample_rate == 0 {
            return Err(SweepError::invalid_param(
                "sample_rate",
                "must be greater than zero",
            ));
        }
        if !(self.duration_seconds > 0.0) {
            return Err(SweepError::invalid_param(
                "duration_seconds",
                format!("must be positive, got {}", self.duration_seconds),
            ));
        }
        if self.freq_min_hz >= self.freq_max_hz {
            return Err(SweepError::InvalidFrequencyRange {
                low: self.freq_min_hz,
                high: self.freq_max_hz,
            });
        }
        Ok(())
    }
}
