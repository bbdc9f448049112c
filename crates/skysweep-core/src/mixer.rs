//! Additive mixer: elementwise summation of per-slice waveforms.

use crate::error::{SweepError, SweepResult};

/// Accumulating stereo mix of fixed length.
///
/// No normalization happens here; sums may exceed unit range and are scaled
/// by the encoder afterwards.
#[derive(Debug)]
pub struct StereoMix {
    left: Vec<f64>,
    right: Vec<f64>,
}

impl StereoMix {
    /// Creates a silent mix of `num_samples` per channel.
    pub fn new(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Whether the mix holds no samples.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Adds one slice waveform pair into the mix.
    ///
    /// # Errors
    /// `InvalidParameter` when the waveform length differs from the mix
    /// length; the tone synthesizer guarantees equal lengths, so hitting
    /// this indicates a caller bug.
    pub fn add(&mut self, left: &[f64], right: &[f64]) -> SweepResult<()> {
        if left.len() != self.left.len() || right.len() != self.right.len() {
            return Err(SweepError::invalid_param(
                "waveform",
                format!(
                    "length {}/{} does not match mix length {}",
                    left.len(),
                    right.len(),
                    self.left.len()
                ),
            ));
        }
        for (acc, s) in self.left.iter_mut().zip(left) {
            *acc += s;
        }
        for (acc, s) in self.right.iter_mut().zip(right) {
            *acc += s;
        }
        Ok(())
    }

    /// Left channel samples.
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// Right channel samples.
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// Consumes the mix, returning `(left, right)`.
    pub fn into_channels(self) -> (Vec<f64>, Vec<f64>) {
        (self.left, self.right)
    }
}
