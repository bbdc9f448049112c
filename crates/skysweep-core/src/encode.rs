//! Normalization and fixed-width encoding of the mixed waveform.

use crate::error::{SweepError, SweepResult};

/// Full signed 16-bit range for file output.
pub const FILE_TARGET_RANGE: i32 = 1 << 15;

/// Reduced range for live playback, leaving device headroom.
pub const PLAYBACK_TARGET_RANGE: i32 = 1 << 14;

/// An encoded stereo sample stream.
#[derive(Debug, Clone)]
pub struct EncodedStereo {
    /// Interleaved samples, left first.
    pub samples: Vec<i16>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl EncodedStereo {
    /// Number of sample frames (pairs).
    pub fn num_frames(&self) -> usize {
        self.samples.len() / 2
    }
}

/// Rescales a stereo float waveform into interleaved signed 16-bit samples.
///
/// The peak absolute value over both channels maps to `target_range - 1`, so
/// the output never leaves the signed 16-bit range while a non-silent input
/// always uses the full range available to it.
///
/// # Errors
/// `SilentSignal` when the peak is zero: a silent input cannot be scaled.
pub fn encode(left: &[f64], right: &[f64], target_range: i32, sample_rate: u32) -> SweepResult<EncodedStereo> {
    let peak = left
        .iter()
        .chain(right.iter())
        .map(|s| s.abs())
        .fold(0.0_f64, f64::max);
    if peak == 0.0 {
        return Err(SweepError::SilentSignal);
    }

    let scale = (target_range - 1) as f64 / peak;
    let frames = left.len().min(right.len());
    let mut samples = Vec::with_capacity(frames * 2);
    for i in 0..frames {
        samples.push((scale * left[i]).round() as i16);
        samples.push((scale * right[i]).round() as i16);
    }
    Ok(EncodedStereo {
        samples,
        sample_rate,
    })
}
