//! Tone synthesis: slice resampling and amplitude-modulated carriers.
//!
//! A slice becomes a tone in two steps. First the slice is stretched onto
//! the output time axis with piecewise-linear interpolation, giving the
//! amplitude envelope. Then the envelope modulates a sine carrier at the
//! slice's assigned frequency and phase.

use std::f64::consts::TAU;

use crate::error::{SweepError, SweepResult};
use crate::extract::SlicePair;
use crate::params::SoundParams;

/// Resamples a slice onto `sample_len` points over index domain `[0, M-1)`.
///
/// Position `k` evaluates the slice at `x = k·(M-1)/sample_len`, so the
/// first output sample reproduces `slice[0]` exactly. With `flip` set the
/// resampled axis is traversed in reverse, which reverses the sweep in time
/// without touching the frequency assignment.
///
/// # Errors
/// `DegenerateImage` when the slice has fewer than two samples.
pub fn resample(slice: &[f64], sample_len: usize, flip: bool) -> SweepResult<Vec<f64>> {
    let m = slice.len();
    if m < 2 {
        return Err(SweepError::degenerate(format!(
            "slice has {m} samples, need at least 2 to interpolate"
        )));
    }

    let span = (m - 1) as f64;
    let step = span / sample_len as f64;
    let mut out = Vec::with_capacity(sample_len);
    for k in 0..sample_len {
        let k = if flip { sample_len - 1 - k } else { k };
        out.push(interpolate(slice, k as f64 * step));
    }
    Ok(out)
}

/// Linear interpolation at fractional index `x` in `[0, M-1)`.
#[inline]
fn interpolate(slice: &[f64], x: f64) -> f64 {
    let mut idx = x.floor() as usize;
    if idx >= slice.len() - 1 {
        idx = slice.len() - 2;
    }
    let frac = x - idx as f64;
    slice[idx] + frac * (slice[idx + 1] - slice[idx])
}

/// Builds the amplitude envelope for one channel of a slice.
fn envelope(slice: &[f64], params: &SoundParams) -> SweepResult<Vec<f64>> {
    let mut env = resample(slice, params.num_output_samples(), params.flip_direction)?;
    if params.min_subtract {
        let min = env.iter().copied().fold(f64::INFINITY, f64::min);
        for v in env.iter_mut() {
            *v -= min;
        }
    }
    Ok(env)
}

/// Synthesizes one mono tone from a slice.
///
/// `sample_k = amp_k · sin(2π·freq·(t_k + phase))` with `t_k = k / rate`.
pub fn synthesize_tone(
    slice: &[f64],
    freq: f64,
    phase: f64,
    params: &SoundParams,
) -> SweepResult<Vec<f64>> {
    let mut env = envelope(slice, params)?;
    let rate = params.sample_rate as f64;
    for (k, amp) in env.iter_mut().enumerate() {
        let t = k as f64 / rate;
        *amp *= (TAU * freq * (t + phase)).sin();
    }
    Ok(env)
}

/// Synthesizes the stereo pair for one slice.
///
/// Both channels share the same carrier (one frequency, one phase); only the
/// amplitude envelopes differ. The carrier is evaluated once.
pub fn synthesize_pair(
    slice: &SlicePair,
    freq: f64,
    phase: f64,
    params: &SoundParams,
) -> SweepResult<(Vec<f64>, Vec<f64>)> {
    let mut left = envelope(&slice.left, params)?;
    let mut right = envelope(&slice.right, params)?;
    let rate = params.sample_rate as f64;
    for k in 0..left.len() {
        let t = k as f64 / rate;
        let carrier = (TAU * freq * (t + phase)).sin();
        left[k] *= carrier;
        right[k] *= carrier;
    }
    Ok((left, right))
}
