//! Live playback of the rendered sound through the default output device.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use skysweep_core::EncodedStereo;

/// Plays the encoded stereo stream, blocking until it has finished.
///
/// The caller is expected to pass the playback-range encoding
/// (`PLAYBACK_TARGET_RANGE`), which leaves headroom against device
/// clipping.
pub(crate) fn play(encoded: &EncodedStereo) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow!("no audio output device available"))?;

    let config = cpal::StreamConfig {
        channels: 2,
        sample_rate: cpal::SampleRate(encoded.sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let samples: Vec<f32> = encoded
        .samples
        .iter()
        .map(|&s| s as f32 / i16::MAX as f32)
        .collect();
    let total = samples.len();
    let mut position = 0usize;

    let stream = device
        .build_output_stream(
            &config,
            move |out: &mut [f32], _| {
                for slot in out.iter_mut() {
                    *slot = if position < samples.len() {
                        let v = samples[position];
                        position += 1;
                        v
                    } else {
                        0.0
                    };
                }
            },
            |err| eprintln!("playback stream error: {err}"),
            None,
        )
        .context("cannot open audio output stream")?;
    stream.play().context("cannot start playback")?;

    let seconds = total as f64 / 2.0 / encoded.sample_rate as f64;
    std::thread::sleep(Duration::from_secs_f64(seconds) + Duration::from_millis(250));
    Ok(())
}
