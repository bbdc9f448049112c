//! Skysweep synthesis core
//!
//! Converts a two-band sky image (red/blue survey data) into a stereo
//! waveform by scanning the image along a sweep path and mapping each
//! cross-section to an amplitude-modulated tone. The red band drives the
//! left channel, the blue band the right.
//!
//! # Pipeline
//!
//! image pair → slice extraction → per-slice tone synthesis → additive
//! mixing → normalization/encoding. Three sweep geometries are supported
//! (rows, columns, concentric rings), each forward or reversed.
//!
//! # Determinism
//!
//! Per-slice phases are the only randomness. They come from a PCG32 seeded
//! once per run (optionally derived from the object name via BLAKE3), so
//! the same image, parameters and seed always produce the same waveform.
//!
//! # Example
//!
//! ```
//! use skysweep_core::{
//!     Band, NullProgress, SkyImage, SoundParams, SweepDirection, SweepRenderer,
//!     FILE_TARGET_RANGE,
//! };
//!
//! # fn main() -> Result<(), skysweep_core::SweepError> {
//! let red = Band::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2)?;
//! let blue = Band::new(vec![4.0, 3.0, 2.0, 1.0], 2, 2)?;
//! let image = SkyImage::new(red, blue)?;
//!
//! let params = SoundParams::new(8000, 0.25, 100.0, 200.0);
//! let rendered = SweepRenderer::new(&image, SweepDirection::LeftRight, params, 42)
//!     .render(&mut NullProgress)?;
//! let encoded = rendered.encode(FILE_TARGET_RANGE)?;
//! assert_eq!(encoded.num_frames(), 2000);
//! # Ok(())
//! # }
//! ```
//!
//! # Crate structure
//!
//! - [`image`] - two-band image data and the acquisition interface
//! - [`sweep`] - sweep geometries and direction tokens
//! - [`extract`] - row/column/ring slice extraction
//! - [`synth`] - slice resampling and tone synthesis
//! - [`mixer`] - additive mixing
//! - [`encode`] - normalization to 16-bit samples
//! - [`render`] - the sweep orchestrator
//! - [`phase`] - deterministic per-slice phase generation

pub mod encode;
pub mod error;
pub mod extract;
pub mod image;
pub mod mixer;
pub mod params;
pub mod phase;
pub mod render;
pub mod sweep;
pub mod synth;

// Re-export main types at crate root
pub use encode::{EncodedStereo, FILE_TARGET_RANGE, PLAYBACK_TARGET_RANGE};
pub use error::{SweepError, SweepResult};
pub use extract::SlicePair;
pub use image::{AcquisitionRequest, Band, ImageSource, SkyImage};
pub use params::SoundParams;
pub use phase::derive_seed;
pub use render::{NullProgress, ProgressSink, RenderStage, RenderedSweep, SweepRenderer};
pub use sweep::{SweepDirection, SweepPath};

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn gradient_image(size: usize) -> SkyImage {
        let red: Vec<f64> = (0..size * size).map(|i| (i / size) as f64).collect();
        let blue: Vec<f64> = (0..size * size).map(|i| (i % size) as f64).collect();
        SkyImage::new(
            Band::new(red, size, size).unwrap(),
            Band::new(blue, size, size).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_all_directions_render() {
        let image = gradient_image(10);
        let params = SoundParams::new(8000, 0.1, 100.0, 400.0);
        for direction in SweepDirection::ALL {
            let rendered = SweepRenderer::new(&image, direction, params.clone(), 5)
                .render(&mut NullProgress)
                .unwrap();
            assert_eq!(rendered.left.len(), 800, "direction {direction}");
            assert_eq!(rendered.right.len(), 800, "direction {direction}");
        }
    }

    #[test]
    fn test_file_and_playback_encodings_differ_in_ceiling() {
        let image = gradient_image(8);
        let params = SoundParams::new(8000, 0.1, 100.0, 400.0);
        let rendered = SweepRenderer::new(&image, SweepDirection::LeftRight, params, 1)
            .render(&mut NullProgress)
            .unwrap();

        let file = rendered.encode(FILE_TARGET_RANGE).unwrap();
        let play = rendered.encode(PLAYBACK_TARGET_RANGE).unwrap();
        let file_peak = file.samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
        let play_peak = play.samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert_eq!(file_peak as i32, FILE_TARGET_RANGE - 1);
        assert_eq!(play_peak as i32, PLAYBACK_TARGET_RANGE - 1);
    }

    #[test]
    fn test_silent_image_fails_at_encoding() {
        let zeros = vec![0.0; 16];
        let image = SkyImage::new(
            Band::new(zeros.clone(), 4, 4).unwrap(),
            Band::new(zeros, 4, 4).unwrap(),
        )
        .unwrap();
        let params = SoundParams::new(8000, 0.1, 100.0, 400.0);
        let rendered = SweepRenderer::new(&image, SweepDirection::LeftRight, params, 1)
            .render(&mut NullProgress)
            .unwrap();
        assert!(matches!(
            rendered.encode(FILE_TARGET_RANGE),
            Err(SweepError::SilentSignal)
        ));
    }
}
