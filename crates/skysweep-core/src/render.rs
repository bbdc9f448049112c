//! Sweep orchestrator: drives extraction, synthesis and mixing.

use crate::encode::{encode, EncodedStereo};
use crate::error::SweepResult;
use crate::extract::extract_slices;
use crate::image::SkyImage;
use crate::mixer::StereoMix;
use crate::params::SoundParams;
use crate::phase::slice_phases;
use crate::sweep::SweepDirection;
use crate::synth::synthesize_pair;

/// Observational progress sink: receives `(current_step, total_steps)` once
/// per slice processed.
pub trait ProgressSink {
    /// Reports progress. `current` is 1-based and ends at `total`.
    fn update(&mut self, current: usize, total: usize);
}

/// Progress sink that discards all updates.
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn update(&mut self, _current: usize, _total: usize) {}
}

/// Orchestrator stage. Transitions are linear; there is no branching back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// Not started.
    Idle,
    /// Extracting slices from the image.
    Extracting,
    /// Per-slice synthesis and accumulation.
    Synthesizing,
    /// Final mix consolidation.
    Mixing,
    /// Finished.
    Done,
}

/// The rendered stereo waveform plus the per-slice assignments that made it.
#[derive(Debug)]
pub struct RenderedSweep {
    /// Left channel (red band) samples.
    pub left: Vec<f64>,
    /// Right channel (blue band) samples.
    pub right: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Frequency assigned to each slice, in sweep order.
    pub frequencies: Vec<f64>,
    /// Number of slices swept.
    pub num_slices: usize,
}

impl RenderedSweep {
    /// Encodes the waveform for a fixed-width consumer.
    pub fn encode(&self, target_range: i32) -> SweepResult<EncodedStereo> {
        encode(&self.left, &self.right, target_range, self.sample_rate)
    }

    /// Waveform duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.left.len() as f64 / self.sample_rate as f64
    }
}

/// Assigns a distinct frequency to each of `num_slices` slices:
/// `f_i = freqMin + i·(freqMax − freqMin)/N`, reversed when `flip_freq`.
///
/// The assignment is a bijection from slice index to frequency, strictly
/// monotonic, spanning `[freqMin, freqMax)`.
pub fn band_frequencies(num_slices: usize, params: &SoundParams) -> Vec<f64> {
    let span = params.freq_max_hz - params.freq_min_hz;
    let mut freqs: Vec<f64> = (0..num_slices)
        .map(|i| params.freq_min_hz + i as f64 * span / num_slices as f64)
        .collect();
    if params.flip_freq {
        freqs.reverse();
    }
    freqs
}

/// Drives one synthesis run from image to mixed stereo waveform.
#[derive(Debug)]
pub struct SweepRenderer<'a> {
    image: &'a SkyImage,
    direction: SweepDirection,
    params: SoundParams,
    seed: u32,
    stage: RenderStage,
}

impl<'a> SweepRenderer<'a> {
    /// Creates a renderer. Nothing is validated until [`render`](Self::render).
    pub fn new(image: &'a SkyImage, direction: SweepDirection, params: SoundParams, seed: u32) -> Self {
        Self {
            image,
            direction,
            params,
            seed,
            stage: RenderStage::Idle,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> RenderStage {
        self.stage
    }

    /// Runs the pipeline to completion.
    ///
    /// The direction token's flip half is applied to the synthesizer's
    /// direction flip; frequency and phase are shared across the stereo
    /// channels of each slice. Synthesis is strictly sequential: the mixer
    /// accumulates into a shared buffer while slice order fixes the
    /// frequency and phase assignment.
    ///
    /// # Errors
    /// Fails fast on invalid parameters, a degenerate image, or any other
    /// `SweepError`; no partial result is produced.
    pub fn render(mut self, progress: &mut dyn ProgressSink) -> SweepResult<RenderedSweep> {
        self.params.validate()?;
        let (path, flip) = self.direction.geometry();
        let params = self.params.with_direction_flip(flip);

        self.stage = RenderStage::Extracting;
        let slices = extract_slices(self.image, path)?;
        let num_slices = slices.len();
        let frequencies = band_frequencies(num_slices, &params);
        let phases = slice_phases(num_slices, self.seed);

        self.stage = RenderStage::Synthesizing;
        let mut mix = StereoMix::new(params.num_output_samples());
        for (c, slice) in slices.iter().enumerate() {
            let (left, right) = synthesize_pair(slice, frequencies[c], phases[c], &params)?;
            mix.add(&left, &right)?;
            progress.update(c + 1, num_slices);
        }

        self.stage = RenderStage::Mixing;
        let (left, right) = mix.into_channels();

        self.stage = RenderStage::Done;
        Ok(RenderedSweep {
            left,
            right,
            sample_rate: params.sample_rate,
            frequencies,
            num_slices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Band;
    use crate::sweep::SweepDirection;
    use pretty_assertions::assert_eq;

    fn image_4x4() -> SkyImage {
        let red: Vec<f64> = (0..16).map(|i| (i % 5) as f64 + 1.0).collect();
        let blue: Vec<f64> = (0..16).map(|i| (i % 3) as f64 + 1.0).collect();
        SkyImage::new(
            Band::new(red, 4, 4).unwrap(),
            Band::new(blue, 4, 4).unwrap(),
        )
        .unwrap()
    }

    fn params_4k() -> SoundParams {
        SoundParams::new(8000, 0.5, 100.0, 200.0)
    }

    struct CountingProgress {
        updates: Vec<(usize, usize)>,
    }

    impl ProgressSink for CountingProgress {
        fn update(&mut self, current: usize, total: usize) {
            self.updates.push((current, total));
        }
    }

    #[test]
    fn test_band_frequencies_forward() {
        let freqs = band_frequencies(4, &params_4k());
        assert_eq!(freqs, vec![100.0, 125.0, 150.0, 175.0]);
    }

    #[test]
    fn test_band_frequencies_flipped_are_decreasing() {
        let mut params = params_4k();
        params.flip_freq = true;
        let freqs = band_frequencies(4, &params);
        assert_eq!(freqs, vec![175.0, 150.0, 125.0, 100.0]);
    }

    #[test]
    fn test_band_frequencies_strictly_monotonic_in_range() {
        let params = SoundParams::new(44100, 1.0, 30.0, 2000.0);
        let freqs = band_frequencies(500, &params);
        for pair in freqs.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(freqs[0], 30.0);
        assert!(*freqs.last().unwrap() < 2000.0);
    }

    #[test]
    fn test_end_to_end_linear_rows() {
        let image = image_4x4();
        let renderer = SweepRenderer::new(&image, SweepDirection::LeftRight, params_4k(), 42);
        let rendered = renderer.render(&mut NullProgress).unwrap();

        assert_eq!(rendered.left.len(), 4000);
        assert_eq!(rendered.right.len(), 4000);
        assert_eq!(rendered.num_slices, 4);
        assert_eq!(rendered.frequencies, vec![100.0, 125.0, 150.0, 175.0]);
    }

    #[test]
    fn test_reverse_direction_keeps_frequency_assignment() {
        let image = image_4x4();
        let forward = SweepRenderer::new(&image, SweepDirection::LeftRight, params_4k(), 42)
            .render(&mut NullProgress)
            .unwrap();
        let reverse = SweepRenderer::new(&image, SweepDirection::RightLeft, params_4k(), 42)
            .render(&mut NullProgress)
            .unwrap();

        assert_eq!(forward.frequencies, reverse.frequencies);
        // Same frequencies and phases, time-reversed envelopes: different sound.
        assert_ne!(forward.left, reverse.left);
    }

    #[test]
    fn test_reverse_direction_matches_flipped_synthesis() {
        // `rl` must equal an `lr` run whose synthesizer traverses each
        // resampled slice in reverse.
        let image = image_4x4();
        let seed = 7;
        let reverse = SweepRenderer::new(&image, SweepDirection::RightLeft, params_4k(), seed)
            .render(&mut NullProgress)
            .unwrap();

        let params = params_4k().with_direction_flip(true);
        let slices = extract_slices(&image, crate::sweep::SweepPath::LinearRows).unwrap();
        let freqs = band_frequencies(slices.len(), &params);
        let phases = slice_phases(slices.len(), seed);
        let mut mix = StereoMix::new(params.num_output_samples());
        for (c, slice) in slices.iter().enumerate() {
            let (l, r) = synthesize_pair(slice, freqs[c], phases[c], &params).unwrap();
            mix.add(&l, &r).unwrap();
        }
        let (left, right) = mix.into_channels();

        assert_eq!(reverse.left, left);
        assert_eq!(reverse.right, right);
    }

    #[test]
    fn test_single_bright_row_matches_direct_synthesis() {
        // With only one non-zero row, the mix is exactly that row's tone.
        let mut red = vec![0.0; 16];
        red[8..12].copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let blue = vec![0.0; 16];
        let image = SkyImage::new(
            Band::new(red, 4, 4).unwrap(),
            Band::new(blue, 4, 4).unwrap(),
        )
        .unwrap();

        let seed = 42;
        let rendered = SweepRenderer::new(&image, SweepDirection::LeftRight, params_4k(), seed)
            .render(&mut NullProgress)
            .unwrap();

        let freqs = band_frequencies(4, &params_4k());
        let phases = slice_phases(4, seed);
        let expected = crate::synth::synthesize_tone(
            &[1.0, 2.0, 3.0, 4.0],
            freqs[2],
            phases[2],
            &params_4k(),
        )
        .unwrap();

        assert_eq!(rendered.left, expected);
        assert!(rendered.right.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_progress_reported_per_slice() {
        let image = image_4x4();
        let mut progress = CountingProgress { updates: vec![] };
        SweepRenderer::new(&image, SweepDirection::TopBottom, params_4k(), 1)
            .render(&mut progress)
            .unwrap();
        assert_eq!(
            progress.updates,
            vec![(1, 4), (2, 4), (3, 4), (4, 4)]
        );
    }

    #[test]
    fn test_invalid_frequency_range_fails_fast() {
        let image = image_4x4();
        let params = SoundParams::new(8000, 0.5, 200.0, 200.0);
        let err = SweepRenderer::new(&image, SweepDirection::LeftRight, params, 0)
            .render(&mut NullProgress)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::SweepError::InvalidFrequencyRange { .. }
        ));
    }

    #[test]
    fn test_radial_too_small_fails() {
        // 4x4 gives ring count floor(4/2)-1 = 1, which is fine; 3x3 is not.
        let red = Band::new(vec![1.0; 9], 3, 3).unwrap();
        let blue = Band::new(vec![1.0; 9], 3, 3).unwrap();
        let small = SkyImage::new(red, blue).unwrap();
        let err = SweepRenderer::new(&small, SweepDirection::Clockwise, params_4k(), 0)
            .render(&mut NullProgress)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::SweepError::DegenerateImage { .. }
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let image = image_4x4();
        let a = SweepRenderer::new(&image, SweepDirection::Clockwise, params_4k(), 9)
            .render(&mut NullProgress)
            .unwrap();
        let b = SweepRenderer::new(&image, SweepDirection::Clockwise, params_4k(), 9)
            .render(&mut NullProgress)
            .unwrap();
        assert_eq!(a.left, b.left);
        assert_eq!(a.right, b.right);
    }

    #[test]
    fn test_encode_roundtrip_via_rendered_sweep() {
        let image = image_4x4();
        let rendered = SweepRenderer::new(&image, SweepDirection::LeftRight, params_4k(), 3)
            .render(&mut NullProgress)
            .unwrap();
        let encoded = rendered.encode(crate::encode::FILE_TARGET_RANGE).unwrap();
        assert_eq!(encoded.num_frames(), 4000);
        assert_eq!(encoded.sample_rate, 8000);
    }
}
