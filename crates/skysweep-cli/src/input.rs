//! Local-file image acquisition.
//!
//! Stands in for the survey-download collaborator: the red and blue bands
//! are read from grayscale image files, resampled to the requested pixel
//! size, and median-subtracted the way the survey tool prepares its data.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use skysweep_core::{AcquisitionRequest, Band, ImageSource, SkyImage, SweepError, SweepResult};

/// Acquires band data from local grayscale images.
#[derive(Debug)]
pub(crate) struct FileImageSource {
    red: PathBuf,
    blue: Option<PathBuf>,
    median_subtract: bool,
}

impl FileImageSource {
    /// Creates a source. When `blue` is `None` the red band feeds both
    /// stereo channels.
    pub fn new(red: PathBuf, blue: Option<PathBuf>, median_subtract: bool) -> Self {
        Self {
            red,
            blue,
            median_subtract,
        }
    }

    fn load_band(&self, path: &Path, pixels: u32) -> SweepResult<Band> {
        let dynamic = image::open(path).map_err(|e| {
            SweepError::acquisition(format!("cannot read '{}': {e}", path.display()))
        })?;
        let mut luma = dynamic.to_luma16();
        if pixels > 0 && (luma.width() != pixels || luma.height() != pixels) {
            luma = imageops::resize(&luma, pixels, pixels, FilterType::Triangle);
        }

        let (width, height) = (luma.width() as usize, luma.height() as usize);
        let mut data: Vec<f64> = luma.into_raw().into_iter().map(f64::from).collect();
        if self.median_subtract {
            median_subtract(&mut data);
        }
        Band::new(data, height, width)
    }
}

impl ImageSource for FileImageSource {
    fn acquire(&self, request: &AcquisitionRequest) -> SweepResult<SkyImage> {
        let red = self.load_band(&self.red, request.pixels)?;
        let blue = match &self.blue {
            Some(path) => self.load_band(path, request.pixels)?,
            None => red.clone(),
        };
        SkyImage::new(red, blue)
    }
}

/// Subtracts the median and clamps at zero, flattening the sky background.
fn median_subtract(data: &mut [f64]) {
    if data.is_empty() {
        return;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };
    for v in data.iter_mut() {
        *v = (*v - median).max(0.0);
    }
}
