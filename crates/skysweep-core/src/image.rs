//! Two-band sky image data and the acquisition collaborator interface.

use crate::error::{SweepError, SweepResult};

/// A single survey band as a row-major 2D intensity grid.
#[derive(Debug, Clone)]
pub struct Band {
    data: Vec<f64>,
    height: usize,
    width: usize,
}

impl Band {
    /// Creates a band from row-major data.
    ///
    /// # Errors
    /// Returns `DegenerateImage` if the data length does not match the
    /// dimensions or either dimension is below 2.
    pub fn new(data: Vec<f64>, height: usize, width: usize) -> SweepResult<Self> {
        if height < 2 || width < 2 {
            return Err(SweepError::degenerate(format!(
                "band is {height}x{width}, need at least 2x2"
            )));
        }
        if data.len() != height * width {
            return Err(SweepError::degenerate(format!(
                "band data has {} values, expected {}x{} = {}",
                data.len(),
                height,
                width,
                height * width
            )));
        }
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Image height (number of rows).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width (number of columns).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Intensity at `(row, col)`. Panics if out of range, like slice indexing.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.width + col]
    }

    /// Checked intensity lookup.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    /// Row `r` as a contiguous slice.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.width..(r + 1) * self.width]
    }

    /// Column `c` collected into a vector.
    pub fn column(&self, c: usize) -> Vec<f64> {
        (0..self.height).map(|r| self.at(r, c)).collect()
    }

    /// Raw row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Minimum intensity over the band.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Maximum intensity over the band.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// A two-band sky image: red band on the left channel, blue on the right.
///
/// Immutable once built. Both bands must have identical dimensions.
#[derive(Debug, Clone)]
pub struct SkyImage {
    red: Band,
    blue: Band,
}

impl SkyImage {
    /// Pairs two bands into a stereo image.
    ///
    /// # Errors
    /// Returns `DegenerateImage` if the band shapes differ.
    pub fn new(red: Band, blue: Band) -> SweepResult<Self> {
        if red.height() != blue.height() || red.width() != blue.width() {
            return Err(SweepError::degenerate(format!(
                "band shapes differ: red is {}x{}, blue is {}x{}",
                red.height(),
                red.width(),
                blue.height(),
                blue.width()
            )));
        }
        Ok(Self { red, blue })
    }

    /// Red band (left stereo channel).
    pub fn red(&self) -> &Band {
        &self.red
    }

    /// Blue band (right stereo channel).
    pub fn blue(&self) -> &Band {
        &self.blue
    }

    /// Image height.
    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// Image width.
    pub fn width(&self) -> usize {
        self.red.width()
    }
}

/// What to fetch from an image source.
#[derive(Debug, Clone)]
pub struct AcquisitionRequest {
    /// Astronomical object name or coordinates.
    pub object: String,
    /// Angular field of view in arcminutes.
    pub fov_arcmin: f64,
    /// Requested image size in pixels per side.
    pub pixels: u32,
}

/// External collaborator that retrieves two-band survey imagery.
///
/// The core never retries acquisition; failures propagate as
/// [`SweepError::Acquisition`].
pub trait ImageSource {
    /// Acquires the red/blue band pair for the request.
    fn acquire(&self, request: &AcquisitionRequest) -> SweepResult<SkyImage>;
}
