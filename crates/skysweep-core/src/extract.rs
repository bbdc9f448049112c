//! Slice extraction: rows, columns, or concentric rings.
//!
//! Each slice carries the two channels sampled at the same geometry step so
//! the synthesizer can share one frequency and phase across the stereo pair.

use std::f64::consts::TAU;

use crate::error::{SweepError, SweepResult};
use crate::image::{Band, SkyImage};
use crate::sweep::SweepPath;

/// One cross-section of the image, left (red) and right (blue) channels.
#[derive(Debug, Clone)]
pub struct SlicePair {
    /// Red band samples along the slice.
    pub left: Vec<f64>,
    /// Blue band samples along the slice.
    pub right: Vec<f64>,
}

impl SlicePair {
    /// Slice length (identical for both channels).
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Whether the slice is empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Number of radial rings for an image: `floor(min(H,W)/2) - 1`.
///
/// Returns 0 when the image is too small to hold a ring of radius 1.
pub fn ring_count(height: usize, width: usize) -> usize {
    (height.min(width) / 2).saturating_sub(1)
}

/// Number of angular samples for a ring of radius `r`: `ceil(2π·r)`.
pub fn ring_points(radius: f64) -> usize {
    (TAU * radius).ceil() as usize
}

/// Extracts the ordered slice sequence for a sweep geometry.
///
/// # Errors
/// `DegenerateImage` when a radial sweep is requested and the image cannot
/// hold a ring of radius 1, or a rounded ring coordinate falls outside the
/// image.
pub fn extract_slices(image: &SkyImage, path: SweepPath) -> SweepResult<Vec<SlicePair>> {
    match path {
        SweepPath::LinearRows => Ok((0..image.height())
            .map(|r| SlicePair {
                left: image.red().row(r).to_vec(),
                right: image.blue().row(r).to_vec(),
            })
            .collect()),
        SweepPath::LinearColumns => Ok((0..image.width())
            .map(|c| SlicePair {
                left: image.red().column(c),
                right: image.blue().column(c),
            })
            .collect()),
        SweepPath::Radial => extract_rings(image),
    }
}

fn extract_rings(image: &SkyImage) -> SweepResult<Vec<SlicePair>> {
    let num_rings = ring_count(image.height(), image.width());
    if num_rings < 1 {
        return Err(SweepError::degenerate(format!(
            "image is {}x{}, too small for a radial sweep (maximum ring radius below 1)",
            image.height(),
            image.width()
        )));
    }
    let max_radius = num_rings as f64;
    let mid_row = image.height() as f64 / 2.0;
    let mid_col = image.width() as f64 / 2.0;

    let mut slices = Vec::with_capacity(num_rings);
    for c in 0..num_rings {
        let radius = (c + 1) as f64 / num_rings as f64 * max_radius;
        let num_pts = ring_points(radius);
        let mut left = Vec::with_capacity(num_pts);
        let mut right = Vec::with_capacity(num_pts);
        for a in 0..num_pts {
            let angle = TAU * a as f64 / num_pts as f64;
            let (row, col) = ring_coordinate(mid_row, mid_col, radius, angle);
            left.push(sample_ring(image.red(), row, col)?);
            right.push(sample_ring(image.blue(), row, col)?);
        }
        slices.push(SlicePair { left, right });
    }
    Ok(slices)
}

/// Nearest-pixel ring coordinate at `angle`.
///
/// Rounds instead of interpolating: the repeated-pixel aliasing on small
/// rings is part of the expected radial sound.
fn ring_coordinate(mid_row: f64, mid_col: f64, radius: f64, angle: f64) -> (isize, isize) {
    let row = (mid_row + radius * angle.sin()).round() as isize;
    let col = (mid_col + radius * angle.cos()).round() as isize;
    (row, col)
}

fn sample_ring(band: &Band, row: isize, col: isize) -> SweepResult<f64> {
    if row < 0 || col < 0 {
        return Err(SweepError::degenerate(format!(
            "ring sample ({row}, {col}) falls outside the image"
        )));
    }
    band.get(row as usize, col as usize).ok_or_else(|| {
        SweepError::degenerate(format!("ring sample ({row}, {col}) falls outside the image"))
    })
}
