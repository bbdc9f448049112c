//! False-color composite of the two survey bands.
//!
//! Red and blue are square-root scaled from their respective bands after
//! min subtraction; green is the average of the two. Square-root scaling
//! lifts the faint sky structure that a linear stretch would bury.

use skysweep_core::{Band, SkyImage};

/// A plain row-major RGB8 pixel buffer.
#[derive(Debug, Clone)]
pub struct RgbBuffer {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// RGB bytes, three per pixel.
    pub data: Vec<u8>,
}

impl RgbBuffer {
    /// Creates a black buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    /// Sets one pixel, ignoring out-of-range coordinates.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, rgb: [u8; 3]) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    /// Blends one pixel toward `rgb` by `alpha` in [0, 1].
    #[inline]
    pub fn blend(&mut self, x: isize, y: isize, rgb: [u8; 3], alpha: f64) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        for c in 0..3 {
            let old = self.data[i + c] as f64;
            self.data[i + c] = (old + (rgb[c] as f64 - old) * alpha).round() as u8;
        }
    }

    /// Draws a straight line with Bresenham stepping.
    pub fn draw_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, rgb: [u8; 3]) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        loop {
            self.set(x, y, rgb);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Square-root stretch of a band onto `[0, 255]`.
pub(crate) fn band_stretch(band: &Band) -> Vec<u8> {
    let min = band.min();
    let scaled: Vec<f64> = band.data().iter().map(|&v| (v - min).max(0.0).sqrt()).collect();
    let peak = scaled.iter().copied().fold(0.0_f64, f64::max);
    if peak == 0.0 {
        return vec![0; scaled.len()];
    }
    scaled
        .iter()
        .map(|&v| (v / peak * 255.0).round() as u8)
        .collect()
}

/// Builds the false-color composite of a sky image.
pub fn false_color(image: &SkyImage) -> RgbBuffer {
    let red = band_stretch(image.red());
    let blue = band_stretch(image.blue());

    let mut buffer = RgbBuffer::new(image.width(), image.height());
    for (i, chunk) in buffer.data.chunks_exact_mut(3).enumerate() {
        let r = red[i];
        let b = blue[i];
        let g = ((r as u16 + b as u16) / 2) as u8;
        chunk.copy_from_slice(&[r, g, b]);
    }
    buffer
}
