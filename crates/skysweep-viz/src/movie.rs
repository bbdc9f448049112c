//! Animated sweep movie: the false-color composite with a moving indicator
//! line, one full sweep over the sound's duration.
//!
//! Written as an animated GIF. The GIF container carries no audio track;
//! muxing with the rendered WAV is left to external tooling.

use std::f64::consts::TAU;
use std::fs::File;
use std::path::Path;

use skysweep_core::extract::ring_count;
use skysweep_core::{SkyImage, SweepDirection, SweepError, SweepPath};

use crate::composite::{false_color, RgbBuffer};
use crate::error::VizError;

/// Movie frame rate.
pub const MOVIE_FPS: u32 = 24;

/// Indicator line color.
const LINE_COLOR: [u8; 3] = [96, 224, 128];

/// Renders the sweep movie for a direction over `duration_seconds`.
///
/// Frame count is `round(fps × duration)`, so the animation spans the same
/// wall-clock time as the rendered sound.
///
/// # Errors
/// Degenerate images are rejected for radial sweeps just as in synthesis;
/// file and GIF encoding failures propagate.
pub fn render_movie(
    image: &SkyImage,
    direction: SweepDirection,
    duration_seconds: f64,
    path: &Path,
) -> Result<(), VizError> {
    let (sweep_path, flip) = direction.geometry();
    if sweep_path == SweepPath::Radial && ring_count(image.height(), image.width()) < 1 {
        return Err(SweepError::degenerate(format!(
            "image is {}x{}, too small for a radial sweep movie",
            image.height(),
            image.width()
        ))
        .into());
    }

    let num_frames = ((MOVIE_FPS as f64 * duration_seconds).round() as usize).max(1);
    let background = false_color(image);

    let mut file = File::create(path)?;
    let mut encoder = gif::Encoder::new(
        &mut file,
        background.width as u16,
        background.height as u16,
        &[],
    )?;
    encoder.set_repeat(gif::Repeat::Infinite)?;

    // Centisecond frame delay; 4 gives 25 fps, the closest the GIF clock
    // gets to 24.
    let delay = (100 / MOVIE_FPS).max(1) as u16;

    for i in 0..num_frames {
        let progress = i as f64 / num_frames as f64;
        let mut frame_buffer = background.clone();
        draw_indicator(&mut frame_buffer, sweep_path, flip, progress);

        let mut frame = gif::Frame::from_rgb_speed(
            frame_buffer.width as u16,
            frame_buffer.height as u16,
            &frame_buffer.data,
            10,
        );
        frame.delay = delay;
        encoder.write_frame(&frame)?;
    }
    Ok(())
}

/// Draws the sweep indicator for one frame.
fn draw_indicator(buffer: &mut RgbBuffer, path: SweepPath, flip: bool, progress: f64) {
    let (w, h) = (buffer.width as isize, buffer.height as isize);
    match path {
        SweepPath::LinearRows => {
            let mut row = buffer.height as f64 * progress;
            if flip {
                row = (buffer.height - 1) as f64 - row;
            }
            let y = row.round() as isize;
            highlight_line(buffer, 0, y, w - 1, y);
        }
        SweepPath::LinearColumns => {
            let mut col = buffer.width as f64 * progress;
            if flip {
                col = (buffer.width - 1) as f64 - col;
            }
            let x = col.round() as isize;
            highlight_line(buffer, x, 0, x, h - 1);
        }
        SweepPath::Radial => {
            let mid_row = buffer.height as f64 / 2.0;
            let mid_col = buffer.width as f64 / 2.0;
            let radius = ring_count(buffer.height, buffer.width) as f64;
            let mut angle = TAU * progress;
            if flip {
                angle = TAU - angle;
            }
            // Same orientation as the ring extractor: rows advance with
            // sin, columns with cos.
            let end_y = (mid_row + radius * angle.sin()).round() as isize;
            let end_x = (mid_col + radius * angle.cos()).round() as isize;
            highlight_line(
                buffer,
                mid_col.round() as isize,
                mid_row.round() as isize,
                end_x,
                end_y,
            );
        }
    }
}

/// A bright core line over a faint wide halo, so the indicator reads on
/// both dark sky and bright nebulosity.
fn highlight_line(buffer: &mut RgbBuffer, x0: isize, y0: isize, x1: isize, y1: isize) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    for offset in [-1, 1] {
        let (ox, oy) = if steep { (offset, 0) } else { (0, offset) };
        blend_line(buffer, x0 + ox, y0 + oy, x1 + ox, y1 + oy, 0.3);
    }
    buffer.draw_line(x0, y0, x1, y1, LINE_COLOR);
}

fn blend_line(buffer: &mut RgbBuffer, x0: isize, y0: isize, x1: isize, y1: isize, alpha: f64) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);
    loop {
        buffer.blend(x, y, [255, 255, 255], alpha);
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

#[cfg(test)]
mod tests {
    use super::*;
    use skysweep_core::Band;

    fn image(size: usize) -> SkyImage {
        let red: Vec<f64> = (0..size * size).map(|i| i as f64).collect();
        let blue: Vec<f64> = (0..size * size).map(|i| (i / 2) as f64).collect();
        SkyImage::new(
            Band::new(red.clone(), size, size).unwrap(),
            Band::new(blue, size, size).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_movie_has_gif_signature() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.gif");
        render_movie(&image(16), SweepDirection::LeftRight, 0.5, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..6], b"GIF89a");
    }

    #[test]
    fn test_all_directions_render_movies() {
        let dir = tempfile::tempdir().unwrap();
        for direction in SweepDirection::ALL {
            let path = dir.path().join(format!("{direction}.gif"));
            render_movie(&image(16), direction, 0.25, &path).unwrap();
            assert!(path.exists());
        }
    }

    #[test]
    fn test_radial_movie_rejects_tiny_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.gif");
        let err = render_movie(&image(3), SweepDirection::Clockwise, 0.5, &path).unwrap_err();
        assert!(matches!(err, VizError::Sweep(_)));
    }

    #[test]
    fn test_zero_duration_still_produces_a_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.gif");
        render_movie(&image(8), SweepDirection::TopBottom, 0.0, &path).unwrap();
        assert!(std::fs::read(&path).unwrap().len() > 6);
    }
}
