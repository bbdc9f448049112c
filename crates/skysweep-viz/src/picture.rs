//! Still picture of the survey data: red band, false-color composite and
//! blue band side by side in one PNG.

use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use skysweep_core::SkyImage;

use crate::composite::{band_stretch, false_color, RgbBuffer};
use crate::error::VizError;

/// Gap between panels in pixels.
const PANEL_GAP: usize = 8;

/// Renders the three-panel picture and writes it as a PNG.
///
/// Panel order matches the stereo allocation: red band (left channel),
/// composite, blue band (right channel).
pub fn render_picture(image: &SkyImage, path: &Path) -> Result<(), VizError> {
    let buffer = picture_buffer(image);
    write_png(&buffer, path)
}

fn picture_buffer(image: &SkyImage) -> RgbBuffer {
    let (h, w) = (image.height(), image.width());
    let red = band_stretch(image.red());
    let blue = band_stretch(image.blue());
    let composite = false_color(image);

    let mut buffer = RgbBuffer::new(3 * w + 2 * PANEL_GAP, h);
    for y in 0..h {
        for x in 0..w {
            let v = red[y * w + x];
            buffer.set(x as isize, y as isize, [v, v / 4, v / 4]);

            let i = (y * w + x) * 3;
            let rgb = [composite.data[i], composite.data[i + 1], composite.data[i + 2]];
            buffer.set((w + PANEL_GAP + x) as isize, y as isize, rgb);

            let v = blue[y * w + x];
            buffer.set(
                (2 * (w + PANEL_GAP) + x) as isize,
                y as isize,
                [v / 4, v / 4, v],
            );
        }
    }
    buffer
}

/// Writes an RGB buffer as a PNG with fixed encoder settings, so the same
/// input always produces the same bytes.
pub(crate) fn write_png(buffer: &RgbBuffer, path: &Path) -> Result<(), VizError> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = Encoder::new(writer, buffer.width as u32, buffer.height as u32);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&buffer.data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skysweep_core::Band;

    fn image() -> SkyImage {
        let red: Vec<f64> = (0..64).map(|i| i as f64).collect();
        let blue: Vec<f64> = (0..64).map(|i| (63 - i) as f64).collect();
        SkyImage::new(
            Band::new(red, 8, 8).unwrap(),
            Band::new(blue, 8, 8).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_panel_layout_dimensions() {
        let buffer = picture_buffer(&image());
        assert_eq!(buffer.width, 3 * 8 + 2 * PANEL_GAP);
        assert_eq!(buffer.height, 8);
    }

    #[test]
    fn test_written_file_is_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.png");
        render_picture(&image(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_picture_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        render_picture(&image(), &a).unwrap();
        render_picture(&image(), &b).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }
}
