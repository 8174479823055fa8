//! # Image Export
//!
//! The file-system collaborator of the renderer: converts a finished
//! [`PixelBuffer`] into an [`image`] RGB image and writes it out as PNG,
//! losslessly. Nothing in the render pipeline itself touches the disk.

use std::path::Path;

use image::RgbImage;

use crate::buffer::PixelBuffer;
use crate::error::RasterResult;

/// Converts the buffer into an [`RgbImage`], byte for byte.
#[must_use]
pub fn to_image(buffer: &PixelBuffer) -> RgbImage {
    RgbImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
        .expect("pixel buffer length matches its dimensions")
}

/// Saves the buffer as a PNG file at `path`.
///
/// # Errors
///
/// Returns [`crate::RasterError::Export`] when encoding or the file
/// write fails.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> RasterResult<()> {
    to_image(buffer).save_with_format(path, image::ImageFormat::Png)?;
    tracing::info!(path = %path.display(), "image saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    #[test]
    fn test_conversion_is_lossless() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set(0, 0, Rgb::new(10, 20, 30));
        buffer.set(1, 0, Rgb::new(40, 50, 60));
        buffer.set(0, 1, Rgb::new(70, 80, 90));
        buffer.set(1, 1, Rgb::new(100, 110, 120));

        let img = to_image(&buffer);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 0), &image::Rgb([40, 50, 60]));
        assert_eq!(img.get_pixel(0, 1), &image::Rgb([70, 80, 90]));
    }

    #[test]
    fn test_save_round_trip() {
        let mut buffer = PixelBuffer::new(3, 1);
        buffer.set(0, 0, Rgb::new(1, 2, 3));
        buffer.set(1, 0, Rgb::new(4, 5, 6));
        buffer.set(2, 0, Rgb::new(7, 8, 9));

        let path = std::env::temp_dir().join("strata_export_test.png");
        save_png(&buffer, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (3, 1));
        assert_eq!(loaded.as_raw(), &buffer.as_bytes().to_vec());

        std::fs::remove_file(&path).ok();
    }
}
