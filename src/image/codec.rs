//! Image file decode/encode
//!
//! Thin wrapper over the `image` crate. Every decoded file is converted to
//! 8-bit RGB so the engine always sees a 3-channel buffer; the output
//! format is chosen by the destination file extension.

use std::path::Path;

use super::errors::{ImageError, ImageResult};
use super::Image;
use crate::pixel::CHANNELS;

/// Decodes an image file into a raw RGB buffer.
pub fn read_image(path: &Path) -> ImageResult<Image> {
    let decoded = ::image::open(path).map_err(|source| ImageError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Image::from_raw(width as usize, height as usize, CHANNELS, rgb.into_raw())
}

/// Encodes an image to the given path, format chosen by extension.
pub fn write_image(image: &Image, path: &Path) -> ImageResult<()> {
    let rgb = ::image::RgbImage::from_raw(
        image.width() as u32,
        image.height() as u32,
        image.buffer().to_vec(),
    )
    .ok_or(ImageError::BufferMismatch {
        width: image.width(),
        height: image.height(),
        channels: CHANNELS,
        actual: image.buffer().len(),
    })?;

    rgb.save(path).map_err(|source| ImageError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read_round_trips_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let bytes: Vec<u8> = (0..2 * 3 * 3).map(|i| i as u8).collect();
        let original = Image::from_raw(2, 3, 3, bytes).unwrap();

        write_image(&original, &path).unwrap();
        let decoded = read_image(&path).unwrap();

        // PNG is lossless, so the raw buffer must survive exactly
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let err = read_image(Path::new("/nonexistent/input.png")).unwrap_err();
        assert!(matches!(err, ImageError::Decode { .. }));
    }
}
