//! Pixel-matrix adapter
//!
//! Extracts a flat, orientation-ordered pixel view from the image buffer
//! and writes it back. Row views copy the buffer in row-major order;
//! column views materialize an explicit transpose so the engine can treat
//! each column as one contiguous line. The transpose round-trips exactly:
//! acquire followed by commit with no intervening mutation reproduces the
//! original buffer bit-for-bit.
//!
//! The view owns its pixels; raw bytes are never reinterpreted as a
//! different element type.

use crate::image::Image;
use crate::pixel::{Pixel, CHANNELS};
use crate::query::Orientation;

/// A flat, mutable, orientation-ordered array of pixels covering one
/// step's execution, addressable as lines of `line_length` pixels each.
#[derive(Debug)]
pub struct PixelView {
    pixels: Vec<Pixel>,
    orientation: Orientation,
    width: usize,
    height: usize,
}

impl PixelView {
    /// Builds the view from a 3-channel image.
    ///
    /// Row orientation keeps the buffer's row-major order. Column
    /// orientation places the source pixel at `(col, row)` at flat index
    /// `col * height + row`, so the view reads as column-major.
    pub fn acquire(image: &Image, orientation: Orientation) -> Self {
        debug_assert_eq!(image.channels(), CHANNELS);

        let width = image.width();
        let height = image.height();
        let buffer = image.buffer();
        let pixel_at = |index: usize| {
            let offset = index * CHANNELS;
            Pixel::new(buffer[offset], buffer[offset + 1], buffer[offset + 2])
        };

        let mut pixels = Vec::with_capacity(image.pixel_count());
        match orientation {
            Orientation::Row => {
                pixels.extend((0..image.pixel_count()).map(pixel_at));
            }
            Orientation::Column => {
                for col in 0..width {
                    for row in 0..height {
                        pixels.push(pixel_at(row * width + col));
                    }
                }
            }
        }

        Self {
            pixels,
            orientation,
            width,
            height,
        }
    }

    /// Writes the view back to the image's row-major buffer.
    ///
    /// Column views apply the inverse transpose (flat index
    /// `col * height + row` back to `row * width + col`); row views write
    /// straight through. Every byte of the buffer is rewritten.
    pub fn commit(self, image: &mut Image) {
        let width = self.width;
        let height = self.height;
        let buffer = image.buffer_mut();
        let put_pixel = |buffer: &mut [u8], index: usize, pixel: Pixel| {
            let offset = index * CHANNELS;
            buffer[offset] = pixel.r;
            buffer[offset + 1] = pixel.g;
            buffer[offset + 2] = pixel.b;
        };

        match self.orientation {
            Orientation::Row => {
                for (index, pixel) in self.pixels.iter().enumerate() {
                    put_pixel(buffer, index, *pixel);
                }
            }
            Orientation::Column => {
                for col in 0..width {
                    for row in 0..height {
                        put_pixel(buffer, row * width + col, self.pixels[col * height + row]);
                    }
                }
            }
        }
    }

    /// Pixels per line for this view's orientation.
    pub fn line_length(&self) -> usize {
        match self.orientation {
            Orientation::Row => self.width,
            Orientation::Column => self.height,
        }
    }

    /// Number of lines in the view.
    pub fn line_count(&self) -> usize {
        match self.orientation {
            Orientation::Row => self.height,
            Orientation::Column => self.width,
        }
    }

    /// Iterates over the view's lines, each contiguous and mutable.
    pub fn lines_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        let line_length = self.line_length();
        self.pixels.chunks_mut(line_length.max(1))
    }

    /// Read access to the flat pixel array.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}
