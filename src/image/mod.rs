//! Image buffer type and codec boundary
//!
//! The sorting engine works against a raw interleaved pixel buffer with
//! known width, height and channel count: rows contiguous, top-to-bottom,
//! left-to-right, channels interleaved per pixel. Decoding a file into
//! that buffer and encoding it back is handled by [`codec`]; everything
//! else in the crate only sees [`Image`].

mod codec;
mod errors;

pub use codec::{read_image, write_image};
pub use errors::{ImageError, ImageResult};

/// A decoded image: dimensions plus a mutable row-major pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    channels: usize,
    buffer: Vec<u8>,
}

impl Image {
    /// Creates an image from a raw interleaved buffer.
    ///
    /// The buffer must hold exactly `width * height * channels` bytes.
    pub fn from_raw(
        width: usize,
        height: usize,
        channels: usize,
        buffer: Vec<u8>,
    ) -> ImageResult<Self> {
        let expected = width * height * channels;
        if buffer.len() != expected {
            return Err(ImageError::BufferMismatch {
                width,
                height,
                channels,
                actual: buffer.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            buffer,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channels per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Read access to the row-major buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Write access to the row-major buffer.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}
