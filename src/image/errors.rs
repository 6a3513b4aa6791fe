//! Image boundary error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for image operations
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors at the image codec and buffer boundary
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Unable to read image '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error("Unable to write image '{}': {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: ::image::ImageError,
    },

    #[error(
        "Buffer of {actual} bytes does not match {width}x{height} pixels \
         with {channels} channels"
    )]
    BufferMismatch {
        width: usize,
        height: usize,
        channels: usize,
        actual: usize,
    },
}
