//! Pixel value type and scalar extractors
//!
//! A pixel is a plain 3-channel value. Every ordering the engine can apply
//! is derived from one of five scalar extractors over those channels:
//!
//! | Extractor | Value                          |
//! |-----------|--------------------------------|
//! | average   | `(r + g + b) / 3` (integer)    |
//! | product   | `r * g * b`                    |
//! | max       | `max(r, g, b)`                 |
//! | min       | `min(r, g, b)`                 |
//! | xor       | `r ^ g ^ b`                    |

/// Number of channels the sorting engine supports.
///
/// Images with any other channel count are rejected before pixel work begins.
pub const CHANNELS: usize = 3;

/// A 3-channel pixel value.
///
/// Pixels have no identity; they are compared and moved by value within a
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Creates a pixel from its three channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Integer average of the three channels.
    pub fn average(&self) -> u32 {
        (self.r as u32 + self.g as u32 + self.b as u32) / CHANNELS as u32
    }

    /// Product of the three channels.
    pub fn product(&self) -> u32 {
        self.r as u32 * self.g as u32 * self.b as u32
    }

    /// Largest channel value.
    pub fn max_channel(&self) -> u32 {
        self.r.max(self.g).max(self.b) as u32
    }

    /// Smallest channel value.
    pub fn min_channel(&self) -> u32 {
        self.r.min(self.g).min(self.b) as u32
    }

    /// Bitwise XOR of the three channels.
    pub fn xor(&self) -> u32 {
        (self.r ^ self.g ^ self.b) as u32
    }
}
