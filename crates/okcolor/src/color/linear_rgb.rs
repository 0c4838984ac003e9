//! Linear RGB color type
//!
//! Linear light intensity, the space in which the Oklab matrices operate.

use super::gamma::srgb_to_linear;
use super::srgb::Srgb;
use super::Triplet;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// (or go negative) for out-of-gamut intermediate results.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_array(self) -> Triplet {
        [self.r, self.g, self.b]
    }
}

impl From<Triplet> for LinearRgb {
    fn from([r, g, b]: Triplet) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode each gamma-encoded channel. Sign is preserved; nothing is clamped.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
