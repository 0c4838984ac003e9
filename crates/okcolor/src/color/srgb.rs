//! sRGB color type
//!
//! Gamma-encoded display RGB. The display gamut is the unit cube
//! `[0, 1]^3`; values outside it are representable but not displayable.

use super::gamma::linear_to_srgb;
use super::linear_rgb::LinearRgb;
use super::Triplet;

/// A color in sRGB color space.
///
/// Channels are nominally in `0.0..=1.0`. Conversions never clamp, so a
/// value produced from an out-of-gamut Oklab color may hold negative
/// channels or channels above one; see [`Srgb::is_in_gamut`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use okcolor::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use okcolor::Srgb;
    /// let color = Srgb::new(1.0, 0.5, -0.2);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Whether every channel lies in `0.0..=1.0`.
    ///
    /// Bounds are inclusive and exact: no epsilon is applied. NaN channels
    /// are never in gamut.
    #[inline]
    pub fn is_in_gamut(self) -> bool {
        self.to_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    /// Clamp every channel into `0.0..=1.0`.
    #[inline]
    pub fn clip(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn to_array(self) -> Triplet {
        [self.r, self.g, self.b]
    }
}

impl From<Triplet> for Srgb {
    fn from([r, g, b]: Triplet) -> Self {
        Self { r, g, b }
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode each channel. Sign is preserved; nothing is clamped.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}
