//! Oklch: polar form of Oklab
//!
//! - **L** (Lightness): same as Oklab L
//! - **C** (Chroma): distance from the neutral axis, `sqrt(a^2 + b^2)`
//! - **h** (Hue): angle in degrees, `atan2(b, a)`
//!
//! Hue comes out of [`Oklch::from`] in `(-180, 180]` and is never
//! normalized. Going back to Oklab only passes it through `cos`/`sin`, so
//! `h` and `h + 360` produce the same Cartesian color up to rounding.

use super::oklab::Oklab;
use super::Triplet;

/// A color in Oklch (Lightness, Chroma, Hue in degrees).
///
/// For achromatic colors (`a` and `b` both zero) `atan2(0, 0)` yields a hue
/// of `0.0`, which is harmless since chroma is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in degrees, not normalized
    pub h: f64,
}

impl Oklch {
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Same lightness and hue with a different chroma.
    #[inline]
    pub fn with_chroma(self, c: f64) -> Self {
        Self { c, ..self }
    }

    #[inline]
    pub fn to_array(self) -> Triplet {
        [self.l, self.c, self.h]
    }
}

impl From<Triplet> for Oklch {
    fn from([l, c, h]: Triplet) -> Self {
        Self { l, c, h }
    }
}

impl From<Oklab> for Oklch {
    /// Cartesian to polar.
    fn from(lab: Oklab) -> Self {
        Self {
            l: lab.l,
            c: (lab.a * lab.a + lab.b * lab.b).sqrt(),
            h: lab.b.atan2(lab.a).to_degrees(),
        }
    }
}

impl From<Oklch> for Oklab {
    /// Polar to Cartesian.
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}
