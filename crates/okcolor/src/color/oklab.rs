//! Oklab perceptual color space
//!
//! Linear sRGB is projected into an LMS-like cone space, compressed with a
//! cube root, then projected again into `(L, a, b)`. The inverse runs the
//! same steps backwards with the inverse matrices and a cube.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>
//!
//! The matrices are the updated 2021-01-25 set, to 10 decimal places.

use super::linear_rgb::LinearRgb;
use super::Triplet;

/// Linear sRGB to LMS (M1).
pub const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Cube-rooted LMS to Oklab (M2).
pub const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// Oklab to cube-rooted LMS (inverse of M2).
pub const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS to linear sRGB (inverse of M1).
pub const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

#[inline]
fn project(m: &[[f64; 3]; 3], v: Triplet) -> Triplet {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped. Colors visited by a gamut search may have
/// components far outside the typical ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.4 to 0.4
    pub a: f64,
    /// Blue-yellow axis: typically -0.4 to 0.4
    pub b: f64,
}

impl Oklab {
    /// Create a new Oklab color.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::Oklab;
    ///
    /// // Mid-gray, no chroma
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub fn to_array(self) -> Triplet {
        [self.l, self.a, self.b]
    }
}

impl From<Triplet> for Oklab {
    fn from([l, a, b]: Triplet) -> Self {
        Self { l, a, b }
    }
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear sRGB to Oklab.
    ///
    /// # Example
    ///
    /// ```
    /// use okcolor::{LinearRgb, Oklab};
    ///
    /// let oklab = Oklab::from(LinearRgb::new(0.5, 0.5, 0.5));
    /// assert!(oklab.a.abs() < 1e-6);
    /// assert!(oklab.b.abs() < 1e-6);
    /// ```
    fn from(rgb: LinearRgb) -> Self {
        let lms = project(&LINEAR_SRGB_TO_LMS, rgb.to_array());
        // cbrt is odd, so negative LMS from out-of-range input stays defined
        let lms_ = lms.map(f64::cbrt);
        Oklab::from(project(&LMS_TO_OKLAB, lms_))
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear sRGB.
    ///
    /// The result is not clamped. Out-of-gamut Oklab colors produce
    /// LinearRgb values outside 0.0..=1.0.
    fn from(lab: Oklab) -> Self {
        let lms_ = project(&OKLAB_TO_LMS, lab.to_array());
        let lms = lms_.map(|v| v * v * v);
        LinearRgb::from(project(&LMS_TO_LINEAR_SRGB, lms))
    }
}
