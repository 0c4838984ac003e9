//! Color types and conversion stages
//!
//! # Stages
//!
//! - **gamma**: sign-preserving sRGB transfer function ([`gamma`])
//! - **Srgb / LinearRgb**: elementwise companding between the two
//! - **LinearRgb / Oklab**: fixed 3x3 matrices around a cube root
//! - **Oklab / Oklch**: Cartesian to polar, hue in degrees
//!
//! # Example
//!
//! ```
//! use okcolor::{LinearRgb, Srgb};
//!
//! let srgb = Srgb::from_u8(128, 64, 32);
//! let linear = LinearRgb::from(srgb);
//! let back = Srgb::from(linear);
//! assert_eq!(back.to_bytes(), [128, 64, 32]);
//! ```

pub mod gamma;
mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::{Oklab, LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB, LMS_TO_OKLAB, OKLAB_TO_LMS};
pub use oklch::Oklch;
pub use srgb::Srgb;

/// An untyped ordered 3-tuple, the common currency between stages.
///
/// Which stage produced a triplet is not recorded; convert into one of the
/// typed colors as early as possible.
pub type Triplet = [f64; 3];
