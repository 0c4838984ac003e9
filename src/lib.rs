//! oklch: OKLCH <-> sRGB conversion with gamut mapping
//!
//! Two operations make up the whole surface:
//!
//! - [`from_rgb`]: sRGB to OKLCH. Total and pure.
//! - [`to_rgb`]: OKLCH to sRGB. Validates lightness and chroma, then either
//!   reports that the color is not displayable or, on request, lowers
//!   chroma until it is.
//!
//! [`to_rgb_gamut_corrected`] is the always-correcting form of [`to_rgb`].
//!
//! ```text
//! from_rgb:  Rgb --decode--> LinearRgb --M1,cbrt,M2--> Oklab --polar--> Lch
//! to_rgb:    Lch --cartesian--> Oklab --M2^-1,cube,M1^-1--> LinearRgb --encode--> Rgb
//!                                                              (gamut test, chroma search)
//! ```
//!
//! The stage types live in the [`okcolor`] crate and are re-exported here.
//!
//! # Example
//!
//! ```
//! use oklch::{from_rgb, to_rgb, ConversionOptions, Rgb};
//!
//! let teal = Rgb::new(0.2, 0.6, 0.6);
//! let lch = from_rgb(teal);
//! let back = to_rgb(lch, ConversionOptions::default()).unwrap().unwrap();
//! assert!((back.green - teal.green).abs() < 1e-6);
//! ```
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (search steps at `trace`, corrected
//! results and option loading at `debug`) and never installs a subscriber.

pub mod convert;
pub mod error;
pub mod gamut;
pub mod models;

pub use convert::{from_rgb, to_rgb, to_rgb_gamut_corrected};
pub use error::{ConfigError, ConversionError};
pub use gamut::{SearchOutcome, SEARCH_TOLERANCE};
pub use models::{ConversionOptions, Lch, Rgb};
pub use okcolor::{LinearRgb, Oklab, Oklch, Srgb, Triplet};
