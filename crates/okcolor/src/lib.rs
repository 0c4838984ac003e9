//! okcolor: typed conversion stages between sRGB and OKLCH
//!
//! Each stage of the pipeline is its own type, so a value can only be fed
//! to the stage that expects it:
//!
//! ```text
//! Srgb  <-- gamma -->  LinearRgb  <-- matrices -->  Oklab  <-- polar -->  Oklch
//! ```
//!
//! - [`Srgb`]: gamma-encoded display RGB
//! - [`LinearRgb`]: linear light intensity
//! - [`Oklab`]: perceptually uniform Cartesian space (Björn Ottosson, 2020)
//! - [`Oklch`]: polar form of Oklab, hue in degrees
//!
//! None of the conversions clamp. Out-of-gamut and negative intermediate
//! values pass through unchanged so that callers can detect them.
//!
//! # Example
//!
//! ```
//! use okcolor::{LinearRgb, Oklab, Oklch, Srgb};
//!
//! let red = Srgb::new(1.0, 0.0, 0.0);
//! let lch = Oklch::from(Oklab::from(LinearRgb::from(red)));
//! assert!((lch.l - 0.628).abs() < 1e-3);
//! assert!((lch.c - 0.258).abs() < 1e-3);
//! assert!((lch.h - 29.23).abs() < 1e-2);
//! ```

pub mod color;

pub use color::{LinearRgb, Oklab, Oklch, Srgb, Triplet};
