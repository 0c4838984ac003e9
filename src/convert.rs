//! Public conversion entry points.

use okcolor::{LinearRgb, Oklab, Oklch, Srgb};

use crate::error::ConversionError;
use crate::gamut::{self, SearchOutcome};
use crate::models::{ConversionOptions, Lch, Rgb};

/// Convert gamma-encoded sRGB to OKLCH.
///
/// Total over finite input. Channels outside `[0, 1]` are not rejected and
/// produce a correspondingly unusual OKLCH value. Hue is in `(-180, 180]`.
///
/// # Example
///
/// ```
/// use oklch::{from_rgb, Rgb};
///
/// let lch = from_rgb(Rgb::new(1.0, 0.0, 0.0));
/// assert!((lch.lightness - 0.628).abs() < 1e-3);
/// assert!((lch.chroma - 0.258).abs() < 1e-3);
/// assert!((lch.hue - 29.2).abs() < 0.1);
/// ```
pub fn from_rgb(rgb: Rgb) -> Lch {
    let linear = LinearRgb::from(Srgb::from(rgb));
    Oklch::from(Oklab::from(linear)).into()
}

/// Convert OKLCH to gamma-encoded sRGB.
///
/// Returns `Ok(None)` when the color has no representation inside
/// `[0, 1]^3` and `options.gamut_correct_if_needed` is false. With the flag
/// set, chroma is reduced at fixed lightness and hue until the color is
/// displayable and the result is always `Some`.
///
/// Output channels are not clamped; an accepted color lies in `[0, 1]`
/// because it passed the gamut test.
///
/// # Errors
///
/// [`ConversionError::InvalidLightness`] if lightness is outside `[0, 1]`,
/// [`ConversionError::InvalidChroma`] if chroma is negative. Both are
/// checked before any conversion. Hue is never validated.
///
/// # Example
///
/// ```
/// use oklch::{to_rgb, ConversionOptions, Lch};
///
/// let vivid = Lch::new(0.5, 0.5, 0.0);
/// assert_eq!(to_rgb(vivid, ConversionOptions::default()).unwrap(), None);
///
/// let corrected = to_rgb(vivid, ConversionOptions::new().gamut_correct_if_needed(true))
///     .unwrap()
///     .unwrap();
/// assert!(corrected.is_in_gamut());
/// ```
pub fn to_rgb(lch: Lch, options: ConversionOptions) -> Result<Option<Rgb>, ConversionError> {
    validate(lch)?;
    match gamut::search(lch.into(), options.gamut_correct_if_needed) {
        SearchOutcome::InGamut(srgb) => Ok(Some(srgb.into())),
        SearchOutcome::OutOfGamut(_) => Ok(None),
    }
}

/// [`to_rgb`] with gamut correction enabled, for callers that always want
/// a displayable color.
///
/// The result is always in gamut. Chroma may be arbitrarily large.
///
/// # Errors
///
/// Same validation as [`to_rgb`].
pub fn to_rgb_gamut_corrected(lch: Lch) -> Result<Rgb, ConversionError> {
    validate(lch)?;
    Ok(gamut::correct(lch.into()).into())
}

fn validate(lch: Lch) -> Result<(), ConversionError> {
    if !(0.0..=1.0).contains(&lch.lightness) {
        return Err(ConversionError::InvalidLightness {
            lightness: lch.lightness,
        });
    }
    if lch.chroma.is_nan() || lch.chroma < 0.0 {
        return Err(ConversionError::InvalidChroma { chroma: lch.chroma });
    }
    Ok(())
}
