//! sRGB transfer function (IEC 61966-2-1)
//!
//! Both directions preserve sign, so negative channels produced by
//! out-of-gamut intermediate colors survive a round trip instead of being
//! folded back into range.

/// Encoded value at or below which the inverse curve is linear.
pub const SRGB_TO_LINEAR_THRESHOLD: f64 = 0.04045;

/// Linear value at or below which the forward curve is linear.
pub const LINEAR_TO_SRGB_THRESHOLD: f64 = 0.0031308;

/// Slope of the linear segment near zero.
pub const LINEAR_SLOPE: f64 = 12.92;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// Offset added before (decode) or subtracted after (encode) the power segment.
pub const ENCODING_OFFSET: f64 = 0.055;

/// Scale applied alongside [`ENCODING_OFFSET`].
pub const ENCODING_SCALE: f64 = 1.055;

/// Decode one gamma-encoded sRGB channel to linear light.
///
/// Defined for every finite input; `|v| <= 0.04045` takes the linear
/// segment, anything larger the power segment with the sign of `v`.
///
/// # Example
/// ```
/// use okcolor::color::gamma::srgb_to_linear;
///
/// assert!((srgb_to_linear(0.5) - 0.214041).abs() < 1e-6);
/// assert_eq!(srgb_to_linear(-0.5), -srgb_to_linear(0.5));
/// ```
#[inline]
pub fn srgb_to_linear(v: f64) -> f64 {
    let abs = v.abs();
    if abs <= SRGB_TO_LINEAR_THRESHOLD {
        v / LINEAR_SLOPE
    } else {
        v.signum() * ((abs + ENCODING_OFFSET) / ENCODING_SCALE).powf(GAMMA)
    }
}

/// Encode one linear-light channel to gamma-encoded sRGB.
///
/// Inverse of [`srgb_to_linear`], with the same sign handling.
///
/// # Example
/// ```
/// use okcolor::color::gamma::linear_to_srgb;
///
/// assert!((linear_to_srgb(0.5) - 0.735357).abs() < 1e-6);
/// ```
#[inline]
pub fn linear_to_srgb(v: f64) -> f64 {
    let abs = v.abs();
    if abs <= LINEAR_TO_SRGB_THRESHOLD {
        LINEAR_SLOPE * v
    } else {
        v.signum() * (ENCODING_SCALE * abs.powf(1.0 / GAMMA) - ENCODING_OFFSET)
    }
}
