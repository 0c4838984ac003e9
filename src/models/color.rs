use okcolor::{Oklch, Srgb};
use serde::{Deserialize, Serialize};

/// Gamma-encoded sRGB color, channels nominally in `[0, 1]`.
///
/// Channels outside `[0, 1]` are accepted by the type and by
/// [`crate::from_rgb`]; they are just not displayable.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Create from 8-bit channels (`255` maps to `1.0`).
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Srgb::from_u8(red, green, blue).into()
    }

    /// Round and clamp each channel to `0..=255`.
    pub fn to_bytes(self) -> [u8; 3] {
        Srgb::from(self).to_bytes()
    }

    /// Whether every channel lies in `[0, 1]` (inclusive, no epsilon).
    pub fn is_in_gamut(self) -> bool {
        Srgb::from(self).is_in_gamut()
    }
}

impl From<Srgb> for Rgb {
    fn from(srgb: Srgb) -> Self {
        Self::new(srgb.r, srgb.g, srgb.b)
    }
}

impl From<Rgb> for Srgb {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.red, rgb.green, rgb.blue)
    }
}

/// OKLCH color: lightness, chroma, hue in degrees.
///
/// `lightness` belongs in `[0, 1]` and `chroma` must be non-negative for
/// [`crate::to_rgb`] to accept it. `hue` is used as given: it is neither
/// validated nor wrapped into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lch {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
}

impl Lch {
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }
}

impl From<Oklch> for Lch {
    fn from(lch: Oklch) -> Self {
        Self::new(lch.l, lch.c, lch.h)
    }
}

impl From<Lch> for Oklch {
    fn from(lch: Lch) -> Self {
        Oklch::new(lch.lightness, lch.chroma, lch.hue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rgb_from_u8() {
        assert_eq!(Rgb::from_u8(255, 0, 0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(Rgb::from_u8(0, 255, 255).to_bytes(), [0, 255, 255]);
    }

    #[test]
    fn test_rgb_to_bytes_clamps() {
        assert_eq!(Rgb::new(-0.2, 0.5, 1.3).to_bytes(), [0, 128, 255]);
    }

    #[test]
    fn test_rgb_is_in_gamut() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_in_gamut());
        assert!(!Rgb::new(-1e-9, 0.5, 1.0).is_in_gamut());
        assert!(!Rgb::new(0.0, 0.5, 1.000001).is_in_gamut());
    }

    #[test]
    fn test_serde_field_names() {
        let rgb: Rgb = serde_json::from_str(r#"{"red": 1.0, "green": 0.5, "blue": 0.0}"#).unwrap();
        assert_eq!(rgb, Rgb::new(1.0, 0.5, 0.0));

        let lch = Lch::new(0.5, 0.1, 270.0);
        let json = serde_json::to_value(lch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"lightness": 0.5, "chroma": 0.1, "hue": 270.0})
        );
    }

    #[test]
    fn test_oklch_conversion_keeps_hue() {
        let lch = Lch::new(0.4, 0.2, 725.0);
        let oklch = Oklch::from(lch);
        assert_eq!(oklch.h, 725.0);
        assert_eq!(Lch::from(oklch), lch);
    }
}
