//! Tests for the from_rgb / to_rgb round trip.

mod common;

use common::fixtures::{interior_colors, ROUND_TRIP_TOLERANCE};
use common::{assert_lch_near, assert_rgb_near};
use oklch::{from_rgb, to_rgb, to_rgb_gamut_corrected, ConversionOptions, Lch, Rgb};

#[test]
fn test_red_reference_values() {
    let lch = from_rgb(Rgb::new(1.0, 0.0, 0.0));
    assert_lch_near(lch, Lch::new(0.628, 0.258, 29.2), 0.05);
    assert!((lch.lightness - 0.627955).abs() < 1e-6);
    assert!((lch.chroma - 0.257683).abs() < 1e-6);
    assert!((lch.hue - 29.233885).abs() < 1e-6);
}

#[test]
fn test_primaries_and_secondaries() {
    // (rgb, lightness, chroma, hue) from the reference OKLab definition
    let cases = [
        (Rgb::new(0.0, 1.0, 0.0), 0.866440, 0.294827, 142.495339),
        (Rgb::new(0.0, 0.0, 1.0), 0.452014, 0.313214, -95.947979),
        (Rgb::new(1.0, 1.0, 0.0), 0.967983, 0.211006, 109.769232),
    ];
    for (rgb, lightness, chroma, hue) in cases {
        let lch = from_rgb(rgb);
        assert_lch_near(lch, Lch::new(lightness, chroma, hue), 1e-4);
    }
}

#[test]
fn test_black_and_white() {
    let black = from_rgb(Rgb::new(0.0, 0.0, 0.0));
    assert_eq!(black.lightness, 0.0);
    assert_eq!(black.chroma, 0.0);

    let white = from_rgb(Rgb::new(1.0, 1.0, 1.0));
    assert!((white.lightness - 1.0).abs() < 1e-7);
    assert!(white.chroma < 1e-7);
}

#[test]
fn test_from_rgb_accepts_out_of_range_input() {
    let lch = from_rgb(Rgb::new(1.5, -0.2, 0.3));
    assert!(lch.lightness.is_finite() && lch.chroma.is_finite() && lch.hue.is_finite());
    assert!(lch.chroma > 0.3, "super-saturated input should be very chromatic");

    let bright = from_rgb(Rgb::new(2.0, 2.0, 2.0));
    assert!(bright.lightness > 1.0);
}

#[test]
fn test_round_trip_near_identity() {
    for rgb in interior_colors() {
        let lch = from_rgb(rgb);
        let back = to_rgb(lch, ConversionOptions::default())
            .unwrap()
            .unwrap_or_else(|| panic!("{rgb:?} via {lch:?} reported out of gamut"));
        assert_rgb_near(back, rgb, ROUND_TRIP_TOLERANCE);
    }
}

#[test]
fn test_round_trip_does_not_search() {
    // In-gamut input must come back identical with or without correction
    for rgb in interior_colors() {
        let lch = from_rgb(rgb);
        let plain = to_rgb(lch, ConversionOptions::default()).unwrap();
        let corrected = to_rgb_gamut_corrected(lch).unwrap();
        assert_eq!(plain, Some(corrected));
    }
}

#[test]
fn test_hue_periodicity_without_normalization() {
    let red = from_rgb(Rgb::new(1.0, 0.0, 0.0));
    let shifted = Lch::new(red.lightness, red.chroma, red.hue + 360.0);

    let a = to_rgb_gamut_corrected(red).unwrap();
    let b = to_rgb_gamut_corrected(shifted).unwrap();
    assert_rgb_near(a, b, 1e-9);

    let teal = from_rgb(Rgb::new(0.2, 0.6, 0.6));
    for offset in [360.0, -360.0, 720.0] {
        let shifted = Lch::new(teal.lightness, teal.chroma, teal.hue + offset);
        let options = ConversionOptions::default();
        let a = to_rgb(teal, options).unwrap().unwrap();
        let b = to_rgb(shifted, options).unwrap().unwrap();
        assert_rgb_near(a, b, 1e-9);
    }
}

#[test]
fn test_hue_out_of_atan2_range_is_accepted() {
    let lch = Lch::new(0.6, 0.05, 1234.5);
    let rgb = to_rgb(lch, ConversionOptions::default()).unwrap();
    assert!(rgb.is_some());
}

#[test]
fn test_byte_input() {
    let rgb = Rgb::from_u8(0x33, 0x66, 0xcc);
    let lch = from_rgb(rgb);
    let back = to_rgb(lch, ConversionOptions::default()).unwrap().unwrap();
    assert_eq!(back.to_bytes(), [0x33, 0x66, 0xcc]);
}
