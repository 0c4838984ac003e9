//! Assertion helpers for tests.

use oklch::{Lch, Rgb};

/// Assert every channel of `actual` is within `tolerance` of `expected`
pub fn assert_rgb_near(actual: Rgb, expected: Rgb, tolerance: f64) {
    let pairs = [
        ("red", actual.red, expected.red),
        ("green", actual.green, expected.green),
        ("blue", actual.blue, expected.blue),
    ];
    for (channel, a, e) in pairs {
        assert!(
            (a - e).abs() <= tolerance,
            "{channel} differs by {}: got {actual:?}, expected {expected:?}",
            (a - e).abs()
        );
    }
}

/// Assert every component of `actual` is within `tolerance` of `expected`
pub fn assert_lch_near(actual: Lch, expected: Lch, tolerance: f64) {
    let pairs = [
        ("lightness", actual.lightness, expected.lightness),
        ("chroma", actual.chroma, expected.chroma),
        ("hue", actual.hue, expected.hue),
    ];
    for (component, a, e) in pairs {
        assert!(
            (a - e).abs() <= tolerance,
            "{component} differs by {}: got {actual:?}, expected {expected:?}",
            (a - e).abs()
        );
    }
}

/// Assert the color is displayable, with the color in the failure message
pub fn assert_in_gamut(rgb: Rgb) {
    assert!(rgb.is_in_gamut(), "expected in-gamut color, got {rgb:?}");
}
