//! Test fixtures and constants.

use oklch::Rgb;

/// sRGB chroma that is displayable at every hue, per lightness.
///
/// Informational table; `(lightness, chroma)`.
pub const SAFE_SRGB_CHROMA: [(f64, f64); 5] = [
    (0.15, 0.025),
    (0.25, 0.042),
    (0.50, 0.085),
    (0.75, 0.127),
    (0.90, 0.048),
];

/// Tolerance for sRGB -> OKLCH -> sRGB with the 10-digit published matrices
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-5;

/// Colors with every channel strictly inside (0, 1).
///
/// Colors touching a face of the RGB cube can come back a few 1e-8 outside
/// it, which the exact gamut test rejects.
pub fn interior_colors() -> Vec<Rgb> {
    let levels = [0.05, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95];
    let mut colors = Vec::new();
    for r in levels {
        for g in levels {
            for b in levels {
                colors.push(Rgb::new(r, g, b));
            }
        }
    }
    colors
}
