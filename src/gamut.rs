//! Chroma bisection into the sRGB gamut.
//!
//! Lightness and hue stay fixed. The first candidate is the color as given;
//! if it is displayable it is returned untouched. Otherwise chroma moves by a
//! step that halves every iteration: down while the candidate is out of
//! gamut, up while it is in gamut, until an in-gamut candidate is reached
//! with a step at or below [`SEARCH_TOLERANCE`].
//!
//! The step halves on every iteration, so it reaches zero after at most a
//! couple of thousand iterations even when chroma starts at `f64::MAX`. The
//! search only stops without converging when the step is zero and the
//! candidate is still out of gamut, which happens for lightness above white.

use okcolor::{LinearRgb, Oklab, Oklch, Srgb};

/// Step size at which an in-gamut candidate is accepted.
pub const SEARCH_TOLERANCE: f64 = 0.0051;

/// Result of checking a color against the gamut without correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    /// An in-gamut color was found.
    InGamut(Srgb),
    /// The color is not displayable and correction was not requested.
    /// Holds the literal, uncorrected conversion.
    OutOfGamut(Srgb),
}

/// Convert an OKLCH candidate straight through to sRGB, without clamping.
pub fn oklch_to_srgb(lch: Oklch) -> Srgb {
    Srgb::from(LinearRgb::from(Oklab::from(lch)))
}

/// Search for a displayable color at the lightness and hue of `lch`.
///
/// With `correct_if_needed` false, no search happens: the literal
/// conversion is either in gamut or reported as [`SearchOutcome::OutOfGamut`].
/// With it true, the outcome is always [`SearchOutcome::InGamut`], holding
/// the result of [`correct`].
pub fn search(lch: Oklch, correct_if_needed: bool) -> SearchOutcome {
    if correct_if_needed {
        return SearchOutcome::InGamut(correct(lch));
    }

    let literal = oklch_to_srgb(lch);
    let in_gamut = literal.is_in_gamut();
    tracing::trace!(chroma = lch.c, in_gamut, "Gamut check without correction");
    if in_gamut {
        SearchOutcome::InGamut(literal)
    } else {
        SearchOutcome::OutOfGamut(literal)
    }
}

/// Lower chroma at fixed lightness and hue until the color is displayable.
///
/// The result always passes [`Srgb::is_in_gamut`]. Infinite chroma is
/// searched from `f64::MAX`.
pub fn correct(lch: Oklch) -> Srgb {
    let mut chroma = lch.c.min(f64::MAX);
    let mut step = chroma / 2.0;
    let mut needs_correction = false;
    let mut last_in_gamut = None;

    for iteration in 0usize.. {
        let candidate = oklch_to_srgb(lch.with_chroma(chroma));
        let in_gamut = candidate.is_in_gamut();

        tracing::trace!(
            iteration,
            chroma,
            step,
            in_gamut,
            needs_correction,
            "Gamut search candidate"
        );

        if in_gamut {
            if !needs_correction {
                return candidate;
            }
            if step <= SEARCH_TOLERANCE {
                tracing::debug!(
                    requested = lch.c,
                    chroma,
                    iterations = iteration + 1,
                    "Gamut search converged"
                );
                return candidate;
            }
            last_in_gamut = Some(candidate);
            chroma += step;
        } else if step == 0.0 {
            break;
        } else {
            chroma -= step;
        }

        needs_correction = true;
        step /= 2.0;
    }

    tracing::warn!(
        lightness = lch.l,
        chroma = lch.c,
        hue = lch.h,
        "Gamut search step exhausted"
    );
    last_in_gamut.unwrap_or_else(|| oklch_to_srgb(lch.with_chroma(chroma)).clip())
}
