//! Kelvin to RGB approximation.
//!
//! Two-regime curve fit of blackbody colors by Tanner Helland. Below 6600 K
//! red is saturated and green/blue follow logarithmic fits; above it blue is
//! saturated and red/green follow power-law fits.
//!
//! # Reference
//! - Helland, Tanner (2012) — "How to Convert Temperature (K) to RGB"

use crate::color::Color;

/// Range the curve fit was derived from. Outside it the result is still a
/// valid color but no longer tracks a blackbody.
pub const FIT_RANGE: (f64, f64) = (1000.0, 40000.0);

/// Scaled temperature (`kelvin / 100`) where the two regimes meet.
const REGIME_SPLIT: f64 = 66.0;

/// Scaled temperature at or below which blue is zero.
const BLUE_CUTOFF: f64 = 19.0;

/// Approximate the RGB color of a light of the given temperature.
///
/// Total for every input: channels are clamped to `[0, 255]` after the
/// branch logic, so log/pow terms that go non-finite near or past the
/// domain edge come out as 0 or 255 instead of NaN. Opacity is 1.
///
/// ```text
/// t = kelvin / 100
/// R = 255                                   t ≤ 66
///     329.698727446 · (t − 60)^−0.1332047592   t > 66
/// G = 99.4708025861 · ln(t) − 161.1195681661  t ≤ 66
///     288.1221695283 · (t − 60)^−0.0755148492  t > 66
/// B = 255                                   t ≥ 66
///     0                                     t ≤ 19
///     138.5177312231 · ln(t − 10) − 305.0447927307
/// ```
pub fn kelvin_to_rgb(kelvin: f64) -> Color {
    kelvin_to_rgba(kelvin, 1.0)
}

/// [`kelvin_to_rgb`] with a caller-supplied opacity.
pub fn kelvin_to_rgba(kelvin: f64, opacity: f64) -> Color {
    if !(FIT_RANGE.0..=FIT_RANGE.1).contains(&kelvin) {
        tracing::trace!(kelvin, "temperature outside the fitted range");
    }

    let t = kelvin / 100.0;

    let red = if t <= REGIME_SPLIT {
        255.0
    } else {
        329.698727446 * (t - 60.0).powf(-0.1332047592)
    };

    let green = if t <= REGIME_SPLIT {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };

    let blue = if t >= REGIME_SPLIT {
        255.0
    } else if t <= BLUE_CUTOFF {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };

    Color::new(red, green, blue, opacity)
}
