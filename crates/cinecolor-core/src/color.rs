//! RGBA color value produced by the engine.
//!
//! Channels are stored as `f64` in display range (0–255) so the Kelvin
//! formulas are kept exact; rounding only happens when a color is written
//! out as text or converted to an 8-bit palette type.

use std::fmt;

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// Upper bound of an RGB channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// Clamp a channel into `[0, 255]`. NaN maps to the lower bound.
#[inline]
pub fn clamp_channel(value: f64) -> f64 {
    clamp_or_zero(value, CHANNEL_MAX)
}

/// Clamp an opacity into `[0, 1]`. NaN maps to the lower bound.
#[inline]
pub fn clamp_alpha(value: f64) -> f64 {
    clamp_or_zero(value, 1.0)
}

fn clamp_or_zero(value: f64, max: f64) -> f64 {
    // f64::clamp propagates NaN, so it has to be caught first.
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

/// An RGB color with opacity.
///
/// Every constructor clamps, so a `Color` always holds R, G, B in
/// `[0, 255]` and alpha in `[0, 1]`, never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawColor")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    alpha: f64,
}

impl Color {
    /// Neutral mid-gray with zero opacity.
    pub const TRANSPARENT_GRAY: Self = Self {
        r: 128.0,
        g: 128.0,
        b: 128.0,
        alpha: 0.0,
    };

    /// Build a color, clamping every component into range.
    pub fn new(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            alpha: clamp_alpha(alpha),
        }
    }

    /// Fully opaque color.
    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Raw `[r, g, b]` channels.
    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Same channels with a different opacity.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: clamp_alpha(alpha),
            ..self
        }
    }

    /// Channels rounded to the nearest integer.
    pub fn to_rgb8(&self) -> [u8; 3] {
        // Channels are already clamped, so the casts cannot truncate.
        [
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
        ]
    }

    /// Convert to an 8-bit sRGB value, dropping opacity.
    pub fn to_srgb8(&self) -> Srgb<u8> {
        let [r, g, b] = self.to_rgb8();
        Srgb::new(r, g, b)
    }

    /// CSS `rgba(R, G, B, A)` string, usable directly as a fill color.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

impl From<Srgb<u8>> for Color {
    fn from(rgb: Srgb<u8>) -> Self {
        Self::opaque(f64::from(rgb.red), f64::from(rgb.green), f64::from(rgb.blue))
    }
}

/// Unchecked wire form; goes through [`Color::new`] on deserialization.
#[derive(Deserialize)]
struct RawColor {
    r: f64,
    g: f64,
    b: f64,
    alpha: f64,
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        Self::new(raw.r, raw.g, raw.b, raw.alpha)
    }
}
