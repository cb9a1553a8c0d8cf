//! White balance compensation overlay.
//!
//! A camera's white balance is an inverse correction: set to a low Kelvin
//! value it assumes warm light and pushes the frame toward blue; set high it
//! assumes cool light and pushes toward orange. The overlay models that push
//! as a tint blended over everything the foreground light does not reach
//! (sky, background).

use serde::{Deserialize, Serialize};

use super::kelvin::kelvin_to_rgba;
use super::{KELVIN_MAX, KELVIN_MIN, NEUTRAL_KELVIN};
use crate::color::Color;

/// Tint injected at the lowest white balance setting.
const AZURE: [f64; 3] = [0.0, 80.0, 255.0];
/// Tint injected at the highest white balance setting.
const ORANGE: [f64; 3] = [255.0, 140.0, 0.0];
/// Overlay opacity at [`KELVIN_MIN`].
const AZURE_MAX_ALPHA: f64 = 0.9;
/// Overlay opacity at [`KELVIN_MAX`].
const ORANGE_MAX_ALPHA: f64 = 0.8;

/// Overlay opacity used by [`OverlayModel::KelvinRemap`].
const REMAP_ALPHA: f64 = 0.6;
/// Temperature the remap model renders at the neutral setting.
const REMAP_PIVOT_KELVIN: f64 = 6500.0;
/// How far past the pivot the remap model goes at [`KELVIN_MIN`].
const REMAP_COOL_SPAN: f64 = 20000.0;
/// How far below the pivot the remap model goes at [`KELVIN_MAX`].
const REMAP_WARM_SPAN: f64 = 4500.0;

/// How the overlay color is derived from the white balance setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayModel {
    /// Interpolate between a neutral anchor and fixed azure/orange anchors.
    #[default]
    Anchored,
    /// Earlier model: invert the setting around the neutral point and run the
    /// result through the Kelvin curve at a fixed opacity. Not continuous at
    /// the neutral point.
    KelvinRemap,
}

impl OverlayModel {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Anchored => "anchored",
            Self::KelvinRemap => "kelvin remap",
        }
    }
}

/// Tint the camera's white balance correction applies to the frame.
///
/// Depends on the white balance setting alone, never on the light.
///
/// # Algorithm
/// 1. At [`NEUTRAL_KELVIN`] the overlay is mid-gray at zero opacity
/// 2. Below it, `t = (5600 − wb) / 3600` and each channel moves linearly
///    toward azure `(0, 80, 255)` while opacity ramps to 0.9
/// 3. Above it, `t = (wb − 5600) / 4400` and the target is orange
///    `(255, 140, 0)` with opacity ramping to 0.8
/// 4. `t` saturates at 1 past the slider range; channels are rounded
pub fn wb_filter_overlay(wb_kelvin: f64) -> Color {
    anchored_overlay(wb_kelvin)
}

/// [`wb_filter_overlay`] using an explicit [`OverlayModel`].
pub fn wb_filter_overlay_with(model: OverlayModel, wb_kelvin: f64) -> Color {
    match model {
        OverlayModel::Anchored => anchored_overlay(wb_kelvin),
        OverlayModel::KelvinRemap => remapped_overlay(wb_kelvin),
    }
}

fn anchored_overlay(wb_kelvin: f64) -> Color {
    let (target, max_alpha, t) = if wb_kelvin < NEUTRAL_KELVIN {
        let t = (NEUTRAL_KELVIN - wb_kelvin) / (NEUTRAL_KELVIN - KELVIN_MIN);
        (AZURE, AZURE_MAX_ALPHA, t)
    } else {
        let t = (wb_kelvin - NEUTRAL_KELVIN) / (KELVIN_MAX - NEUTRAL_KELVIN);
        (ORANGE, ORANGE_MAX_ALPHA, t)
    };
    // NaN stays NaN here and is zeroed by Color::new.
    let t = t.clamp(0.0, 1.0);

    let neutral = Color::TRANSPARENT_GRAY.channels();
    let channel = |i: usize| lerp(neutral[i], target[i], t).round();

    Color::new(channel(0), channel(1), channel(2), lerp(0.0, max_alpha, t))
}

fn remapped_overlay(wb_kelvin: f64) -> Color {
    let simulated = if wb_kelvin < NEUTRAL_KELVIN {
        let factor = (NEUTRAL_KELVIN - wb_kelvin) / (NEUTRAL_KELVIN - KELVIN_MIN);
        REMAP_PIVOT_KELVIN + factor * REMAP_COOL_SPAN
    } else {
        let factor = (wb_kelvin - NEUTRAL_KELVIN) / (KELVIN_MAX - NEUTRAL_KELVIN);
        REMAP_PIVOT_KELVIN - factor * REMAP_WARM_SPAN
    };
    kelvin_to_rgba(simulated, REMAP_ALPHA)
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
