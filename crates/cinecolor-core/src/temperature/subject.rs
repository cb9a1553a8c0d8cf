//! Apparent color of a neutral subject under a light, as seen by a camera.

use super::NEUTRAL_KELVIN;
use super::kelvin::kelvin_to_rgba;
use crate::color::Color;

/// Temperature whose Kelvin color equals the cast a light/white balance pair
/// leaves on a white subject.
///
/// ```text
/// virtual = 5600 + (light − wb)
/// ```
///
/// A matched pair lands on the neutral point whatever the absolute values.
#[inline]
pub fn virtual_kelvin(light_kelvin: f64, wb_kelvin: f64) -> f64 {
    NEUTRAL_KELVIN + (light_kelvin - wb_kelvin)
}

/// Color of a white subject lit at `light_kelvin` and shot with the camera
/// balanced at `wb_kelvin`.
///
/// Light warmer than the camera expects (`light < wb`) pulls the virtual
/// temperature down and renders orange; cooler light renders blue.
pub fn subject_color(light_kelvin: f64, wb_kelvin: f64, opacity: f64) -> Color {
    kelvin_to_rgba(virtual_kelvin(light_kelvin, wb_kelvin), opacity)
}
