//! Color temperature engine: Kelvin curve, white balance overlay, subject cast.
//!
//! Every function here is pure and total. Out-of-range or non-finite input
//! yields a clamped color rather than an error.

pub mod kelvin;
pub mod subject;
pub mod white_balance;

/// Lowest temperature on the light and white balance sliders.
pub const KELVIN_MIN: f64 = 2000.0;
/// Highest temperature on the light and white balance sliders.
pub const KELVIN_MAX: f64 = 10000.0;
/// Slider increment.
pub const KELVIN_STEP: f64 = 100.0;
/// Daylight reference where white balance applies no visible correction.
pub const NEUTRAL_KELVIN: f64 = 5600.0;

pub use kelvin::{kelvin_to_rgb, kelvin_to_rgba};
pub use subject::{subject_color, virtual_kelvin};
pub use white_balance::{OverlayModel, wb_filter_overlay, wb_filter_overlay_with};
