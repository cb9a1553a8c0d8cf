//! CineColor Core — color temperature and white balance simulation.
//!
//! This crate contains the color science (Kelvin curve, white balance
//! overlay, subject cast), the built-in scenarios and the simulation state
//! a front end drives. No rendering or framework dependencies.

pub mod color;
pub mod error;
pub mod scenario;
pub mod simulation;
pub mod temperature;

// Re-exports for convenience.
pub use color::Color;
pub use error::CineColorError;
pub use scenario::{ScenarioConfig, ScenarioType};
pub use simulation::{Frame, SimulationState};
pub use temperature::{
    KELVIN_MAX, KELVIN_MIN, KELVIN_STEP, NEUTRAL_KELVIN, OverlayModel, kelvin_to_rgb,
    kelvin_to_rgba, subject_color, virtual_kelvin, wb_filter_overlay, wb_filter_overlay_with,
};
