//! Interactive simulation state.
//!
//! `SimulationState` is the small record a front end owns: which scenario is
//! loaded, where the two sliders sit, and whether the compare gesture is
//! held. It holds no colors. [`SimulationState::frame`] evaluates the engine
//! fresh each time it is asked.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::CineColorError;
use crate::scenario::ScenarioType;
use crate::temperature::{KELVIN_MAX, KELVIN_MIN, subject_color, wb_filter_overlay};

/// Slider positions and view mode for one learner session.
///
/// Deserialized states go through the same slider validation as the setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct SimulationState {
    /// Scenario currently loaded.
    pub scenario: ScenarioType,
    /// Light temperature chosen by the learner.
    pub light_kelvin: f64,
    /// White balance chosen by the learner.
    pub wb_kelvin: f64,
    /// Whether the scenario's original temperatures are being shown.
    pub comparing: bool,
}

/// Colors to draw for one evaluation of the state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub scenario: ScenarioType,
    /// Light temperature the frame was rendered with.
    pub light_kelvin: f64,
    /// White balance the frame was rendered with.
    pub wb_kelvin: f64,
    pub comparing: bool,
    /// Fill for the presenter.
    pub subject: Color,
    /// Overlay blended onto the background image.
    pub background_overlay: Color,
}

impl SimulationState {
    /// Fresh state with the scenario's default temperatures.
    pub fn new(scenario: ScenarioType) -> Self {
        let cfg = scenario.config();
        Self {
            scenario,
            light_kelvin: cfg.default_light_kelvin,
            wb_kelvin: cfg.default_wb_kelvin,
            comparing: false,
        }
    }

    /// Load another scenario. Resets both sliders and ends compare mode.
    pub fn set_scenario(&mut self, scenario: ScenarioType) {
        tracing::debug!(from = %self.scenario, to = %scenario, "switching scenario");
        *self = Self::new(scenario);
    }

    /// Move the light slider. The value is clamped to the slider range.
    pub fn set_light_kelvin(&mut self, kelvin: f64) -> Result<(), CineColorError> {
        self.light_kelvin = slider_value(kelvin)?;
        tracing::trace!(light_kelvin = self.light_kelvin, "light changed");
        Ok(())
    }

    /// Move the white balance slider. The value is clamped to the slider range.
    pub fn set_wb_kelvin(&mut self, kelvin: f64) -> Result<(), CineColorError> {
        self.wb_kelvin = slider_value(kelvin)?;
        tracing::trace!(wb_kelvin = self.wb_kelvin, "white balance changed");
        Ok(())
    }

    /// Match the white balance to the current light.
    pub fn auto_white(&mut self) {
        tracing::debug!(kelvin = self.light_kelvin, "auto white");
        self.wb_kelvin = self.light_kelvin;
    }

    /// Start showing the scenario's original temperatures.
    pub fn begin_compare(&mut self) {
        self.comparing = true;
    }

    /// Return to the learner's temperatures.
    pub fn end_compare(&mut self) {
        self.comparing = false;
    }

    /// `(light, wb)` that should be rendered right now.
    ///
    /// While comparing these are the scenario defaults; the learner's own
    /// values stay untouched so the sliders do not jump.
    pub fn active_temperatures(&self) -> (f64, f64) {
        if self.comparing {
            let cfg = self.scenario.config();
            (cfg.default_light_kelvin, cfg.default_wb_kelvin)
        } else {
            (self.light_kelvin, self.wb_kelvin)
        }
    }

    /// Evaluate subject and background colors for the active temperatures.
    pub fn frame(&self) -> Frame {
        let (light_kelvin, wb_kelvin) = self.active_temperatures();
        Frame {
            scenario: self.scenario,
            light_kelvin,
            wb_kelvin,
            comparing: self.comparing,
            subject: subject_color(light_kelvin, wb_kelvin, 1.0),
            background_overlay: wb_filter_overlay(wb_kelvin),
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(ScenarioType::default())
    }
}

/// Unchecked wire form of [`SimulationState`].
#[derive(Deserialize)]
struct RawState {
    scenario: ScenarioType,
    light_kelvin: f64,
    wb_kelvin: f64,
    #[serde(default)]
    comparing: bool,
}

impl TryFrom<RawState> for SimulationState {
    type Error = CineColorError;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        Ok(Self {
            scenario: raw.scenario,
            light_kelvin: slider_value(raw.light_kelvin)?,
            wb_kelvin: slider_value(raw.wb_kelvin)?,
            comparing: raw.comparing,
        })
    }
}

fn slider_value(kelvin: f64) -> Result<f64, CineColorError> {
    if !kelvin.is_finite() {
        return Err(CineColorError::InvalidTemperature(kelvin));
    }
    Ok(kelvin.clamp(KELVIN_MIN, KELVIN_MAX))
}
