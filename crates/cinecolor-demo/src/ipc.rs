//! JSON message contracts written by the demo.
//!
//! Messages follow the `#[serde(tag = "type", content = "data")]` envelope
//! so a UI can dispatch on `type` the same way for every command.

use serde::Serialize;

use cinecolor_core::{Color, Frame, OverlayModel, ScenarioConfig};

/// Messages from the demo to whoever consumes its stdout.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum DemoToUi {
    /// One evaluated frame.
    Frame {
        /// Overlay model the background was computed with.
        overlay_model: OverlayModel,
        /// Subject and background colors.
        frame: Frame,
    },

    /// White balance sweep.
    Sweep {
        /// Overlay model the rows were computed with.
        overlay_model: OverlayModel,
        /// One row per white balance setting.
        rows: Vec<SweepRow>,
    },

    /// Built-in scenario catalogue.
    Scenarios {
        scenarios: Vec<&'static ScenarioConfig>,
    },
}

/// Colors for a single white balance setting in a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub wb_kelvin: f64,
    pub light_kelvin: f64,
    /// Temperature the subject color was looked up at.
    pub virtual_kelvin: f64,
    pub background_overlay: Color,
    pub subject: Color,
}
