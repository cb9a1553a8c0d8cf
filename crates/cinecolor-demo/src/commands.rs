//! Command implementations. Each returns the message to print.

use cinecolor_core::{
    OverlayModel, ScenarioType, SimulationState, subject_color, virtual_kelvin,
    wb_filter_overlay_with,
};

use crate::error::DemoError;
use crate::ipc::{DemoToUi, SweepRow};

/// Upper bound on sweep length so a tiny step cannot stall the terminal.
const MAX_SWEEP_ROWS: usize = 10_000;

/// Inputs for a single frame.
#[derive(Debug, Clone, Default)]
pub struct FrameRequest {
    pub scenario: ScenarioType,
    pub light_kelvin: Option<f64>,
    pub wb_kelvin: Option<f64>,
    pub auto_white: bool,
    pub compare: bool,
    pub overlay_model: OverlayModel,
}

/// Drive a [`SimulationState`] the way the UI would and evaluate one frame.
pub fn frame(request: &FrameRequest) -> Result<DemoToUi, DemoError> {
    let mut state = SimulationState::new(request.scenario);
    if let Some(kelvin) = request.light_kelvin {
        state.set_light_kelvin(kelvin)?;
    }
    if let Some(kelvin) = request.wb_kelvin {
        state.set_wb_kelvin(kelvin)?;
    }
    if request.auto_white {
        state.auto_white();
    }
    if request.compare {
        state.begin_compare();
    }

    let mut frame = state.frame();
    frame.background_overlay = wb_filter_overlay_with(request.overlay_model, frame.wb_kelvin);
    tracing::debug!(
        scenario = %frame.scenario,
        light = frame.light_kelvin,
        wb = frame.wb_kelvin,
        "evaluated frame"
    );

    Ok(DemoToUi::Frame {
        overlay_model: request.overlay_model,
        frame,
    })
}

/// Evaluate overlay and subject color for white balance settings from
/// `from` to `to` inclusive, with the light held at `light_kelvin`.
pub fn sweep(
    from: f64,
    to: f64,
    step: f64,
    light_kelvin: f64,
    overlay_model: OverlayModel,
) -> Result<DemoToUi, DemoError> {
    let invalid = |reason| DemoError::InvalidSweep {
        from,
        to,
        step,
        reason,
    };
    if !(from.is_finite() && to.is_finite() && step.is_finite() && light_kelvin.is_finite()) {
        return Err(invalid("values must be finite"));
    }
    if step <= 0.0 {
        return Err(invalid("step must be positive"));
    }
    if from > to {
        return Err(invalid("range is empty"));
    }
    // Checked in f64: a huge span over a small step does not fit a usize.
    let span = ((to - from) / step).floor();
    if span >= MAX_SWEEP_ROWS as f64 {
        return Err(invalid("too many rows"));
    }
    let count = span as usize + 1;

    let rows: Vec<SweepRow> = (0..count)
        .map(|i| {
            let wb_kelvin = from + i as f64 * step;
            SweepRow {
                wb_kelvin,
                light_kelvin,
                virtual_kelvin: virtual_kelvin(light_kelvin, wb_kelvin),
                background_overlay: wb_filter_overlay_with(overlay_model, wb_kelvin),
                subject: subject_color(light_kelvin, wb_kelvin, 1.0),
            }
        })
        .collect();
    tracing::debug!(rows = rows.len(), "evaluated sweep");

    Ok(DemoToUi::Sweep {
        overlay_model,
        rows,
    })
}

/// List the built-in scenarios.
pub fn scenarios() -> DemoToUi {
    DemoToUi::Scenarios {
        scenarios: ScenarioType::all().iter().map(|s| s.config()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinecolor_core::{
        CineColorError, Color, Frame, KELVIN_MAX, KELVIN_MIN, NEUTRAL_KELVIN, kelvin_to_rgb,
    };

    fn unwrap_frame(msg: DemoToUi) -> Frame {
        match msg {
            DemoToUi::Frame { frame, .. } => frame,
            other => panic!("expected a frame, got {other:?}"),
        }
    }

    fn unwrap_rows(msg: DemoToUi) -> Vec<SweepRow> {
        match msg {
            DemoToUi::Sweep { rows, .. } => rows,
            other => panic!("expected a sweep, got {other:?}"),
        }
    }

    #[test]
    fn test_default_frame_is_neutral() {
        let frame = unwrap_frame(frame(&FrameRequest::default()).unwrap());
        assert_eq!(frame.subject, kelvin_to_rgb(NEUTRAL_KELVIN));
        assert_eq!(frame.background_overlay, Color::TRANSPARENT_GRAY);
    }

    #[test]
    fn test_auto_white_applies_after_light() {
        let request = FrameRequest {
            light_kelvin: Some(3000.0),
            wb_kelvin: Some(9000.0),
            auto_white: true,
            ..Default::default()
        };
        let frame = unwrap_frame(frame(&request).unwrap());
        assert_eq!(frame.wb_kelvin, 3000.0);
        assert_eq!(frame.subject, kelvin_to_rgb(NEUTRAL_KELVIN));
    }

    #[test]
    fn test_compare_renders_scenario_defaults() {
        let request = FrameRequest {
            scenario: ScenarioType::BlueHour,
            light_kelvin: Some(7000.0),
            compare: true,
            ..Default::default()
        };
        let frame = unwrap_frame(frame(&request).unwrap());
        assert!(frame.comparing);
        assert_eq!(frame.light_kelvin, 3200.0);
    }

    #[test]
    fn test_remap_model_replaces_background() {
        let request = FrameRequest {
            overlay_model: OverlayModel::KelvinRemap,
            ..Default::default()
        };
        let frame = unwrap_frame(frame(&request).unwrap());
        assert_eq!(frame.background_overlay.alpha(), 0.6);
    }

    #[test]
    fn test_non_finite_light_is_reported() {
        let request = FrameRequest {
            light_kelvin: Some(f64::NAN),
            ..Default::default()
        };
        let err = frame(&request).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Core(CineColorError::InvalidTemperature(_))
        ));
    }

    #[test]
    fn test_sweep_covers_slider_range() {
        let rows = unwrap_rows(
            sweep(KELVIN_MIN, KELVIN_MAX, 100.0, NEUTRAL_KELVIN, OverlayModel::Anchored).unwrap(),
        );
        assert_eq!(rows.len(), 81);
        assert_eq!(rows[0].wb_kelvin, KELVIN_MIN);
        assert_eq!(rows[80].wb_kelvin, KELVIN_MAX);
        let pivot = rows.iter().find(|r| r.wb_kelvin == NEUTRAL_KELVIN).unwrap();
        assert_eq!(pivot.background_overlay, Color::TRANSPARENT_GRAY);
        assert_eq!(pivot.subject, kelvin_to_rgb(NEUTRAL_KELVIN));
    }

    #[test]
    fn test_sweep_stops_at_or_before_end() {
        let rows = unwrap_rows(sweep(2000.0, 2250.0, 100.0, 5600.0, OverlayModel::Anchored).unwrap());
        let settings: Vec<f64> = rows.iter().map(|r| r.wb_kelvin).collect();
        assert_eq!(settings, vec![2000.0, 2100.0, 2200.0]);
    }

    #[test]
    fn test_sweep_accepts_row_limit() {
        let rows = unwrap_rows(sweep(0.0, 9999.0, 1.0, 5600.0, OverlayModel::Anchored).unwrap());
        assert_eq!(rows.len(), MAX_SWEEP_ROWS);
        assert!(sweep(0.0, 10000.0, 1.0, 5600.0, OverlayModel::Anchored).is_err());
    }

    #[test]
    fn test_sweep_rejects_bad_ranges() {
        for (from, to, step) in [
            (2000.0, 10000.0, 0.0),
            (2000.0, 10000.0, -100.0),
            (9000.0, 2000.0, 100.0),
            (f64::NAN, 2000.0, 100.0),
            (2000.0, 10000.0, 0.001),
            (2000.0, 1e300, 1.0),
            (-1e308, 1e308, 1.0),
        ] {
            let result = sweep(from, to, step, 5600.0, OverlayModel::Anchored);
            assert!(
                matches!(result, Err(DemoError::InvalidSweep { .. })),
                "{from}..{to} by {step} should be rejected"
            );
        }
    }

    #[test]
    fn test_messages_use_type_data_envelope() {
        let json = serde_json::to_value(scenarios()).unwrap();
        assert_eq!(json["type"], "Scenarios");
        assert_eq!(json["data"]["scenarios"][1]["id"], "blue_hour");

        let json = serde_json::to_value(frame(&FrameRequest::default()).unwrap()).unwrap();
        assert_eq!(json["type"], "Frame");
        assert_eq!(json["data"]["overlay_model"], "anchored");
        assert_eq!(json["data"]["frame"]["subject"]["alpha"], 1.0);
    }
}
