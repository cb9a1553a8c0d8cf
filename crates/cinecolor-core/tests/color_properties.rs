//! End-to-end checks of the public color API.
//!
//! Run with: `cargo test -p cinecolor-core`

use cinecolor_core::{
    Color, KELVIN_MAX, KELVIN_MIN, KELVIN_STEP, NEUTRAL_KELVIN, OverlayModel, ScenarioType,
    SimulationState, kelvin_to_rgb, subject_color, wb_filter_overlay, wb_filter_overlay_with,
};
use pretty_assertions::assert_eq;

fn assert_valid(c: Color, context: &str) {
    for v in c.channels() {
        assert!(
            !v.is_nan() && (0.0..=255.0).contains(&v),
            "{context}: channel {v} out of range"
        );
    }
    assert!(
        !c.alpha().is_nan() && (0.0..=1.0).contains(&c.alpha()),
        "{context}: alpha {} out of range",
        c.alpha()
    );
}

/// Slider positions from `from` to `to` inclusive in `KELVIN_STEP` increments.
fn slider_steps(from: f64, to: f64) -> Vec<f64> {
    let count = ((to - from) / KELVIN_STEP).abs().round() as usize;
    let dir = if to >= from { 1.0 } else { -1.0 };
    (0..=count).map(|i| from + dir * i as f64 * KELVIN_STEP).collect()
}

#[test]
fn test_kelvin_curve_stays_in_range_across_fit() {
    let mut k = 1000.0;
    while k <= 40000.0 {
        assert_valid(kelvin_to_rgb(k), &format!("{k}K"));
        k += 50.0;
    }
}

#[test]
fn test_hostile_inputs_never_escape_range() {
    let inputs = [
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MAX,
        f64::MIN,
        0.0,
        -0.0,
        1000.0 - 1e-9,
        1e-300,
    ];
    for k in inputs {
        assert_valid(kelvin_to_rgb(k), &format!("kelvin_to_rgb({k})"));
        assert_valid(wb_filter_overlay(k), &format!("wb_filter_overlay({k})"));
        assert_valid(
            wb_filter_overlay_with(OverlayModel::KelvinRemap, k),
            &format!("remap({k})"),
        );
        assert_valid(subject_color(k, 5600.0, 1.0), &format!("subject_color({k}, 5600)"));
        assert_valid(subject_color(5600.0, k, f64::NAN), &format!("subject_color(5600, {k})"));
    }
}

#[test]
fn test_overlay_pivot_is_neutral_and_invisible() {
    let c = wb_filter_overlay(NEUTRAL_KELVIN);
    assert_eq!(c.channels(), [128.0, 128.0, 128.0]);
    assert_eq!(c.alpha(), 0.0);
    assert_eq!(c.to_css(), "rgba(128, 128, 128, 0)");
}

#[test]
fn test_overlay_opacity_ramps_are_monotonic() {
    let mut last = 0.0;
    for wb in slider_steps(NEUTRAL_KELVIN, KELVIN_MIN) {
        let alpha = wb_filter_overlay(wb).alpha();
        assert!(alpha >= last, "opacity dropped at {wb}K: {alpha} < {last}");
        last = alpha;
    }
    assert!((last - 0.9).abs() < 1e-9, "cool end opacity {last}");

    let mut last = 0.0;
    for wb in slider_steps(NEUTRAL_KELVIN, KELVIN_MAX) {
        let alpha = wb_filter_overlay(wb).alpha();
        assert!(alpha >= last, "opacity dropped at {wb}K: {alpha} < {last}");
        last = alpha;
    }
    assert!((last - 0.8).abs() < 1e-9, "warm end opacity {last}");
}

#[test]
fn test_overlay_inverts_white_balance() {
    let tungsten = wb_filter_overlay(3200.0);
    assert!(tungsten.b() > tungsten.r(), "3200K overlay should be blue: {tungsten}");

    let shade = wb_filter_overlay(8000.0);
    assert!(shade.r() > shade.b(), "8000K overlay should be orange: {shade}");
}

#[test]
fn test_overlay_channels_are_whole_numbers() {
    for wb in slider_steps(KELVIN_MIN, KELVIN_MAX) {
        for v in wb_filter_overlay(wb).channels() {
            assert_eq!(v, v.round(), "{wb}K produced fractional channel {v}");
        }
    }
}

#[test]
fn test_matched_white_balance_renders_daylight_white() {
    let daylight = kelvin_to_rgb(NEUTRAL_KELVIN);
    for k in slider_steps(KELVIN_MIN, KELVIN_MAX) {
        assert_eq!(subject_color(k, k, 1.0), daylight, "light = wb = {k}K");
    }
    let c = subject_color(5600.0, 5600.0, 1.0);
    assert_eq!(c.alpha(), 1.0);
    assert_eq!(c.to_css(), "rgba(255, 239, 225, 1)");
}

#[test]
fn test_warmer_light_strictly_warms_subject() {
    // Below 6600K red is saturated, so compare the R-B spread.
    let spread = |light: f64| {
        let c = subject_color(light, 5600.0, 1.0);
        c.r() - c.b()
    };
    let mut last = spread(KELVIN_MAX);
    for light in slider_steps(KELVIN_MAX - KELVIN_STEP, 3000.0) {
        let current = spread(light);
        assert!(current > last, "{light}K not warmer than its neighbour");
        last = current;
    }

    let warm = subject_color(3200.0, 5600.0, 1.0);
    let cool = subject_color(8000.0, 5600.0, 1.0);
    assert!(warm.r() > cool.r() && warm.b() < cool.b());
}

#[test]
fn test_daylight_6500_matches_formula() {
    let [r, g, b] = kelvin_to_rgb(6500.0).to_rgb8();
    assert_eq!(r, 255);
    assert!(g.abs_diff(254) <= 2, "green {g}");
    assert!(b.abs_diff(250) <= 2, "blue {b}");
}

#[test]
fn test_blue_hour_session() {
    let mut state = SimulationState::new(ScenarioType::BlueHour);
    let opening = state.frame();
    assert_eq!(opening.subject, kelvin_to_rgb(NEUTRAL_KELVIN));
    assert!(opening.background_overlay.b() > opening.background_overlay.r());

    // Daylight camera on tungsten light: subject turns orange.
    state.set_wb_kelvin(5600.0).unwrap();
    let frame = state.frame();
    assert!(frame.subject.r() > frame.subject.b());
    assert_eq!(frame.background_overlay, Color::TRANSPARENT_GRAY);

    state.auto_white();
    assert_eq!(state.frame(), opening);
}

#[test]
fn test_frame_serializes_for_front_end() {
    let frame = SimulationState::new(ScenarioType::Sunset).frame();
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["scenario"], "sunset");
    assert_eq!(json["light_kelvin"], 5600.0);
    assert_eq!(json["comparing"], false);
    assert_eq!(json["background_overlay"]["alpha"], 0.0);
    assert_eq!(json["subject"]["r"], 255.0);
}
