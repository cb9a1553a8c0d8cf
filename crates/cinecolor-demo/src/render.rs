//! Plain-text rendering of demo output.

use cinecolor_core::{Color, Frame, OverlayModel, ScenarioConfig};

use crate::ipc::SweepRow;

/// `#rrggbb rgba(...)` for a color.
fn swatch(color: &Color) -> String {
    format!("#{:x} {color}", color.to_srgb8())
}

/// Render one frame as an aligned block of text.
pub fn frame_text(frame: &Frame, overlay_model: OverlayModel) -> String {
    let config = frame.scenario.config();
    let mut out = format!("{} ({})\n", config.title, frame.scenario);
    if frame.comparing {
        out.push_str("  [ORIGINAL]\n");
    }
    out.push_str(&format!("  light          {}K\n", frame.light_kelvin));
    out.push_str(&format!("  white balance  {}K\n", frame.wb_kelvin));
    out.push_str(&format!("  subject        {}\n", swatch(&frame.subject)));
    out.push_str(&format!(
        "  background     {} ({})\n",
        swatch(&frame.background_overlay),
        overlay_model.label()
    ));
    out
}

/// Render a sweep as a table, one row per white balance setting.
pub fn sweep_text(rows: &[SweepRow], overlay_model: OverlayModel) -> String {
    let mut out = format!("overlay model: {}\n", overlay_model.label());
    out.push_str(&format!(
        "{:>8}  {:>8}  {:<32}  {:<32}\n",
        "wb", "light", "background", "subject"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>7}K  {:>7}K  {:<32}  {:<32}\n",
            row.wb_kelvin,
            row.light_kelvin,
            swatch(&row.background_overlay),
            swatch(&row.subject)
        ));
    }
    out
}

/// Render the scenario catalogue.
pub fn scenarios_text(scenarios: &[&ScenarioConfig]) -> String {
    scenarios
        .iter()
        .map(|config| {
            format!(
                "{:<10} {} (light {}K, white balance {}K)\n           {}\n           Goal: {}\n",
                config.id.id(),
                config.title,
                config.default_light_kelvin,
                config.default_wb_kelvin,
                config.description,
                config.target_description
            )
        })
        .collect()
}
