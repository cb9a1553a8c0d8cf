//! Errors surfaced by the demo front end.

use cinecolor_core::CineColorError;

/// Errors that can occur while running a demo command.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Core(#[from] CineColorError),

    #[error("invalid sweep {from}K..{to}K by {step}K: {reason}")]
    InvalidSweep {
        from: f64,
        to: f64,
        step: f64,
        reason: &'static str,
    },

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
