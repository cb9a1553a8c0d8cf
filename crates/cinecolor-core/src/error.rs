//! Errors raised at the edges of the core (parsing and state updates).
//!
//! The color functions themselves never fail.

/// Errors that can occur outside the pure color functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CineColorError {
    #[error("unknown scenario: {0:?}")]
    UnknownScenario(String),

    #[error("temperature must be a finite number of Kelvin, got {0}")]
    InvalidTemperature(f64),
}
