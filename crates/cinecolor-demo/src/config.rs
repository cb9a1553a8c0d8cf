//! Application configuration for the demo.

use cinecolor_core::ScenarioType;

/// Environment variable selecting the startup scenario.
const SCENARIO_ENV: &str = "CINECOLOR_SCENARIO";
/// Environment variable switching output to JSON when set.
const JSON_ENV: &str = "CINECOLOR_JSON";

/// Runtime configuration for the CineColor demo.
///
/// `Default` reads the environment; command-line flags override it.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scenario loaded when none is given on the command line.
    pub scenario: ScenarioType,
    /// Emit JSON messages instead of text.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl AppConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let scenario = match lookup(SCENARIO_ENV) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::warn!("ignoring {SCENARIO_ENV}: {err}");
                ScenarioType::default()
            }),
            None => ScenarioType::default(),
        };
        Self {
            scenario,
            json: lookup(JSON_ENV).is_some(),
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, scenario: Option<ScenarioType>, json: bool) -> Self {
        if let Some(scenario) = scenario {
            self.scenario = scenario;
        }
        self.json |= json;
        self
    }
}
