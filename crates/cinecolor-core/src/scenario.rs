//! Built-in teaching scenarios.
//!
//! Each scenario is a scene with a characteristic sky and the light/white
//! balance pair it opens with. The learner's task is to keep the presenter
//! neutral while pushing the sky color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CineColorError;

/// Identifies a scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    /// Presenter in front of a red-orange sunset sky.
    #[default]
    Sunset,
    /// Presenter in front of a deep blue dusk skyline.
    BlueHour,
}

impl ScenarioType {
    /// Identifier used on the wire and the command line.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sunset => "sunset",
            Self::BlueHour => "blue_hour",
        }
    }

    /// All built-in scenarios, in menu order.
    pub fn all() -> &'static [Self] {
        const ALL: [ScenarioType; 2] = [ScenarioType::Sunset, ScenarioType::BlueHour];
        &ALL
    }

    /// Static configuration for this scenario.
    pub fn config(&self) -> &'static ScenarioConfig {
        match self {
            Self::Sunset => &SUNSET,
            Self::BlueHour => &BLUE_HOUR,
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScenarioType {
    type Err = CineColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "sunset" => Ok(Self::Sunset),
            "blue_hour" => Ok(Self::BlueHour),
            _ => Err(CineColorError::UnknownScenario(s.to_string())),
        }
    }
}

/// Scene description and starting temperatures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioConfig {
    pub id: ScenarioType,
    pub title: &'static str,
    pub description: &'static str,
    /// Background photograph the overlay is blended onto.
    pub background_url: &'static str,
    /// Light temperature the scenario opens with.
    pub default_light_kelvin: f64,
    /// White balance the scenario opens with.
    pub default_wb_kelvin: f64,
    /// What the learner should try to achieve.
    pub target_description: &'static str,
}

static SUNSET: ScenarioConfig = ScenarioConfig {
    id: ScenarioType::Sunset,
    title: "Sunset",
    description: "Presenting in front of a sunset. The sky is a warm reddish orange.",
    background_url: "https://images.unsplash.com/photo-1470252649378-9c29740c9fa8?q=80&w=1920&auto=format&fit=crop",
    default_light_kelvin: 5600.0,
    default_wb_kelvin: 5600.0,
    target_description: "Deepen the red of the sky while keeping the subject neutral white. \
        (Hint: set light and white balance to daylight, around 5600K-6500K or higher.)",
};

static BLUE_HOUR: ScenarioConfig = ScenarioConfig {
    id: ScenarioType::BlueHour,
    title: "Blue Hour",
    description: "Presenting during the blue hour. The sky is a deep blue.",
    background_url: "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?q=80&w=1920&auto=format&fit=crop",
    default_light_kelvin: 3200.0,
    default_wb_kelvin: 3200.0,
    target_description: "Deepen the blue of the sky while keeping the subject neutral. \
        (Hint: set light and white balance to tungsten, around 3200K.)",
};
