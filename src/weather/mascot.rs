//! Mascot selection shown beside the current weather icon

use serde::{Deserialize, Serialize};

use super::classifier::is_rain_code;

/// At or below this temperature the bundled-up mascot appears
pub const COLD_THRESHOLD_C: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mascot {
    /// Holding an umbrella
    Rainy,
    /// Wrapped in a scarf
    Cold,
    Sunny,
}

impl Mascot {
    /// Asset filename under `/static/mascots`
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Mascot::Rainy => "character_rainy.svg",
            Mascot::Cold => "character_cold.svg",
            Mascot::Sunny => "character_sunny.svg",
        }
    }
}

/// Pick the mascot for the current conditions. Rain wins over cold, cold over sunny.
#[must_use]
pub fn select_mascot(code: i32, temperature_c: f64) -> Mascot {
    if is_rain_code(code) {
        Mascot::Rainy
    } else if temperature_c <= COLD_THRESHOLD_C {
        Mascot::Cold
    } else {
        Mascot::Sunny
    }
}
