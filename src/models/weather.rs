//! Current weather and raw daily series as delivered by the forecast API

use serde::{Deserialize, Serialize};

/// Weather code used whenever the upstream omits one (overcast)
pub const FALLBACK_WEATHER_CODE: i32 = 3;

/// Current conditions at the resolved location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: i32,
    /// Local observation time, ISO 8601 without seconds
    pub observed_at: String,
    /// Whether the observation falls in daylight
    pub is_day: bool,
}

impl Default for CurrentWeather {
    fn default() -> Self {
        Self {
            temperature_c: 0.0,
            wind_speed: 0.0,
            weather_code: FALLBACK_WEATHER_CODE,
            observed_at: String::new(),
            is_day: true,
        }
    }
}

/// Parallel daily arrays; index `i` of every vector describes the same day
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DailySeries {
    /// ISO dates, soonest first
    pub dates: Vec<String>,
    /// Daily maximum temperature in Celsius
    pub max_temps: Vec<Option<f64>>,
    /// Daily minimum temperature in Celsius
    pub min_temps: Vec<Option<f64>>,
    /// Daily WMO weather code
    pub weather_codes: Vec<Option<i32>>,
}

/// Everything the page needs from one forecast call
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ForecastResponse {
    pub current: CurrentWeather,
    pub daily: DailySeries,
}
