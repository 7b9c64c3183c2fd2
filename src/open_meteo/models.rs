//! Open-Meteo wire format and conversion into domain models

use serde::Deserialize;

use crate::models::{CurrentWeather, DailySeries, ForecastResponse, Location};

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Absent altogether when nothing matched
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location::new(result.latitude, result.longitude, result.name, result.country)
    }
}

/// Forecast response, reduced to the blocks requested by the page
#[derive(Debug, Deserialize)]
pub struct ForecastPayload {
    pub current_weather: Option<CurrentWeatherPayload>,
    pub daily: Option<DailyPayload>,
}

/// `current_weather=true` block
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherPayload {
    pub temperature: Option<f64>,
    pub windspeed: Option<f64>,
    pub weathercode: Option<i32>,
    pub time: Option<String>,
    pub is_day: Option<u8>,
}

/// Daily weather data from `OpenMeteo`; values may be `null` for days the model does not cover
#[derive(Debug, Deserialize)]
pub struct DailyPayload {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default, rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(default, rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
    #[serde(default, rename = "weathercode")]
    pub weather_code: Vec<Option<i32>>,
}

impl From<CurrentWeatherPayload> for CurrentWeather {
    fn from(payload: CurrentWeatherPayload) -> Self {
        let defaults = CurrentWeather::default();
        CurrentWeather {
            temperature_c: payload.temperature.unwrap_or(defaults.temperature_c),
            wind_speed: payload.windspeed.unwrap_or(defaults.wind_speed),
            weather_code: payload.weathercode.unwrap_or(defaults.weather_code),
            observed_at: payload.time.unwrap_or(defaults.observed_at),
            is_day: payload.is_day.map_or(defaults.is_day, |flag| flag != 0),
        }
    }
}

impl From<DailyPayload> for DailySeries {
    fn from(payload: DailyPayload) -> Self {
        DailySeries {
            dates: payload.time,
            max_temps: payload.temperature_max,
            min_temps: payload.temperature_min,
            weather_codes: payload.weather_code,
        }
    }
}

impl From<ForecastPayload> for ForecastResponse {
    fn from(payload: ForecastPayload) -> Self {
        ForecastResponse {
            current: payload.current_weather.map(Into::into).unwrap_or_default(),
            daily: payload.daily.map(Into::into).unwrap_or_default(),
        }
    }
}
