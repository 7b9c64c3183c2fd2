//! View model handed to the page template

use serde::Serialize;

use super::DailyForecastEntry;
use crate::weather::IconDescriptor;

/// Weather half of a successful page
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WeatherView {
    /// Canonical city name from the geocoder
    pub city: String,
    pub country: Option<String>,
    /// Current temperature rounded to whole degrees
    pub temperature: i64,
    pub wind_speed: f64,
    /// Observation time of the current conditions
    pub time: String,
    pub is_day: bool,
    pub icon: IconDescriptor,
    /// Mascot asset filename, absent when mascots are disabled
    pub mascot: Option<String>,
    pub daily: Vec<DailyForecastEntry>,
}

/// Per-request page model. Holds either weather data or an error message, never both.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ViewModel {
    query_city: String,
    error: Option<String>,
    #[serde(flatten)]
    weather: Option<WeatherView>,
}

impl ViewModel {
    /// Page showing weather for `query_city`
    #[must_use]
    pub fn success(query_city: impl Into<String>, weather: WeatherView) -> Self {
        Self {
            query_city: query_city.into(),
            error: None,
            weather: Some(weather),
        }
    }

    /// Page showing only an error message
    #[must_use]
    pub fn failure(query_city: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            query_city: query_city.into(),
            error: Some(message.into()),
            weather: None,
        }
    }

    /// City as typed by the user
    #[must_use]
    pub fn query_city(&self) -> &str {
        &self.query_city
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn weather(&self) -> Option<&WeatherView> {
        self.weather.as_ref()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
