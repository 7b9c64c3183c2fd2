//! Shared Open-Meteo fixtures for the integration tests
#![allow(dead_code)]

use tenki::config::WeatherConfig;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Weather config pointing both APIs at the mock server
pub fn mock_weather_config(mock_server: &MockServer, timeout_seconds: u32) -> WeatherConfig {
    WeatherConfig {
        geocoding_base_url: mock_server.uri(),
        forecast_base_url: mock_server.uri(),
        timeout_seconds,
        ..Default::default()
    }
}

/// Geocoding answer for Zurich in Japanese
pub fn zurich_geocoding_response() -> serde_json::Value {
    serde_json::json!({
        "results": [{
            "id": 2657896,
            "name": "チューリッヒ",
            "latitude": 47.36667,
            "longitude": 8.55,
            "elevation": 408.0,
            "feature_code": "PPLA",
            "country_code": "CH",
            "timezone": "Europe/Zurich",
            "population": 341730,
            "country": "スイス",
            "admin1": "チューリッヒ州"
        }],
        "generationtime_ms": 0.7
    })
}

/// Geocoding answer with nothing matched
pub fn empty_geocoding_response() -> serde_json::Value {
    serde_json::json!({ "generationtime_ms": 0.3 })
}

/// Seven-day forecast with `current_weather.weathercode` set to `current_code`
pub fn week_forecast_response(current_code: i32) -> serde_json::Value {
    serde_json::json!({
        "latitude": 47.36,
        "longitude": 8.559999,
        "generationtime_ms": 0.1,
        "utc_offset_seconds": 3600,
        "timezone": "Europe/Zurich",
        "timezone_abbreviation": "CET",
        "elevation": 409.0,
        "current_weather_units": {
            "time": "iso8601",
            "interval": "seconds",
            "temperature": "°C",
            "windspeed": "km/h",
            "winddirection": "°",
            "is_day": "",
            "weathercode": "wmo code"
        },
        "current_weather": {
            "time": "2024-01-15T12:00",
            "interval": 900,
            "temperature": 7.6,
            "windspeed": 9.4,
            "winddirection": 240,
            "is_day": 1,
            "weathercode": current_code
        },
        "daily_units": {
            "time": "iso8601",
            "weathercode": "wmo code",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C"
        },
        "daily": {
            "time": [
                "2024-01-15", "2024-01-16", "2024-01-17", "2024-01-18",
                "2024-01-19", "2024-01-20", "2024-01-21"
            ],
            "weathercode": [1, 3, 61, 95, 71, 2, 45],
            "temperature_2m_max": [8.2, 6.5, 5.1, 4.4, 1.9, 3.5, 7.0],
            "temperature_2m_min": [1.1, 0.5, -0.6, -1.5, -3.2, -2.5, 0.0]
        }
    })
}

pub async fn mount_geocoding(mock_server: &MockServer, city: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", city))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

pub async fn mount_forecast(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}
