//! Open-Meteo API clients
//!
//! Both endpoints are free and need no API key. Each call is a single GET with
//! a bounded timeout; there is no caching and no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::WeatherConfig;
use crate::models::{ForecastResponse, Location};
use crate::{Result, TenkiError};

pub mod forecast;
pub mod geocoding;
pub mod models;

pub use forecast::ForecastClient;
pub use geocoding::GeocodingClient;

/// Resolves a city name to a location
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, city: &str) -> Result<Location>;
}

/// Supplies current weather and daily forecast for coordinates
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse>;
}

/// HTTP client shared by both Open-Meteo clients
pub fn build_http_client(config: &WeatherConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds.into()))
        .user_agent(concat!("tenki/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| TenkiError::config(format!("Failed to create HTTP client: {e}")))
}
