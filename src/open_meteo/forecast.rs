//! Current weather and 7-day daily forecast via the Open-Meteo forecast API

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::ForecastSource;
use super::models::ForecastPayload;
use crate::Result;
use crate::config::WeatherConfig;
use crate::models::ForecastResponse;
use crate::weather::MAX_FORECAST_DAYS;

const DAILY_VARIABLES: &str = "weathercode,temperature_2m_max,temperature_2m_min";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    #[must_use]
    pub fn new(client: Client, config: &WeatherConfig) -> Self {
        Self {
            client,
            base_url: config.forecast_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current conditions plus daily values, in the location's own timezone
    #[instrument(skip(self))]
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse> {
        info!(
            "Getting 7-day forecast for coordinates: {:.4}, {:.4}",
            latitude, longitude
        );
        let start_time = Instant::now();

        let url = format!("{}/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("daily", DAILY_VARIABLES.to_string()),
                ("forecast_days", MAX_FORECAST_DAYS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: ForecastPayload = response.json().await?;
        if payload.current_weather.is_none() {
            warn!("Forecast response has no current_weather block");
        }
        let forecast = ForecastResponse::from(payload);

        info!(
            "Retrieved forecast with {} days in {:.3}s",
            forecast.daily.dates.len(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(forecast)
    }
}

#[async_trait]
impl ForecastSource for ForecastClient {
    async fn fetch(&self, latitude: f64, longitude: f64) -> Result<ForecastResponse> {
        ForecastClient::fetch(self, latitude, longitude).await
    }
}
