//! City name to coordinates via the Open-Meteo geocoding API

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use super::Geocoder;
use super::models::GeocodingResponse;
use crate::config::WeatherConfig;
use crate::models::Location;
use crate::{Result, TenkiError};

/// Resolves free-text city names, keeping only the best match
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    base_url: String,
    language: String,
}

impl GeocodingClient {
    #[must_use]
    pub fn new(client: Client, config: &WeatherConfig) -> Self {
        Self {
            client,
            base_url: config.geocoding_base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        }
    }

    /// Look up `city` and return the first match
    #[instrument(skip(self), fields(language = %self.language))]
    pub async fn resolve(&self, city: &str) -> Result<Location> {
        info!("Geocoding location: '{}'", city);
        let start_time = Instant::now();

        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", self.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: GeocodingResponse = response.json().await?;

        let Some(result) = payload.results.and_then(|results| results.into_iter().next()) else {
            warn!("No results found for location '{}'", city);
            return Err(TenkiError::not_found(city));
        };

        let location = Location::from(result);
        debug!(
            "Found location: {} ({}) in {:.3}s",
            location.name,
            location.format_coordinates(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(location)
    }
}

#[async_trait]
impl Geocoder for GeocodingClient {
    async fn resolve(&self, city: &str) -> Result<Location> {
        GeocodingClient::resolve(self, city).await
    }
}
