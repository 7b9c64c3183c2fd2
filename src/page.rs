//! Request pipeline behind the weather page
//!
//! city name → [`Geocoder`] → [`ForecastSource`] → icon, mascot and daily
//! cards → [`ViewModel`]. Every failure ends in an error view; nothing here
//! returns an error to the HTTP layer.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::TenkiError;
use crate::config::DisplayConfig;
use crate::models::{ForecastResponse, Location, ViewModel, WeatherView};
use crate::open_meteo::{ForecastSource, Geocoder};
use crate::weather::{format_series, icon_for, round_temperature, select_mascot};

/// Presentation switches for [`WeatherPageService`]
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// City used when the request does not name one
    pub default_city: String,
    /// Whether a mascot is chosen for the page
    pub mascot_enabled: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        DisplayConfig::default().into()
    }
}

impl From<DisplayConfig> for PageOptions {
    fn from(config: DisplayConfig) -> Self {
        Self {
            default_city: config.default_city,
            mascot_enabled: config.mascot_enabled,
        }
    }
}

/// Builds one [`ViewModel`] per request. Holds no per-request state.
pub struct WeatherPageService {
    geocoder: Arc<dyn Geocoder>,
    forecasts: Arc<dyn ForecastSource>,
    options: PageOptions,
}

impl std::fmt::Debug for WeatherPageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherPageService")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl WeatherPageService {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        forecasts: Arc<dyn ForecastSource>,
        options: PageOptions,
    ) -> Self {
        Self {
            geocoder,
            forecasts,
            options,
        }
    }

    /// Build the page for `city`, falling back to the default city when it is absent or blank
    #[instrument(skip(self))]
    pub async fn build_view(&self, city: Option<&str>) -> ViewModel {
        // The form echoes the query as typed; only the lookup is trimmed
        let (query_city, lookup) = match city {
            Some(raw) if !raw.trim().is_empty() => (raw, raw.trim()),
            _ => (
                self.options.default_city.as_str(),
                self.options.default_city.as_str(),
            ),
        };

        match self.load(lookup).await {
            Ok((location, forecast)) => {
                let weather = self.assemble(location, &forecast);
                info!(
                    city = %weather.city,
                    days = weather.daily.len(),
                    icon = %weather.icon.file,
                    "Weather page built"
                );
                ViewModel::success(query_city, weather)
            }
            Err(err) => {
                match &err {
                    TenkiError::NotFound { .. } => warn!("{}", err),
                    _ => error!("Failed to build weather page: {}", err),
                }
                ViewModel::failure(query_city, Self::page_message(&err))
            }
        }
    }

    async fn load(&self, city: &str) -> crate::Result<(Location, ForecastResponse)> {
        let location = self.geocoder.resolve(city).await?;
        let forecast = self
            .forecasts
            .fetch(location.latitude, location.longitude)
            .await?;
        Ok((location, forecast))
    }

    fn assemble(&self, location: Location, forecast: &ForecastResponse) -> WeatherView {
        let current = &forecast.current;
        let mascot = self
            .options
            .mascot_enabled
            .then(|| select_mascot(current.weather_code, current.temperature_c))
            .map(|m| m.file_name().to_string());

        WeatherView {
            city: location.name,
            country: location.country,
            temperature: round_temperature(current.temperature_c),
            wind_speed: current.wind_speed,
            time: current.observed_at.clone(),
            is_day: current.is_day,
            icon: icon_for(current.weather_code),
            mascot,
            daily: format_series(&forecast.daily),
        }
    }

    /// Not-found and transport errors keep their own wording; everything else is unexpected
    fn page_message(err: &TenkiError) -> String {
        match err {
            TenkiError::NotFound { .. }
            | TenkiError::Transport { .. }
            | TenkiError::Unexpected { .. } => err.user_message(),
            other => TenkiError::unexpected(other.to_string()).user_message(),
        }
    }
}
