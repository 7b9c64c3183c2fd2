use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::TenkiConfig;
use crate::open_meteo::{ForecastClient, GeocodingClient, build_http_client};
use crate::page::WeatherPageService;
use crate::render::{PageRenderer, fallback_page};

/// Process-wide state, built once and only read by handlers
#[derive(Clone, Debug)]
pub struct AppState {
    pub service: Arc<WeatherPageService>,
    pub renderer: PageRenderer,
}

impl AppState {
    /// Wire the real Open-Meteo clients from configuration
    pub fn from_config(config: &TenkiConfig) -> crate::Result<Self> {
        let client = build_http_client(&config.weather)?;
        let service = WeatherPageService::new(
            Arc::new(GeocodingClient::new(client.clone(), &config.weather)),
            Arc::new(ForecastClient::new(client, &config.weather)),
            config.display.clone().into(),
        );
        Ok(Self {
            service: Arc::new(service),
            renderer: PageRenderer::new()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub city: Option<String>,
}

pub fn router(state: AppState, static_dir: &str, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(weather_page))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error views are rendered with status 200 like the weather view
async fn weather_page(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let view = state.service.build_view(query.city.as_deref()).await;
    match state.renderer.render(&view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render page: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(fallback_page(&e.user_message())),
            )
                .into_response()
        }
    }
}

pub async fn run(config: TenkiConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    // Two sequential upstream calls, each bounded by the client timeout
    let request_timeout = Duration::from_secs(u64::from(config.weather.timeout_seconds) * 2 + 5);
    let app = router(state, &config.server.static_dir, request_timeout);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
