//! End-to-end tests for the weather page router

mod common;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{
    empty_geocoding_response, mock_weather_config, mount_forecast, mount_geocoding,
    week_forecast_response, zurich_geocoding_response,
};
use tenki::TenkiConfig;
use tenki::web::{AppState, router};
use tower::ServiceExt;
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::path};

fn static_dir() -> String {
    format!("{}/static", env!("CARGO_MANIFEST_DIR"))
}

fn test_app(mock_server: &MockServer, mascot_enabled: bool) -> Router {
    let mut config = TenkiConfig::default();
    config.weather = mock_weather_config(mock_server, 5);
    config.display.mascot_enabled = mascot_enabled;
    let state = AppState::from_config(&config).unwrap();
    router(state, &static_dir(), Duration::from_secs(30))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_zurich_success_page() {
    let mock_server = MockServer::start().await;
    mount_geocoding(
        &mock_server,
        "Zurich",
        ResponseTemplate::new(200).set_body_json(zurich_geocoding_response()),
    )
    .await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(week_forecast_response(1)),
    )
    .await;

    let (status, content_type, html) = get(test_app(&mock_server, true), "/?city=Zurich").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(html.contains("チューリッヒ"));
    assert!(html.contains("スイス"));
    assert!(html.contains("src=\"/static/icons/sun.svg\" alt=\"たいよう\""));
    // 7.6 rounds to 8 and is above the cold threshold
    assert!(html.contains("8℃"));
    assert!(html.contains("character_sunny.svg"));
    assert_eq!(html.matches("class=\"day\"").count(), 7);
    assert!(!html.contains("class=\"error\""));

    let first = html.find("2024-01-15 (月)").unwrap();
    let last = html.find("2024-01-21 (日)").unwrap();
    assert!(first < last);
}

#[tokio::test]
async fn test_default_city_is_zurich() {
    let mock_server = MockServer::start().await;
    mount_geocoding(
        &mock_server,
        "Zurich",
        ResponseTemplate::new(200).set_body_json(zurich_geocoding_response()),
    )
    .await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(week_forecast_response(61)),
    )
    .await;

    let (status, _, html) = get(test_app(&mock_server, true), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("value=\"Zurich\""));
    assert!(html.contains("src=\"/static/icons/rain.svg\" alt=\"あめ\""));
    assert!(html.contains("character_rainy.svg"));
}

#[tokio::test]
async fn test_mascot_can_be_disabled() {
    let mock_server = MockServer::start().await;
    mount_geocoding(
        &mock_server,
        "Zurich",
        ResponseTemplate::new(200).set_body_json(zurich_geocoding_response()),
    )
    .await;
    mount_forecast(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(week_forecast_response(1)),
    )
    .await;

    let (_, _, html) = get(test_app(&mock_server, false), "/?city=Zurich").await;

    assert!(!html.contains("character_"));
    assert_eq!(html.matches("class=\"day\"").count(), 7);
}

#[tokio::test]
async fn test_unknown_city_renders_error_view() {
    let mock_server = MockServer::start().await;
    mount_geocoding(
        &mock_server,
        "Nonexistentville",
        ResponseTemplate::new(200).set_body_json(empty_geocoding_response()),
    )
    .await;

    let (status, _, html) = get(test_app(&mock_server, true), "/?city=Nonexistentville").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("場所『Nonexistentville』が見つかりませんでした。"));
    assert!(!html.contains("class=\"now\""));
    assert!(!html.contains("class=\"day\""));
}

#[tokio::test]
async fn test_geocoding_failure_renders_transport_error() {
    let mock_server = MockServer::start().await;
    mount_geocoding(&mock_server, "Bern", ResponseTemplate::new(503)).await;

    let (status, _, html) = get(test_app(&mock_server, true), "/?city=%20Bern%20").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("class=\"error\""));
    assert!(html.contains("API通信でエラー"));
    assert!(!html.contains("class=\"now\""));
    assert!(!html.contains("class=\"day\""));
    // the form keeps the query as typed
    assert!(html.contains("value=\" Bern \""));
}

#[tokio::test]
async fn test_forecast_failure_renders_transport_error() {
    let mock_server = MockServer::start().await;
    mount_geocoding(
        &mock_server,
        "Zurich",
        ResponseTemplate::new(200).set_body_json(zurich_geocoding_response()),
    )
    .await;
    mount_forecast(&mock_server, ResponseTemplate::new(502)).await;

    let (status, _, html) = get(test_app(&mock_server, true), "/?city=Zurich").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("API通信でエラー"));
    assert!(!html.contains("class=\"days\""));
    assert!(!html.contains("class=\"day\""));
}

#[tokio::test]
async fn test_malformed_forecast_renders_unexpected_error() {
    let mock_server = MockServer::start().await;
    mount_geocoding(
        &mock_server,
        "Zurich",
        ResponseTemplate::new(200).set_body_json(zurich_geocoding_response()),
    )
    .await;
    Mock::given(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{"))
        .mount(&mock_server)
        .await;

    let (status, _, html) = get(test_app(&mock_server, true), "/?city=Zurich").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("想定外のエラー"));
}

#[tokio::test]
async fn test_static_icons_are_served() {
    let mock_server = MockServer::start().await;

    let (status, content_type, body) =
        get(test_app(&mock_server, true), "/static/icons/sun.svg").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert!(body.contains("<svg"));
}
