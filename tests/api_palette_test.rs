//! Integration tests for the palette generation endpoint.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use common::app::TestApp;

#[tokio::test]
async fn test_generate_palette_returns_six_colors() {
    let app = TestApp::new();
    let response = app
        .get("/api/palette/generate?baseColor=%23FF0000")
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let json: Value = response.json();
    let palette = json["palette"].as_array().unwrap();
    assert_eq!(palette.len(), 6);

    // recipe order: base, complement, analogous ±30, triadic 120/240
    assert_eq!(palette[0], "#ff0000");
    assert_eq!(palette[1], "#00ffff");
    assert_eq!(palette[4], "#00ff00");
    assert_eq!(palette[5], "#0000ff");
}

#[tokio::test]
async fn test_generate_palette_is_deterministic() {
    let app = TestApp::new();
    let first = app
        .get("/api/palette/generate?baseColor=%233B82F6")
        .await
        .text();
    let second = app
        .get("/api/palette/generate?baseColor=%233B82F6")
        .await
        .text();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_generate_palette_invalid_color_falls_back_to_blue() {
    let app = TestApp::new();
    let response = app
        .get("/api/palette/generate?baseColor=notacolor")
        .await;

    // invalid input degrades to the default blue rather than failing
    assert_eq!(response.status, StatusCode::OK);
    let json: Value = response.json();
    assert_eq!(json["palette"][0], "#3b82f6");
}

#[tokio::test]
async fn test_generate_palette_missing_base_color_is_bad_request() {
    let app = TestApp::new();
    let response = app.get("/api/palette/generate").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_generate_palette_with_mode() {
    let app = TestApp::new();
    let response = app
        .get("/api/palette/generate?baseColor=%23FF0000&mode=triadic")
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let json: Value = response.json();
    let palette = json["palette"].as_array().unwrap();
    assert_eq!(palette.len(), 3);
    assert_eq!(palette[0], "#ff0000");
    assert_eq!(palette[1], "#00ff00");
    assert_eq!(palette[2], "#0000ff");
}

#[tokio::test]
async fn test_generate_palette_unknown_mode_is_bad_request() {
    let app = TestApp::new();
    let response = app
        .get("/api/palette/generate?baseColor=%23FF0000&mode=tetradic")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "OK");
}
