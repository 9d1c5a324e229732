//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::Request,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use irodori::models::AppConfig;
use irodori::server::{build_router, create_app_state};

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a new test application with the default configuration
    pub fn new() -> Self {
        let state = create_app_state(Arc::new(AppConfig::default()));
        let router = build_router(state);
        Self { router }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with a raw byte body
    pub async fn post_bytes(&self, path: &str, body: Vec<u8>) -> TestResponse {
        self.request(
            Request::post(path)
                .header("Content-Type", "application/octet-stream")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse { status, body }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: axum::http::StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
