use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    #[error("Unknown harmony mode: {0}")]
    UnknownMode(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<image::ImageError> for ApiError {
    fn from(e: image::ImageError) -> Self {
        ApiError::InvalidImage(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownMode(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_param_message() {
        let error = ApiError::MissingParam("baseColor");
        assert_eq!(error.to_string(), "Missing required parameter: baseColor");
    }

    #[test]
    fn test_unknown_mode_message() {
        let error = ApiError::UnknownMode("tetradic".to_string());
        assert_eq!(error.to_string(), "Unknown harmony mode: tetradic");
    }

    #[test]
    fn test_invalid_image_message() {
        let error = ApiError::InvalidImage("truncated data".to_string());
        assert_eq!(error.to_string(), "Invalid image: truncated data");
    }

    #[test]
    fn test_status_codes() {
        let response = ApiError::MissingParam("baseColor").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::UnknownMode("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::InvalidImage("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ApiError::Internal("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
