use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid user_id")]
    InvalidUserId,

    #[error("Upstream responded with status {status}")]
    Upstream { status: u16 },

    #[error("Response too large")]
    ResponseTooLarge,

    /// Transport or parse failure. The detail is logged but deliberately not
    /// surfaced to the caller; both collapse into one generic 500.
    #[error("Failed to fetch or parse RSS: {0}")]
    Fetch(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidUserId => (
                StatusCode::BAD_REQUEST,
                ErrorResponse { error: "Invalid user_id".to_string(), status: None },
            ),
            AppError::Upstream { status } => (
                // Mirror the upstream status; an unrepresentable code becomes 502.
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorResponse { error: "Upstream error".to_string(), status: Some(status) },
            ),
            AppError::ResponseTooLarge => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse { error: "Response too large".to_string(), status: None },
            ),
            AppError::Fetch(detail) => {
                tracing::warn!(%detail, "shelf fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse { error: "Failed to fetch or parse RSS".to_string(), status: None },
                )
            }
            AppError::Config(detail) => {
                tracing::error!(%detail, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse { error: "Internal server error".to_string(), status: None },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
