use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Malformed request shape (wrong number of input titles)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Fuzzy matching found fewer titles than the pipeline requires
    #[error("Resolution failed: {0}")]
    Resolution(String),

    /// Exact lookup miss
    #[error("Not found: {0}")]
    NotFound(String),

    /// Filtered catalog subset was empty; internal invariant violation
    #[error("Empty profile: {0}")]
    EmptyProfile(String),

    /// Dataset schema or parse failure at startup
    #[error("Dataset error: {0}")]
    DataLoad(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) | AppError::Resolution(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::EmptyProfile(_) | AppError::DataLoad(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
