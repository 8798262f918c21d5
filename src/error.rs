use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Remediation message surfaced to the frontend when the NDEL engine is
/// missing. The frontend matches on this text, so it stays fixed.
pub const NDEL_INSTALL_HINT: &str =
    "NDEL library not installed. Run: pip install git+https://github.com/tom-mcmillan/ndel.git";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Required request field missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The NDEL engine was not reachable when this process started.
    #[error("{}", NDEL_INSTALL_HINT)]
    EngineUnavailable,

    /// Delegation to the engine failed; the raw failure text is surfaced.
    #[error("{0}")]
    Engine(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::EngineUnavailable | ApiError::Engine(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
