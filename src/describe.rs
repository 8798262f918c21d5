use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ndel_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/describe", post(describe))
        .route("/health", get(health))
}

/// POST /describe - render an NDEL description of Python or SQL source.
async fn describe(
    State(state): State<AppState>,
    Json(req): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, ApiError> {
    if req.source.trim().is_empty() {
        return Err(ApiError::Validation("No source provided".to_string()));
    }
    if !state.ndel_available {
        return Err(ApiError::EngineUnavailable);
    }

    let language = req.language.as_deref().unwrap_or("python").to_lowercase();
    let result = if language == "sql" {
        state.ndel.describe_sql_source(&req.source).await
    } else {
        state.ndel.describe_python_source(&req.source).await
    };

    match result {
        Ok(output) => Ok(Json(DescribeResponse { output })),
        Err(e) => {
            error!("describe delegation failed: {}", e);
            Err(ApiError::Engine(e.to_string()))
        }
    }
}

/// GET /health - never fails; absence of the engine is a reportable state.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        ndel_available: state.ndel_available,
        message: if state.ndel_available {
            None
        } else {
            Some("NDEL library not installed")
        },
    })
}
