use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ApiError;
use crate::ndel::TranslateFormat;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub input: String,
    /// When set, the translator produces natural language instead of
    /// NDEL notation.
    #[serde(default, rename = "isFlipped")]
    pub is_flipped: bool,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub output: String,
}

pub fn create_routes() -> Router<AppState> {
    Router::new().route("/translate", post(translate))
}

/// POST /translate - convert between NDEL notation and natural language.
async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    if req.input.trim().is_empty() {
        return Err(ApiError::Validation("No input provided".to_string()));
    }
    if !state.ndel_available {
        return Err(ApiError::EngineUnavailable);
    }

    let to_format = if req.is_flipped {
        TranslateFormat::Natural
    } else {
        TranslateFormat::Ndel
    };

    match state.ndel.translate(&req.input, to_format).await {
        Ok(output) => Ok(Json(TranslateResponse { output })),
        Err(e) => {
            error!("translate delegation failed: {}", e);
            Err(ApiError::Engine(e.to_string()))
        }
    }
}
