use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use redacta_core::models::anonymize::AnonymizeOutcome;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct TextResponse {
    pub text: String,
}

/// Anonymize text and replace the active mapping.
pub async fn anonymize(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<AnonymizeOutcome>, ApiError> {
    let Json(req) = payload?;
    if req.text.len() > state.max_text_bytes {
        return Err(ApiError::PayloadTooLarge {
            limit: state.max_text_bytes,
        });
    }

    let mut guard = state.guard.lock().await;
    Ok(Json(guard.anonymize(&req.text).await))
}

/// Restore original values using the active mapping.
pub async fn deanonymize(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<TextResponse>, ApiError> {
    let Json(req) = payload?;
    let guard = state.guard.lock().await;
    Ok(Json(TextResponse {
        text: guard.deanonymize(&req.text),
    }))
}
