use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use redacta_core::models::mapping::MappingEntry;

use crate::state::AppState;

pub async fn list_entities(State(state): State<AppState>) -> Json<Vec<MappingEntry>> {
    Json(state.guard.lock().await.list_entities())
}

pub async fn clear_entities(State(state): State<AppState>) -> StatusCode {
    state.guard.lock().await.clear_mapping();
    StatusCode::NO_CONTENT
}
