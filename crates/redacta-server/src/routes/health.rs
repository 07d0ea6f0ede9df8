use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use redacta_client::HealthReport;

use crate::state::AppState;

/// 200 when both services answer their health checks, 503 otherwise.
///
/// The guard lock is released before the remote calls so a slow service can't stall
/// the other routes.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let checker = state.guard.lock().await.health_checker();
    let report = checker.check().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
