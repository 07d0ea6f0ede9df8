//! redacta-server
//!
//! HTTP front door for a single shared anonymization session.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/anonymize", post(routes::anonymize::anonymize))
        .route("/deanonymize", post(routes::anonymize::deanonymize))
        .route(
            "/entities",
            get(routes::entities::list_entities).delete(routes::entities::clear_entities),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
