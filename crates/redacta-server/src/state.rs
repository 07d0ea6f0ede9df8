use std::sync::Arc;

use tokio::sync::Mutex;

use redacta_client::PrivacyGuard;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The guard holds the one active mapping table; the mutex serializes
/// anonymize calls so they can't race on it.
#[derive(Clone)]
pub struct AppState {
    pub guard: Arc<Mutex<PrivacyGuard>>,
    pub max_text_bytes: usize,
}

impl AppState {
    pub fn new(guard: PrivacyGuard, max_text_bytes: usize) -> Self {
        Self {
            guard: Arc::new(Mutex::new(guard)),
            max_text_bytes,
        }
    }
}
