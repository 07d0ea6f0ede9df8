use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use redacta_client::analyzer::HttpDetector;
use redacta_client::anonymizer::HttpAnonymizer;
use redacta_client::PrivacyGuard;
use redacta_server::config::ServiceConfig;
use redacta_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    let settings = config.guard_settings()?;

    let detector = HttpDetector::new(&config.analyzer_url, config.timeout())?;
    let anonymizer = HttpAnonymizer::new(&config.anonymizer_url, config.timeout())?;
    let guard = PrivacyGuard::new(Arc::new(detector), Arc::new(anonymizer), settings);

    let state = AppState::new(guard, config.max_text_bytes);
    let app = redacta_server::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        analyzer = %config.analyzer_url,
        anonymizer = %config.anonymizer_url,
        "redacta server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
