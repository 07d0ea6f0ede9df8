use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use redacta_client::collaborator::{AnalyzeRequest, AnonymizeRequest, Anonymizer, BoxFuture, Detector};
use redacta_client::error::ClientError;
use redacta_client::{GuardSettings, PrivacyGuard};
use redacta_core::models::anonymize::{AnonymizerResult, AppliedItem};
use redacta_core::models::span::Span;
use redacta_server::router;
use redacta_server::state::AppState;

const TEXT: &str = "Hello, my name is John Doe and my phone number is +1 555-123-4567.";
const ANONYMIZED: &str = "Hello, my name is [PERSON] and my phone number is [PHONE].";

struct FixedDetector;

impl Detector for FixedDetector {
    fn analyze(&self, _request: AnalyzeRequest) -> BoxFuture<'_, Result<Vec<Span>, ClientError>> {
        Box::pin(async {
            Ok(vec![
                Span::new("PERSON", 18, 26, 0.9),
                Span::new("PHONE_NUMBER", 50, 65, 0.8),
            ])
        })
    }

    fn health(&self) -> BoxFuture<'_, Result<(), ClientError>> {
        Box::pin(async { Ok(()) })
    }
}

/// Detector whose health check takes a long time to answer.
struct SlowHealthDetector;

impl Detector for SlowHealthDetector {
    fn analyze(&self, _request: AnalyzeRequest) -> BoxFuture<'_, Result<Vec<Span>, ClientError>> {
        Box::pin(async { Ok(vec![]) })
    }

    fn health(&self) -> BoxFuture<'_, Result<(), ClientError>> {
        Box::pin(async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok(())
        })
    }
}

struct FixedAnonymizer {
    healthy: bool,
}

impl Anonymizer for FixedAnonymizer {
    fn anonymize(
        &self,
        _request: AnonymizeRequest,
    ) -> BoxFuture<'_, Result<AnonymizerResult, ClientError>> {
        Box::pin(async {
            Ok(AnonymizerResult {
                resulting_text: ANONYMIZED.to_string(),
                applied_items: vec![
                    AppliedItem::new("PERSON", "[PERSON]"),
                    AppliedItem::new("PHONE_NUMBER", "[PHONE]"),
                ],
            })
        })
    }

    fn health(&self) -> BoxFuture<'_, Result<(), ClientError>> {
        let healthy = self.healthy;
        Box::pin(async move {
            if healthy {
                Ok(())
            } else {
                Err(ClientError::Transport {
                    service: "anonymizer",
                    message: "connection refused".to_string(),
                })
            }
        })
    }
}

fn state(healthy: bool, max_text_bytes: usize) -> AppState {
    state_with(Arc::new(FixedDetector), healthy, max_text_bytes)
}

fn state_with(detector: Arc<dyn Detector>, healthy: bool, max_text_bytes: usize) -> AppState {
    let guard = PrivacyGuard::new(
        detector,
        Arc::new(FixedAnonymizer { healthy }),
        GuardSettings::default(),
    );
    AppState::new(guard, max_text_bytes)
}

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(v) => Body::from(v.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn anonymize_then_deanonymize() {
    let state = state(true, 10_000);

    let (status, body) = send(&state, "POST", "/anonymize", Some(json!({"text": TEXT}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["anonymized_text"], ANONYMIZED);
    assert_eq!(body["entities_found"], true);

    let (status, body) = send(&state, "POST", "/deanonymize", Some(json!({"text": ANONYMIZED}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], TEXT);
}

#[tokio::test]
async fn entities_can_be_listed_and_cleared() {
    let state = state(true, 10_000);
    send(&state, "POST", "/anonymize", Some(json!({"text": TEXT}))).await;

    let (status, body) = send(&state, "GET", "/entities", None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().any(|e| e["original_value"] == "John Doe"));

    let (status, _) = send(&state, "DELETE", "/entities", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&state, "GET", "/entities", None).await;
    assert_eq!(body, json!([]));

    let (_, body) = send(&state, "POST", "/deanonymize", Some(json!({"text": ANONYMIZED}))).await;
    assert_eq!(body["text"], ANONYMIZED);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let state = state(true, 10_000);
    let (status, body) = send(&state, "POST", "/anonymize", Some(json!({"txt": TEXT}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn oversized_text_is_rejected() {
    let state = state(true, 16);
    let (status, body) = send(&state, "POST", "/anonymize", Some(json!({"text": TEXT}))).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "text exceeds 16 bytes");
}

#[tokio::test]
async fn health_reflects_collaborators() {
    let (status, body) = send(&state(true, 10), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"analyzer": true, "anonymizer": true}));

    let (status, body) = send(&state(false, 10), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["anonymizer"], false);
}

#[tokio::test]
async fn slow_health_check_does_not_block_other_routes() {
    let state = state_with(Arc::new(SlowHealthDetector), true, 10_000);

    let health_state = state.clone();
    let health = tokio::spawn(async move { send(&health_state, "GET", "/health", None).await });
    // Let the health check get past the guard before the next request.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let deanonymized = tokio::time::timeout(
        Duration::from_secs(1),
        send(&state, "POST", "/deanonymize", Some(json!({"text": "hi"}))),
    )
    .await
    .expect("deanonymize waited on the health check");
    assert_eq!(deanonymized.0, StatusCode::OK);
    assert_eq!(deanonymized.1["text"], "hi");

    let (status, _) = health.await.unwrap();
    assert_eq!(status, StatusCode::OK);
}
