//! HTTP detector speaking the analyzer service protocol.
//!
//! `POST {base}/analyze` with `{text, language, entities, score_threshold}`
//! answers with a JSON array of `{entity_type, start, end, score}`.

use std::time::Duration;

use tracing::debug;

use redacta_core::models::span::Span;

use crate::client::{build_client, endpoint, get_ok, post_json};
use crate::collaborator::{AnalyzeRequest, BoxFuture, Detector};
use crate::error::ClientError;

const SERVICE: &str = "analyzer";

#[derive(Debug, Clone)]
pub struct HttpDetector {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDetector {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            http: build_client(timeout)?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Detector for HttpDetector {
    fn analyze(&self, request: AnalyzeRequest) -> BoxFuture<'_, Result<Vec<Span>, ClientError>> {
        Box::pin(async move {
            let url = endpoint(&self.base_url, "analyze");
            let spans: Vec<Span> = post_json(&self.http, SERVICE, &url, &request).await?;
            debug!(detections = spans.len(), "analyzer responded");
            Ok(spans)
        })
    }

    fn health(&self) -> BoxFuture<'_, Result<(), ClientError>> {
        Box::pin(async move { get_ok(&self.http, SERVICE, &endpoint(&self.base_url, "health")).await })
    }
}
