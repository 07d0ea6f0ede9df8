//! HTTP anonymizer speaking the anonymizer service protocol.
//!
//! `POST {base}/anonymize` with `{text, anonymizers, analyzer_results}`
//! answers with `{text, items: [{entity_type, text, operator, start, end}]}`.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use redacta_core::models::anonymize::AnonymizerResult;
use redacta_core::models::span::Span;
use redacta_core::transforms::TransformConfig;

use crate::client::{build_client, endpoint, get_ok, post_json};
use crate::collaborator::{AnonymizeRequest, Anonymizer, BoxFuture};
use crate::error::ClientError;

const SERVICE: &str = "anonymizer";

#[derive(Serialize)]
struct AnonymizeBody<'a> {
    text: &'a str,
    anonymizers: &'a TransformConfig,
    analyzer_results: Vec<AnalyzerResult<'a>>,
}

#[derive(Serialize)]
struct AnalyzerResult<'a> {
    entity_type: &'a str,
    start: usize,
    end: usize,
    score: f64,
}

impl<'a> From<&'a Span> for AnalyzerResult<'a> {
    fn from(span: &'a Span) -> Self {
        Self {
            entity_type: &span.category,
            start: span.start,
            end: span.end,
            score: span.score,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpAnonymizer {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnonymizer {
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

impl Anonymizer for HttpAnonymizer {
    fn anonymize(
        &self,
        request: AnonymizeRequest,
    ) -> BoxFuture<'_, Result<AnonymizerResult, ClientError>> {
        Box::pin(async move {
            let body = AnonymizeBody {
                text: &request.text,
                anonymizers: &request.transforms,
                analyzer_results: request.detections.iter().map(AnalyzerResult::from).collect(),
            };
            let url = endpoint(&self.base_url, "anonymize");
            let result: AnonymizerResult = post_json(&self.http, SERVICE, &url, &body).await?;
            debug!(items = result.applied_items.len(), "anonymizer responded");
            Ok(result)
        })
    }

    fn health(&self) -> BoxFuture<'_, Result<(), ClientError>> {
        Box::pin(async move { get_ok(&self.http, SERVICE, &endpoint(&self.base_url, "health")).await })
    }
}
