use std::future::Future;
use std::pin::Pin;

use serde::Serialize;

use redacta_core::models::anonymize::AnonymizerResult;
use redacta_core::models::span::Span;
use redacta_core::transforms::TransformConfig;

use crate::error::ClientError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What the detector is asked to look at.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub language: String,
    /// Categories to detect. Empty = whatever the detector supports.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f64>,
}

/// What the anonymizer is asked to rewrite.
#[derive(Debug, Clone)]
pub struct AnonymizeRequest {
    pub text: String,
    pub transforms: TransformConfig,
    pub detections: Vec<Span>,
}

/// Finds sensitive spans in text.
pub trait Detector: Send + Sync {
    /// An empty result means nothing was detected.
    fn analyze(&self, request: AnalyzeRequest) -> BoxFuture<'_, Result<Vec<Span>, ClientError>>;

    /// Ok if the service is reachable and reports itself healthy.
    fn health(&self) -> BoxFuture<'_, Result<(), ClientError>>;
}

/// Rewrites detected spans according to a transform table.
pub trait Anonymizer: Send + Sync {
    fn anonymize(
        &self,
        request: AnonymizeRequest,
    ) -> BoxFuture<'_, Result<AnonymizerResult, ClientError>>;

    fn health(&self) -> BoxFuture<'_, Result<(), ClientError>>;
}
