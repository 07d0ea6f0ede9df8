//! The anonymization session.
//!
//! A [`PrivacyGuard`] owns one mapping table. `anonymize` takes `&mut self`
//! and rebuilds that table from scratch, so callers sharing a guard must
//! serialize access to it (the server keeps it behind a mutex).

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use redacta_core::models::anonymize::AnonymizeOutcome;
use redacta_core::models::mapping::MappingEntry;
use redacta_core::transforms::TransformConfig;
use redacta_mapping::{build_mapping, MappingPolicy, MappingTable};

use crate::collaborator::{AnalyzeRequest, AnonymizeRequest, Anonymizer, Detector};
use crate::error::ClientError;

/// Detection and mapping settings for a guard.
#[derive(Debug, Clone)]
pub struct GuardSettings {
    pub language: String,
    /// Categories requested from the detector. Empty = detector default.
    pub entities: Vec<String>,
    pub score_threshold: Option<f64>,
    pub transforms: TransformConfig,
    pub policy: MappingPolicy,
}

impl Default for GuardSettings {
    fn default() -> Self {
        let transforms = TransformConfig::default();
        Self {
            language: "en".to_string(),
            entities: transforms.categories().map(str::to_string).collect(),
            score_threshold: Some(0.35),
            transforms,
            policy: MappingPolicy::default(),
        }
    }
}

/// Reachability of both collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub analyzer: bool,
    pub anonymizer: bool,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.analyzer && self.anonymizer
    }
}

pub struct PrivacyGuard {
    detector: Arc<dyn Detector>,
    anonymizer: Arc<dyn Anonymizer>,
    settings: GuardSettings,
    table: MappingTable,
}

impl PrivacyGuard {
    pub fn new(
        detector: Arc<dyn Detector>,
        anonymizer: Arc<dyn Anonymizer>,
        settings: GuardSettings,
    ) -> Self {
        Self {
            detector,
            anonymizer,
            settings,
            table: MappingTable::new(),
        }
    }

    pub fn settings(&self) -> &GuardSettings {
        &self.settings
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.table
    }

    /// Detect, anonymize and rebuild the mapping for `text`.
    ///
    /// Never fails: if either collaborator errors, the original text comes
    /// back with `entities_found = false` and the mapping stays empty.
    pub async fn anonymize(&mut self, text: &str) -> AnonymizeOutcome {
        let session_id = Uuid::new_v4();
        self.table.clear();

        if text.trim().is_empty() {
            return AnonymizeOutcome::pass_through(text, session_id);
        }

        match self.run(text, session_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(session_id = %session_id, error = %e, "anonymization failed, passing text through");
                self.table.clear();
                AnonymizeOutcome::pass_through(text, session_id)
            }
        }
    }

    async fn run(&mut self, text: &str, session_id: Uuid) -> Result<AnonymizeOutcome, ClientError> {
        info!(session_id = %session_id, text_len = text.len(), "starting anonymization");

        let detections = self
            .detector
            .analyze(AnalyzeRequest {
                text: text.to_string(),
                language: self.settings.language.clone(),
                entities: self.settings.entities.clone(),
                score_threshold: self.settings.score_threshold,
            })
            .await?;

        if detections.is_empty() {
            info!(session_id = %session_id, "no entities detected");
            return Ok(AnonymizeOutcome::pass_through(text, session_id));
        }

        let result = self
            .anonymizer
            .anonymize(AnonymizeRequest {
                text: text.to_string(),
                transforms: self.settings.transforms.clone(),
                detections: detections.clone(),
            })
            .await?;

        if result.applied_items.is_empty() {
            info!(session_id = %session_id, "anonymizer applied no replacements");
            return Ok(AnonymizeOutcome::pass_through(text, session_id));
        }

        self.table = build_mapping(
            text,
            &detections,
            &result.applied_items,
            &self.settings.transforms,
            &self.settings.policy,
        );

        info!(
            session_id = %session_id,
            detections = detections.len(),
            applied = result.applied_items.len(),
            mapped = self.table.len(),
            "anonymization complete"
        );

        Ok(AnonymizeOutcome {
            anonymized_text: result.resulting_text,
            entities_found: true,
            session_id,
        })
    }

    /// Put original values back into `text` using the current mapping.
    pub fn deanonymize(&self, text: &str) -> String {
        self.table.restore(text)
    }

    pub fn list_entities(&self) -> Vec<MappingEntry> {
        self.table.entries()
    }

    pub fn clear_mapping(&mut self) {
        self.table.clear();
    }

    /// Handles to both collaborators for checking their health without
    /// holding on to the guard.
    pub fn health_checker(&self) -> HealthChecker {
        HealthChecker {
            detector: Arc::clone(&self.detector),
            anonymizer: Arc::clone(&self.anonymizer),
        }
    }

    pub async fn health(&self) -> HealthReport {
        self.health_checker().check().await
    }
}

/// Collaborator handles detached from a [`PrivacyGuard`]; cheap to clone.
#[derive(Clone)]
pub struct HealthChecker {
    detector: Arc<dyn Detector>,
    anonymizer: Arc<dyn Anonymizer>,
}

impl HealthChecker {
    pub async fn check(&self) -> HealthReport {
        let (analyzer, anonymizer) = tokio::join!(self.detector.health(), self.anonymizer.health());
        if let Err(e) = &analyzer {
            warn!(error = %e, "analyzer health check failed");
        }
        if let Err(e) = &anonymizer {
            warn!(error = %e, "anonymizer health check failed");
        }
        HealthReport {
            analyzer: analyzer.is_ok(),
            anonymizer: anonymizer.is_ok(),
        }
    }
}
