use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// What the remote anonymizer hands back for one request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnonymizerResult {
    #[serde(alias = "text")]
    pub resulting_text: String,
    #[serde(alias = "items", default)]
    pub applied_items: Vec<AppliedItem>,
}

/// A single replacement the anonymizer reports having made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedItem {
    #[serde(alias = "entity_type")]
    pub category: String,
    /// Operator name as reported by the service (`replace`, `mask`, `hash`, ...).
    #[serde(default)]
    pub operator: Option<String>,
    /// Text written into the output at this position.
    #[serde(alias = "text", default)]
    pub replacement: Option<String>,
    /// Offsets in the *anonymized* text, when reported.
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl AppliedItem {
    pub fn new(category: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            operator: Some("replace".to_string()),
            replacement: Some(replacement.into()),
            start: None,
            end: None,
        }
    }

    /// The literal placeholder this item wrote, if it is one.
    ///
    /// Masked or hashed output varies per value and is not a placeholder.
    pub fn literal(&self) -> Option<&str> {
        let is_literal = match self.operator.as_deref() {
            None => true,
            Some(op) => op.eq_ignore_ascii_case("replace"),
        };
        if is_literal {
            self.replacement.as_deref().filter(|r| !r.is_empty())
        } else {
            None
        }
    }
}

/// The caller-facing result of an anonymization call.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnonymizeOutcome {
    pub anonymized_text: String,
    pub entities_found: bool,
    pub session_id: Uuid,
}

impl AnonymizeOutcome {
    /// The degraded result: original text, nothing found.
    pub fn pass_through(text: &str, session_id: Uuid) -> Self {
        Self {
            anonymized_text: text.to_string(),
            entities_found: false,
            session_id,
        }
    }
}
