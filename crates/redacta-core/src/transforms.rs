//! Per-category transform configuration sent to the anonymizer.
//!
//! The engine never performs these transforms; it only needs to know which
//! placeholder a literal replacement produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::placeholders::{self, placeholder_for};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    /// Swap the span for a fixed string.
    Replace { new_value: String },
    /// Overwrite `chars_to_mask` characters with `masking_char`.
    Mask {
        masking_char: char,
        chars_to_mask: usize,
        from_end: bool,
    },
    /// Irreversible digest of the span.
    Hash { hash_type: HashType },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashType {
    Sha256,
    Sha512,
}

impl Transform {
    pub fn replace(new_value: impl Into<String>) -> Self {
        Transform::Replace {
            new_value: new_value.into(),
        }
    }

    /// The fixed string this transform writes, if it writes one.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Transform::Replace { new_value } => Some(new_value),
            Transform::Mask { .. } | Transform::Hash { .. } => None,
        }
    }
}

/// Category name → transform. Serializes to the `anonymizers` object the
/// anonymizer service expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransformConfig(BTreeMap<String, Transform>);

impl Default for TransformConfig {
    fn default() -> Self {
        let mut table = BTreeMap::new();
        for category in [
            placeholders::PERSON,
            placeholders::PHONE_NUMBER,
            placeholders::EMAIL_ADDRESS,
            placeholders::LOCATION,
            placeholders::DATE_TIME,
            placeholders::IP_ADDRESS,
            placeholders::URL,
        ] {
            table.insert(category.to_string(), Transform::replace(placeholder_for(category)));
        }
        table.insert(
            placeholders::CREDIT_CARD.to_string(),
            Transform::Mask {
                masking_char: '*',
                chars_to_mask: 12,
                from_end: false,
            },
        );
        table.insert(
            placeholders::IBAN_CODE.to_string(),
            Transform::Mask {
                masking_char: '*',
                chars_to_mask: 10,
                from_end: true,
            },
        );
        table.insert(
            placeholders::US_SSN.to_string(),
            Transform::Hash {
                hash_type: HashType::Sha256,
            },
        );
        Self(table)
    }
}

impl TransformConfig {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Parse and validate a JSON transform table.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let config: TransformConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        for (category, transform) in &self.0 {
            let reason = match transform {
                Transform::Replace { new_value } if new_value.is_empty() => {
                    Some("replacement value is empty")
                }
                Transform::Mask { chars_to_mask: 0, .. } => Some("chars_to_mask must be positive"),
                _ => None,
            };
            if let Some(reason) = reason {
                return Err(CoreError::InvalidTransform {
                    category: category.clone(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn insert(&mut self, category: impl Into<String>, transform: Transform) {
        self.0.insert(category.into(), transform);
    }

    pub fn get(&self, category: &str) -> Option<&Transform> {
        self.0.get(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Placeholder the configured transform is known to emit for `category`.
    pub fn literal_for(&self, category: &str) -> Option<&str> {
        self.get(category).and_then(Transform::literal)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
