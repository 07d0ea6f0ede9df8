use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid transform for {category}: {reason}")]
    InvalidTransform { category: String, reason: String },
}
