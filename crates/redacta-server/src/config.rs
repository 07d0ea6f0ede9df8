use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use eyre::WrapErr;

use redacta_client::GuardSettings;
use redacta_core::transforms::TransformConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ANALYZER_URL: &str = "http://localhost:5002";
const DEFAULT_ANONYMIZER_URL: &str = "http://localhost:5001";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_SCORE_THRESHOLD: f64 = 0.35;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_MAX_TEXT_BYTES: usize = 100_000;

/// Process configuration, read from `REDACTA_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub analyzer_url: String,
    pub anonymizer_url: String,
    pub language: String,
    /// `None` lets the analyzer apply its own threshold.
    pub score_threshold: Option<f64>,
    /// Categories to request. Empty = every category in the transform table.
    pub entities: Vec<String>,
    pub timeout_secs: u64,
    pub max_text_bytes: usize,
    /// JSON transform table replacing the built-in one.
    pub transforms_path: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset and blank values
    /// fall back to defaults; malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = get("REDACTA_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .wrap_err("REDACTA_BIND_ADDR is not a socket address")?;

        let score_threshold = match get("REDACTA_SCORE_THRESHOLD").as_deref() {
            None => Some(DEFAULT_SCORE_THRESHOLD),
            Some("none") => None,
            Some(raw) => {
                let value: f64 = raw
                    .parse()
                    .wrap_err("REDACTA_SCORE_THRESHOLD is not a number")?;
                if !(0.0..=1.0).contains(&value) {
                    return Err(eyre::eyre!(
                        "REDACTA_SCORE_THRESHOLD must be within [0, 1], got {value}"
                    ));
                }
                Some(value)
            }
        };

        let entities = get("REDACTA_ENTITIES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let timeout_secs = match get("REDACTA_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.parse().wrap_err("REDACTA_TIMEOUT_SECS is not an integer")?,
        };

        let max_text_bytes = match get("REDACTA_MAX_TEXT_BYTES") {
            None => DEFAULT_MAX_TEXT_BYTES,
            Some(raw) => raw
                .parse()
                .wrap_err("REDACTA_MAX_TEXT_BYTES is not an integer")?,
        };

        Ok(Self {
            bind_addr,
            analyzer_url: get("REDACTA_ANALYZER_URL")
                .unwrap_or_else(|| DEFAULT_ANALYZER_URL.to_string()),
            anonymizer_url: get("REDACTA_ANONYMIZER_URL")
                .unwrap_or_else(|| DEFAULT_ANONYMIZER_URL.to_string()),
            language: get("REDACTA_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            score_threshold,
            entities,
            timeout_secs,
            max_text_bytes,
            transforms_path: get("REDACTA_TRANSFORMS").map(PathBuf::from),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The transform table from `transforms_path`, or the built-in one.
    pub fn load_transforms(&self) -> eyre::Result<TransformConfig> {
        let Some(path) = &self.transforms_path else {
            return Ok(TransformConfig::default());
        };
        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read transforms at {}: {e}", path.display()))?;
        let transforms = TransformConfig::from_json(&contents)
            .wrap_err_with(|| format!("invalid transforms at {}", path.display()))?;
        tracing::info!(path = %path.display(), categories = transforms.len(), "loaded transform table");
        Ok(transforms)
    }

    pub fn guard_settings(&self) -> eyre::Result<GuardSettings> {
        let transforms = self.load_transforms()?;
        let entities = if self.entities.is_empty() {
            transforms.categories().map(str::to_string).collect()
        } else {
            self.entities.clone()
        };
        Ok(GuardSettings {
            language: self.language.clone(),
            entities,
            score_threshold: self.score_threshold,
            transforms,
            ..GuardSettings::default()
        })
    }
}
