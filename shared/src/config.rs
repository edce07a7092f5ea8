//! Configuration document model and loader
//!
//! The document is fetched once (from a file path or an `http(s)` URL) and is
//! read-only afterwards. Typed access goes through [`Configuration`]; keys the
//! typed model does not carry can still be read with [`ConfigStore::lookup`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::errors::{SharedError, SharedResult};

/// Settling delay used when nothing else is configured
pub const DEFAULT_SETTLING_DELAY_MS: u64 = 2500;

fn default_settling_delay_ms() -> u64 {
    DEFAULT_SETTLING_DELAY_MS
}

fn default_min_length() -> usize {
    4
}

fn default_max_length() -> usize {
    10
}

fn default_true() -> bool {
    true
}

/// Top-level configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Conferencing backend host, optionally prefixed with a URI scheme
    pub domain: String,

    #[serde(default)]
    pub lang: Option<String>,

    #[serde(default)]
    pub enable_tts: bool,

    #[serde(default)]
    pub ivr: IvrConfig,

    #[serde(default)]
    pub listener_arming: ListenerArming,
}

/// `ivr` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IvrConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub conference_code: ConferenceCodeConfig,

    #[serde(default)]
    pub confmapper_url: String,

    #[serde(default)]
    pub confmapper_endpoint: String,

    /// Treat a resolution response without `conference` as a failure
    #[serde(default = "default_true")]
    pub report_missing_conference: bool,
}

impl Default for IvrConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            conference_code: ConferenceCodeConfig::default(),
            confmapper_url: String::new(),
            confmapper_endpoint: String::new(),
            report_missing_conference: true,
        }
    }
}

impl IvrConfig {
    /// Full resolution endpoint, without the `id` query parameter
    pub fn confmapper_target(&self) -> String {
        format!("{}{}", self.confmapper_url, self.confmapper_endpoint)
    }
}

/// `ivr.conference_code` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceCodeConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for ConferenceCodeConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

/// When widget listeners start producing spoken feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ListenerArming {
    /// Arm after a fixed wall-clock delay
    Delay {
        #[serde(default = "default_settling_delay_ms")]
        delay_ms: u64,
    },
    /// Arm when the widget reports it joined, or after `fallback_ms`
    OnJoined {
        #[serde(default = "default_settling_delay_ms")]
        fallback_ms: u64,
    },
}

impl Default for ListenerArming {
    fn default() -> Self {
        ListenerArming::Delay {
            delay_ms: DEFAULT_SETTLING_DELAY_MS,
        }
    }
}

impl ListenerArming {
    /// Upper bound on how long arming can take
    pub fn settling_delay(&self) -> Duration {
        match self {
            ListenerArming::Delay { delay_ms } => Duration::from_millis(*delay_ms),
            ListenerArming::OnJoined { fallback_ms } => Duration::from_millis(*fallback_ms),
        }
    }
}

impl Configuration {
    /// Minimal configuration, mostly for tests and the direct-link path
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            lang: None,
            enable_tts: false,
            ivr: IvrConfig::default(),
            listener_arming: ListenerArming::default(),
        }
    }

    /// Check cross-field invariants
    pub fn validate(&self) -> SharedResult<()> {
        if self.domain.trim().is_empty() {
            return Err(SharedError::InvalidConfig {
                field: "domain".to_string(),
                value: self.domain.clone(),
            });
        }

        let code = &self.ivr.conference_code;
        if code.min_length > code.max_length {
            return Err(SharedError::InvalidConfig {
                field: "ivr.conference_code".to_string(),
                value: format!("min_length {} > max_length {}", code.min_length, code.max_length),
            });
        }

        if self.ivr.enabled && self.ivr.confmapper_url.is_empty() {
            return Err(SharedError::InvalidConfig {
                field: "ivr.confmapper_url".to_string(),
                value: String::new(),
            });
        }

        Ok(())
    }
}

/// Loaded configuration document
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config: Arc<Configuration>,
    document: Arc<Value>,
}

impl ConfigStore {
    /// Parse and validate a configuration document
    pub fn from_json(source_path: &str, raw: &str) -> SharedResult<Self> {
        let document: Value = serde_json::from_str(raw).map_err(|e| SharedError::ConfigLoadFailure {
            source_path: source_path.to_string(),
            reason: e.to_string(),
        })?;

        let config: Configuration =
            serde_json::from_value(document.clone()).map_err(|e| SharedError::ConfigLoadFailure {
                source_path: source_path.to_string(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            document: Arc::new(document),
        })
    }

    /// Load the document from an `http(s)` URL or a local path
    pub async fn load(source: &str) -> SharedResult<Self> {
        let failure = |reason: String| SharedError::ConfigLoadFailure {
            source_path: source.to_string(),
            reason,
        };

        let raw = match Url::parse(source) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                let response = reqwest::get(url).await.map_err(|e| failure(e.to_string()))?;
                let response = response.error_for_status().map_err(|e| failure(e.to_string()))?;
                response.text().await.map_err(|e| failure(e.to_string()))?
            }
            _ => tokio::fs::read_to_string(source)
                .await
                .map_err(|e| failure(e.to_string()))?,
        };

        Self::from_json(source, &raw)
    }

    pub fn config(&self) -> Arc<Configuration> {
        Arc::clone(&self.config)
    }

    /// Raw document, as served back to pages
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Scoped lookup of a dotted key such as `ivr.conference_code.min_length`
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(self.document.as_ref(), |node, segment| node.get(segment))
    }
}
