//! Conference-mapping HTTP client

use async_trait::async_trait;
use serde::Deserialize;
use shared::{Component, IvrConfig, RoomId, component_debug};

use crate::error::{IvrError, IvrResult};
use crate::traits::RoomResolver;

/// Body returned by the mapping endpoint; only `conference` matters here
#[derive(Debug, Deserialize)]
struct MappingResponse {
    #[serde(default)]
    conference: Option<String>,
}

/// Resolves codes with `GET {target}?id={code}`
#[derive(Clone)]
pub struct HttpRoomResolver {
    target: String,
    client: reqwest::Client,
}

impl HttpRoomResolver {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &IvrConfig) -> Self {
        Self::new(config.confmapper_target())
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

fn failed<E: ToString>(reason: E) -> IvrError {
    IvrError::RoomResolutionFailed {
        reason: reason.to_string(),
    }
}

#[async_trait]
impl RoomResolver for HttpRoomResolver {
    async fn resolve(&self, code: &str) -> IvrResult<Option<RoomId>> {
        component_debug!(Component::Ivr, "GET {}?id={}", self.target, code);

        let response = self
            .client
            .get(&self.target)
            .query(&[("id", code)])
            .send()
            .await
            .map_err(failed)?;

        if !response.status().is_success() {
            return Err(failed(format!("mapping endpoint answered {}", response.status())));
        }

        let body: MappingResponse = response.json().await.map_err(failed)?;

        body.conference
            .map(|conference| RoomId::new(conference).map_err(failed))
            .transpose()
    }
}
