//! Senado Federal API client — the roster endpoint only.

use std::time::Duration;

use plenario_core::{Error, Result};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::types::{SenadoListResponse, SenadoParlamentar};

pub struct SenadoClient {
    http: Client,
    base_url: String,
}

impl SenadoClient {
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `/senador/lista/atual` — senators currently in office.
    pub async fn list_senators(&self) -> Result<Vec<SenadoParlamentar>> {
        let url = format!("{}/senador/lista/atual", self.base_url);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        match response.status() {
            s if s.is_success() => response
                .json::<SenadoListResponse>()
                .await
                .map(|r| r.lista.parlamentares.parlamentar)
                .map_err(|e| Error::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(Error::NotFound(url)),
            s => Err(Error::Upstream {
                status: s.as_u16(),
                url,
            }),
        }
    }
}
