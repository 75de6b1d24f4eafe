//! Server configuration, read from the environment.

use serde::{Deserialize, Serialize};

const DEFAULT_CAMARA_URL: &str = "https://dadosabertos.camara.leg.br/api/v2";
const DEFAULT_SENADO_URL: &str = "https://legis.senado.leg.br/dadosabertos";

/// Top-level Plenário configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlenarioConfig {
    /// HTTP server port.
    pub port: u16,
    /// Base URL of the Câmara dos Deputados open-data API.
    pub camara_base_url: String,
    /// Base URL of the Senado open-data API.
    pub senado_base_url: String,
    /// Upstream request timeout in seconds.
    pub request_timeout_secs: u64,
    /// User-Agent sent to the upstream APIs.
    pub user_agent: String,
}

impl PlenarioConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3003);

        let camara_base_url = std::env::var("CAMARA_API_URL")
            .unwrap_or_else(|_| DEFAULT_CAMARA_URL.to_string());
        let senado_base_url = std::env::var("SENADO_API_URL")
            .unwrap_or_else(|_| DEFAULT_SENADO_URL.to_string());

        Self {
            port,
            camara_base_url,
            senado_base_url,
            request_timeout_secs: 10,
            user_agent: format!("plenario/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_official_apis() {
        let config = PlenarioConfig::from_env();
        assert!(config.camara_base_url.contains("dadosabertos.camara.leg.br"));
        assert!(config.senado_base_url.contains("senado.leg.br"));
        assert_eq!(config.request_timeout_secs, 10);
    }
}
