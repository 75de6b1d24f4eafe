//! Shared application state.

use plenario_camara::{CamaraClient, SenadoClient};
use plenario_core::{PlenarioConfig, Result};

/// Shared state accessible from all route handlers: the configuration and
/// the two upstream clients. There is no mutable state.
pub struct AppState {
    pub config: PlenarioConfig,
    pub camara: CamaraClient,
    pub senado: SenadoClient,
}

impl AppState {
    pub fn new(config: PlenarioConfig) -> Result<Self> {
        let camara = CamaraClient::new(
            &config.camara_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        let senado = SenadoClient::new(
            &config.senado_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;

        Ok(Self {
            config,
            camara,
            senado,
        })
    }
}
