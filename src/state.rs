use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::NDEL_INSTALL_HINT;
use crate::ndel::{NdelEngine, NdelServiceClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub ndel: Arc<dyn NdelEngine>,
    /// Resolved once at startup; handlers read the cached flag instead of
    /// re-probing the engine per request.
    pub ndel_available: bool,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let base_url = std::env::var("NDEL_SERVICE_URL")
            .unwrap_or_else(|_| config.ndel_service_url.clone());
        let client = NdelServiceClient::new(base_url);

        info!("Delegating to NDEL engine at {}", client.base_url());
        let ndel_available = client.health_check().await.unwrap_or(false);
        if !ndel_available {
            warn!("NDEL engine not reachable: {}", NDEL_INSTALL_HINT);
        }

        Ok(Self {
            config,
            ndel: Arc::new(client),
            ndel_available,
        })
    }

    /// Build state around an injected engine. Used by tests to run the HTTP
    /// layer against a stub without the real dependency.
    pub fn with_engine(config: Config, ndel: Arc<dyn NdelEngine>, ndel_available: bool) -> Self {
        Self {
            config,
            ndel,
            ndel_available,
        }
    }
}
