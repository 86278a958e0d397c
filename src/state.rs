use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::facts::FactCache;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Fun fact cache (shared across requests)
    pub facts: Arc<FactCache>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let facts = FactCache::new(&config)
            .map_err(|e| ServerError::Config(format!("Failed to build fact cache: {e}")))?;

        Ok(Self {
            config: Arc::new(config),
            facts: Arc::new(facts),
        })
    }
}
