use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Inbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Base URL of the external fact provider
    #[serde(default = "default_fact_provider_url")]
    pub fact_provider_url: String,

    /// Optional provider category appended to the lookup path (e.g. "math")
    #[serde(default)]
    pub fact_category: Option<String>,

    /// Timeout for a single outbound fact lookup in seconds
    #[serde(default = "default_fact_timeout_secs")]
    pub fact_timeout_secs: u64,

    /// Time-to-live for cached facts in seconds
    #[serde(default = "default_fact_cache_ttl_secs")]
    pub fact_cache_ttl_secs: u64,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            fact_provider_url: default_fact_provider_url(),
            fact_category: None,
            fact_timeout_secs: default_fact_timeout_secs(),
            fact_cache_ttl_secs: default_fact_cache_ttl_secs(),
            enable_cors: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("numfact").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("NUMFACT").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get inbound request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get outbound fact lookup timeout as Duration
    pub fn fact_timeout(&self) -> Duration {
        Duration::from_secs(self.fact_timeout_secs)
    }

    /// Get fact cache time-to-live as Duration
    pub fn fact_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.fact_cache_ttl_secs)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_fact_provider_url() -> String {
    "http://numbersapi.com".to_string()
}

fn default_fact_timeout_secs() -> u64 {
    5
}

fn default_fact_cache_ttl_secs() -> u64 {
    3600
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
