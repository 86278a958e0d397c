//! numfact - HTTP API for integer classification and number trivia
//!
//! This crate provides a small HTTP service that classifies a signed integer
//! and decorates the result with a "fun fact" fetched from an external
//! numbers trivia provider. It supports:
//!
//! - **Classification**: primality, perfection, Armstrong property, parity,
//!   and digit sum, computed by pure allocation-free predicates
//! - **Fun Facts**: cache-aside lookup against the provider with a bounded
//!   timeout and a per-entry time-to-live
//! - **Health Probes**: liveness and readiness endpoints
//!
//! # Features
//!
//! - **Middleware**: compression, CORS, request ID tracking, structured logging
//! - **Configuration**: environment variable and file-based configuration
//! - **Error Handling**: canonical JSON error responses with error codes
//! - **Graceful Shutdown**: proper signal handling for production deployments
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use numfact::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     numfact::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /api/classify-number?number=<n>` - Classify an integer

pub mod classifier;
pub mod config;
pub mod error;
pub mod facts;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use facts::FactCache;
pub use server::{build_router, start_server};
pub use state::ServerState;
