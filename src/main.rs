//! numfact server binary
//!
//! Starts the HTTP service that classifies integers and serves number
//! trivia fetched from the configured fact provider.

use numfact::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    numfact::start_server(config).await?;

    Ok(())
}
