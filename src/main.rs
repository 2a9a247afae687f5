use gemini_proxy::config::ProxyConfig;
use gemini_proxy::logger;
use gemini_proxy::server::AxumServer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logger();

    let config = ProxyConfig::from_env()?;
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; generate requests will answer 500");
    }

    let (server, handle) = AxumServer::start(config)
        .await
        .map_err(anyhow::Error::msg)?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    server.stop();
    handle.await?;

    Ok(())
}
