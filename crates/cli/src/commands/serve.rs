//! `soulcoach serve` — start the HTTP gateway.

use soulcoach_config::AppConfig;

pub async fn run(port: Option<u16>) -> anyhow::Result<()> {
    let mut config = AppConfig::load()?;

    if let Some(port) = port {
        config.gateway.port = port;
    }

    if !config.has_api_key() {
        tracing::warn!(
            "No API key configured — coach requests will fail until SOULCOACH_API_KEY or OPENAI_API_KEY is set"
        );
    }

    soulcoach_gateway::start(config)
        .await
        .map_err(|e| anyhow::anyhow!("gateway failed: {e}"))
}
