//! Completion-endpoint client for soulcoach.
//!
//! One implementation covers the whole field: most completion services
//! expose an OpenAI-compatible `/v1/chat/completions` endpoint, and the
//! pipeline only ever needs a single text completion per request.

pub mod openai_compat;

pub use openai_compat::OpenAiCompatClient;

use std::sync::Arc;

use soulcoach_config::AppConfig;
use soulcoach_core::CompletionClient;

/// Build the completion client from configuration.
///
/// `provider` may be a well-known name ("openai", "openrouter", "ollama", …)
/// or a full base URL for a custom endpoint.
pub fn build_from_config(config: &AppConfig) -> Arc<dyn CompletionClient> {
    let api_key = config.api_key.clone().unwrap_or_default();

    if config.provider.starts_with("http://") || config.provider.starts_with("https://") {
        return Arc::new(OpenAiCompatClient::new("custom", &config.provider, api_key));
    }

    let base_url = default_base_url(&config.provider);
    Arc::new(OpenAiCompatClient::new(&config.provider, base_url, api_key))
}

/// The default base URL for well-known providers.
fn default_base_url(provider_name: &str) -> String {
    match provider_name {
        "openai" => "https://api.openai.com/v1".into(),
        "openrouter" => "https://openrouter.ai/api/v1".into(),
        "ollama" => "http://localhost:11434/v1".into(),
        "deepseek" => "https://api.deepseek.com/v1".into(),
        "groq" => "https://api.groq.com/openai/v1".into(),
        "together" => "https://api.together.xyz/v1".into(),
        "vllm" => "http://localhost:8000/v1".into(),
        _ => format!("https://{provider_name}.api.example.com/v1"),
    }
}
