//! `soulcoach ask` — run one message through the coach pipeline.

use anyhow::{Context, bail};

use soulcoach_config::AppConfig;
use soulcoach_core::subject::Audience;
use soulcoach_pipeline::{CoachPipeline, TurnRequest};
use soulcoach_prompt::{CoachRules, LanguagePreference};

pub async fn run(
    message: String,
    role: Option<String>,
    subject: Option<String>,
    language: Option<String>,
) -> anyhow::Result<()> {
    if message.trim().is_empty() {
        bail!("message must not be blank");
    }

    let config = AppConfig::load()?;
    if !config.has_api_key() {
        bail!("no API key configured — set SOULCOACH_API_KEY or OPENAI_API_KEY");
    }

    let client = soulcoach_providers::build_from_config(&config);
    let rules = CoachRules::load(
        config
            .coach
            .rules_path
            .as_deref()
            .map(std::path::Path::new),
    );
    let pipeline = CoachPipeline::new(&config, client, rules);

    let request = TurnRequest {
        message,
        audience: Audience::parse_or_default(role.as_deref()),
        explicit_subject: subject,
        language: LanguagePreference::parse(language.as_deref()),
        history: Vec::new(),
    };

    let reply = pipeline
        .handle(&request)
        .await
        .context("completion request failed")?;

    println!("{reply}");
    Ok(())
}
