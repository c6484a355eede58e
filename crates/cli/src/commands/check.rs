//! `soulcoach check` — diagnose configuration and endpoint health.

use soulcoach_config::AppConfig;
use soulcoach_prompt::{CoachRules, RulesSource};

pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    println!("soulcoach configuration");
    println!("  provider:        {}", config.provider);
    println!("  model:           {}", config.model);
    println!("  temperature:     {}", config.temperature);
    println!("  max tokens:      {}", config.max_tokens);
    println!(
        "  gateway:         {}:{}",
        config.gateway.host, config.gateway.port
    );
    println!("  default subject: {}", config.coach.default_subject);
    println!("  history window:  {}", config.coach.history_window);
    println!(
        "  api key:         {}",
        if config.has_api_key() {
            "configured"
        } else {
            "MISSING"
        }
    );

    let rules = CoachRules::load(
        config
            .coach
            .rules_path
            .as_deref()
            .map(std::path::Path::new),
    );
    match rules.source {
        RulesSource::Builtin => println!("  coach rules:     built-in"),
        RulesSource::File(path) => println!("  coach rules:     {}", path.display()),
    }

    if !config.has_api_key() {
        println!("\nSet SOULCOACH_API_KEY or OPENAI_API_KEY to enable completions.");
        return Ok(());
    }

    let client = soulcoach_providers::build_from_config(&config);
    print!("\nChecking completion endpoint ({})... ", client.name());
    match client.health_check().await {
        Ok(true) => println!("reachable"),
        Ok(false) => println!("unreachable (non-success status)"),
        Err(e) => println!("failed: {e}"),
    }

    Ok(())
}
