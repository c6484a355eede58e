//! soulcoach CLI — the main entry point.
//!
//! Commands:
//! - `serve` — Start the HTTP gateway
//! - `ask`   — Send a single message through the coach pipeline
//! - `check` — Diagnose configuration and endpoint health

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "soulcoach",
    about = "soulcoach — AI tutoring coach service",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Send a single message through the coach pipeline
    Ask {
        /// The message to send
        message: String,

        /// Audience role (student, teacher, leadership, parent)
        #[arg(short, long)]
        role: Option<String>,

        /// Explicit subject (e.g. "matematik", "english")
        #[arg(short, long)]
        subject: Option<String>,

        /// Language preference ("da" for Danish)
        #[arg(short, long)]
        language: Option<String>,
    },

    /// Diagnose configuration and endpoint health
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Ask {
            message,
            role,
            subject,
            language,
        } => commands::ask::run(message, role, subject, language).await?,
        Commands::Check => commands::check::run().await?,
    }

    Ok(())
}
