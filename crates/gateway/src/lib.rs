//! HTTP API gateway for soulcoach.
//!
//! Exposes the coach endpoint the chat widget talks to, plus health acks.
//! Built on Axum. CORS is fully permissive by design — the widget is
//! embedded in third-party school pages.
//!
//! Endpoints:
//!
//! - `POST /api/coach` — send a message, get a sanitized reply
//! - `GET  /api/coach` — health acknowledgement for the widget
//! - `GET  /health`    — health acknowledgement for monitoring

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use soulcoach_config::AppConfig;
use soulcoach_core::provider::CompletionClient;
use soulcoach_core::subject::Audience;
use soulcoach_core::turn::Turn;
use soulcoach_pipeline::{CoachPipeline, TurnRequest};
use soulcoach_prompt::{CoachRules, LanguagePreference};

/// Shared application state for the gateway.
pub struct GatewayState {
    pub config: AppConfig,
    pub pipeline: CoachPipeline,
}

impl GatewayState {
    /// Build state from config and a completion client, loading the coach
    /// rules once.
    pub fn new(config: AppConfig, client: Arc<dyn CompletionClient>) -> Self {
        let rules = CoachRules::load(
            config
                .coach
                .rules_path
                .as_deref()
                .map(std::path::Path::new),
        );
        let pipeline = CoachPipeline::new(&config, client, rules);
        Self { config, pipeline }
    }
}

type SharedState = Arc<GatewayState>;

/// Build the Axum router with all gateway routes.
///
/// Layers applied:
/// - Permissive CORS (the widget is embedded cross-origin)
/// - Request body size limit (64 KiB)
/// - HTTP trace logging
pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/coach", get(coach_probe_handler).post(coach_handler))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Start the gateway HTTP server.
pub async fn start(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let host = config.gateway.host.clone();
    let port = config.gateway.port;
    let addr = format!("{host}:{port}");

    let client = soulcoach_providers::build_from_config(&config);
    let state = Arc::new(GatewayState::new(config, client));
    let app = build_router(state);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Request / Response types ---

#[derive(Deserialize)]
struct CoachRequest {
    /// The user's message. Required; blank is rejected with 400.
    #[serde(default)]
    message: String,

    /// Audience role; unrecognized values fall back to "student".
    #[serde(default)]
    role: Option<String>,

    /// Explicit subject from the widget dropdown.
    #[serde(default)]
    subject: Option<String>,

    /// "da" requests Danish replies.
    #[serde(default)]
    language: Option<String>,

    /// Recent turns, oldest-first.
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct HistoryEntry {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct CoachReply {
    reply: String,
}

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    route: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }
}

// --- Handlers ---

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        route: "/health",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The widget probes its own endpoint with GET before first use.
async fn coach_probe_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        route: "/api/coach",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Not found")),
    )
}

async fn coach_handler(
    State(state): State<SharedState>,
    Json(payload): Json<CoachRequest>,
) -> Result<Json<CoachReply>, (StatusCode, Json<ErrorResponse>)> {
    if payload.message.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Missing 'message' in body")),
        ));
    }

    if !state.config.has_api_key() {
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Missing API key")),
        ));
    }

    let history = payload
        .history
        .iter()
        .map(|entry| {
            if entry.role == "assistant" {
                Turn::assistant(&entry.content)
            } else {
                Turn::user(&entry.content)
            }
        })
        .collect();

    let request = TurnRequest {
        message: payload.message,
        audience: Audience::parse_or_default(payload.role.as_deref()),
        explicit_subject: payload.subject,
        language: LanguagePreference::parse(payload.language.as_deref()),
        history,
    };

    info!(
        message_len = request.message.len(),
        history_len = request.history.len(),
        "Coach message received"
    );

    match state.pipeline.handle(&request).await {
        Ok(reply) => Ok(Json(CoachReply { reply })),
        Err(e) => {
            error!(error = %e, "Completion failed");
            let status = StatusCode::from_u16(e.upstream_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((
                status,
                Json(ErrorResponse {
                    error: "Upstream error".into(),
                    detail: Some(serde_json::json!({
                        "status": e.upstream_status(),
                        "message": e.to_string(),
                    })),
                }),
            ))
        }
    }
}
