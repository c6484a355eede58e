//! The per-request orchestration pipeline.
//!
//! One turn flows through four stages:
//!
//! 1. **Resolve** the active subject (explicit → inferred → default)
//! 2. **Assemble** the ordered instruction set
//! 3. **Invoke** the completion endpoint (the single awaited call)
//! 4. **Sanitize** the raw completion against the original message
//!
//! The pipeline is stateless: nothing is shared or mutated across concurrent
//! requests, and the only per-request state is the instruction set being
//! assembled. Turn ordering within a conversation is the caller's concern.

use std::sync::Arc;

use soulcoach_classify::{canonicalize_subject, resolve};
use soulcoach_config::AppConfig;
use soulcoach_core::error::CompletionError;
use soulcoach_core::provider::{CompletionClient, CompletionRequest};
use soulcoach_core::subject::{Audience, SubjectId};
use soulcoach_core::turn::Turn;
use soulcoach_prompt::{CoachRules, InstructionAssembler, LanguagePreference};
use soulcoach_sanitize::SanitizationContext;
use tracing::{debug, info};

/// One incoming turn, already validated and parsed at the edge.
#[derive(Debug, Clone)]
pub struct TurnRequest {
    /// The live user message (non-blank).
    pub message: String,
    /// Who the coach is talking to.
    pub audience: Audience,
    /// The widget's explicit subject selection, if any.
    pub explicit_subject: Option<String>,
    /// The widget's explicit language preference.
    pub language: LanguagePreference,
    /// Recent turns, oldest-first. The pipeline re-caps the window.
    pub history: Vec<Turn>,
}

impl TurnRequest {
    /// A plain student message with no context — the common case in tests
    /// and one-shot CLI use.
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: text.into(),
            audience: Audience::Student,
            explicit_subject: None,
            language: LanguagePreference::Auto,
            history: Vec::new(),
        }
    }
}

/// The coach pipeline. Create once at startup, share via `Arc`.
pub struct CoachPipeline {
    client: Arc<dyn CompletionClient>,
    assembler: InstructionAssembler,
    model: String,
    temperature: f32,
    max_tokens: u32,
    default_subject: SubjectId,
}

impl CoachPipeline {
    /// Build the pipeline from configuration, a completion client, and the
    /// rules loaded at startup.
    pub fn new(config: &AppConfig, client: Arc<dyn CompletionClient>, rules: CoachRules) -> Self {
        let default_subject =
            canonicalize_subject(&config.coach.default_subject).unwrap_or(SubjectId::English);

        Self {
            client,
            assembler: InstructionAssembler::new(rules, config.coach.history_window),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            default_subject,
        }
    }

    /// Handle one turn: resolve, assemble, invoke, sanitize.
    pub async fn handle(&self, request: &TurnRequest) -> Result<String, CompletionError> {
        let decision = resolve(
            request.explicit_subject.as_deref(),
            &request.message,
            &request.history,
            self.default_subject,
        );
        debug!(
            subject = %decision.subject,
            source = ?decision.source,
            audience = ?request.audience,
            "Resolved active subject"
        );

        let instruction_set = self.assembler.assemble(
            decision,
            request.audience,
            request.language,
            &request.history,
            &request.message,
        );

        // Derived once per request; gates the post-completion scrub.
        let sanitization = SanitizationContext::derive(&request.message);

        let response = self
            .client
            .complete(CompletionRequest {
                model: self.model.clone(),
                messages: instruction_set.into_messages(),
                temperature: self.temperature,
                max_tokens: Some(self.max_tokens),
            })
            .await?;

        info!(
            client = %self.client.name(),
            model = %response.model,
            reply_len = response.text.len(),
            "Completion received"
        );

        Ok(sanitization.sanitize(&response.text))
    }
}
