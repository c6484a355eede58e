//! End-to-end integration tests for the soulcoach tutoring service.
//!
//! These tests exercise the full pipeline from user input to sanitized
//! reply, including subject resolution, instruction assembly, the scripted
//! completion boundary, and the response sanitizer.

use std::sync::Arc;
use std::sync::Mutex;

use soulcoach_config::AppConfig;
use soulcoach_core::error::CompletionError;
use soulcoach_core::message::{ChatMessage, ChatRole};
use soulcoach_core::provider::{
    CompletionClient, CompletionRequest, CompletionResponse, Usage,
};
use soulcoach_core::subject::Audience;
use soulcoach_core::turn::Turn;
use soulcoach_pipeline::{CoachPipeline, TurnRequest};
use soulcoach_prompt::{CoachRules, LanguagePreference};

// ── Mock client ──────────────────────────────────────────────────────────

/// A mock completion client that returns a scripted reply and records
/// every request it receives.
struct ScriptedClient {
    reply: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_messages(&self) -> Vec<ChatMessage> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .expect("no request recorded")
            .messages
            .clone()
    }
}

#[async_trait::async_trait]
impl CompletionClient for ScriptedClient {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.requests.lock().unwrap().push(request);
        Ok(CompletionResponse {
            text: self.reply.clone(),
            model: "mock".into(),
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
        })
    }
}

fn pipeline(client: Arc<ScriptedClient>) -> CoachPipeline {
    CoachPipeline::new(&AppConfig::default(), client, CoachRules::builtin())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn division_turn_yields_sanitized_reply() {
    // A student asks "20 ÷ 5" and the model leaks the final answer.
    // The learner must never see it.
    let client = ScriptedClient::new("20 ÷ 5 = 4. Great job!");
    let reply = pipeline(client.clone())
        .handle(&TurnRequest {
            message: "20 ÷ 5".into(),
            audience: Audience::Student,
            explicit_subject: None,
            language: LanguagePreference::Auto,
            history: Vec::new(),
        })
        .await
        .unwrap();

    assert_eq!(client.calls(), 1);
    assert!(!reply.contains("= 4"));
    assert!(reply.trim().ends_with('?') || reply.trim().ends_with('!'));
    assert!(!reply.trim().is_empty());
}

#[tokio::test]
async fn instruction_set_carries_all_layers_in_order() {
    let client = ScriptedClient::new("ok!");
    let request = TurnRequest {
        message: "giv mig idéer til musikundervisning".into(),
        audience: Audience::Teacher,
        explicit_subject: Some("musik".into()),
        language: LanguagePreference::Da,
        history: vec![Turn::user("tidligere spørgsmål")],
    };
    pipeline(client.clone()).handle(&request).await.unwrap();

    let messages = client.last_messages();

    // Subject directive first, with the explicit subject locked in.
    assert!(messages[0].content.contains("Active subject: music"));
    // Guardrail rules second.
    assert!(messages[1].content.contains("NEVER reveal the final numeric result"));
    // Teacher framing third.
    assert!(messages[2].content.contains("Danish teacher"));
    // Explicit Danish framing fourth.
    assert_eq!(messages[3].content, "Reply in Danish.");
    // Worked examples follow the system block.
    assert!(
        messages[4..]
            .iter()
            .all(|m| m.role != ChatRole::System)
    );
    // The live user message is last.
    let last = messages.last().unwrap();
    assert_eq!(last.role, ChatRole::User);
    assert_eq!(last.content, "giv mig idéer til musikundervisning");
}

#[tokio::test]
async fn generic_follow_up_stays_in_prior_subject() {
    let client = ScriptedClient::new("Mere musik på vej!");
    pipeline(client.clone())
        .handle(&TurnRequest {
            message: "give me more examples".into(),
            audience: Audience::Student,
            explicit_subject: None,
            language: LanguagePreference::Auto,
            history: vec![
                Turn::user("idéer til rytme-aktiviteter i musikundervisning"),
                Turn::assistant("1) Body percussion call-and-response."),
            ],
        })
        .await
        .unwrap();

    let messages = client.last_messages();
    assert!(messages[0].content.contains("Active subject: music"));
}

#[tokio::test]
async fn sanitized_reply_is_stable_under_resanitization() {
    let client = ScriptedClient::new("First halve it.\n12 ÷ 3 = 4\nNow you finish.");
    let reply = pipeline(client)
        .handle(&TurnRequest {
            message: "what is 12 ÷ 3".into(),
            audience: Audience::Student,
            explicit_subject: None,
            language: LanguagePreference::Auto,
            history: Vec::new(),
        })
        .await
        .unwrap();

    assert_eq!(soulcoach_sanitize::sanitize(&reply, "what is 12 ÷ 3"), reply);
}
