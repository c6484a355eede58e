//! The instruction assembler.
//!
//! Produces the ordered instruction sequence for one completion call:
//!
//! 1. Active-subject directive (keeps generic follow-ups on-topic)
//! 2. Static coach rules (identity, tone, guardrails)
//! 3. Role framing for the audience
//! 4. Language framing for this turn
//! 5. Worked examples
//! 6. Bounded recent history, oldest-first
//! 7. The live user turn, always last
//!
//! Assembly is deterministic: identical inputs always produce identical
//! instruction sets. The set is built fresh per request and shares no
//! mutable state with other requests.

use soulcoach_core::{ActiveSubjectDecision, Audience, ChatMessage, InstructionSet, Turn};

use crate::fewshot::worked_examples;
use crate::language::{LanguagePreference, language_framing};
use crate::roles::role_framing;
use crate::rules::CoachRules;

/// Assembles instruction sets. Stateless — create one and reuse it.
#[derive(Debug, Clone)]
pub struct InstructionAssembler {
    rules: CoachRules,
    history_window: usize,
}

impl InstructionAssembler {
    /// Create an assembler with the loaded rules and history window size.
    pub fn new(rules: CoachRules, history_window: usize) -> Self {
        Self {
            rules,
            history_window,
        }
    }

    /// Build the instruction set for one turn.
    pub fn assemble(
        &self,
        decision: ActiveSubjectDecision,
        audience: Audience,
        language: LanguagePreference,
        history: &[Turn],
        message: &str,
    ) -> InstructionSet {
        let mut set = InstructionSet::new();

        set.push(ChatMessage::system(subject_directive(decision)));
        set.push(ChatMessage::system(&self.rules.text));
        set.push(ChatMessage::system(format!(
            "Context: {}",
            role_framing(audience)
        )));
        set.push(ChatMessage::system(language_framing(language, message)));

        for example in worked_examples() {
            set.push(example);
        }

        // Oldest-first window; only the most recent turns are kept.
        let start = history.len().saturating_sub(self.history_window);
        for turn in &history[start..] {
            set.push(ChatMessage::from(turn));
        }

        set.push(ChatMessage::user(message));
        set
    }
}

/// The active-subject directive for this turn.
fn subject_directive(decision: ActiveSubjectDecision) -> String {
    format!(
        "Active subject: {subject}. Stay within {subject} when the user sends \
         generic follow-ups (\"give me examples\", \"more on that\") — only \
         switch subject when the user clearly asks for a different one.",
        subject = decision.subject
    )
}
