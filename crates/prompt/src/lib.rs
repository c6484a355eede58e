//! Instruction assembly for soulcoach.
//!
//! Builds the ordered instruction sequence sent to the completion endpoint:
//! the active-subject directive, the static coach rules, role framing,
//! language framing, the fixed worked examples, the bounded recent history,
//! and the live user turn — in that order.
//!
//! Ordering is load-bearing: later instructions take precedence over earlier
//! generic ones, so the turn-specific directives come before the worked
//! examples and the live user message is always last.

pub mod assembler;
pub mod fewshot;
pub mod language;
pub mod roles;
pub mod rules;

pub use assembler::InstructionAssembler;
pub use language::{LanguagePreference, language_framing};
pub use roles::role_framing;
pub use rules::{CoachRules, RulesSource};
