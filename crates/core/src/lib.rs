//! # soulcoach Core
//!
//! Domain types, traits, and error definitions for the soulcoach tutoring
//! service. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The completion backend is defined as a trait here; the implementation
//! lives in `soulcoach-providers`. This enables:
//! - Swapping the completion endpoint via configuration
//! - Easy testing with scripted/stub clients
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod message;
pub mod provider;
pub mod subject;
pub mod turn;

// Re-export key types at crate root for ergonomics
pub use error::{CompletionError, Error, Result};
pub use message::{ChatMessage, ChatRole, InstructionSet};
pub use provider::{CompletionClient, CompletionRequest, CompletionResponse, Usage};
pub use subject::{ActiveSubjectDecision, Audience, SubjectId, SubjectSource};
pub use turn::{Speaker, Turn};
