//! School subjects, audiences, and the per-turn subject decision.
//!
//! `SubjectId` is a closed set: no subject is ever inferred outside it, and
//! unmatched text classifies to nothing rather than to a made-up subject.
//! Extending the coach to a new subject means adding a variant here and a
//! keyword set in the lexicon.

use serde::{Deserialize, Serialize};

/// A school subject the coach can lock a conversation onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectId {
    Danish,
    Math,
    English,
    Music,
    History,
}

impl SubjectId {
    /// All subjects, in the fixed order the classifier scans them.
    pub const ALL: [SubjectId; 5] = [
        SubjectId::Danish,
        SubjectId::Math,
        SubjectId::English,
        SubjectId::Music,
        SubjectId::History,
    ];

    /// Canonical English name, used in the active-subject directive.
    pub fn name(&self) -> &'static str {
        match self {
            SubjectId::Danish => "Danish",
            SubjectId::Math => "math",
            SubjectId::English => "English",
            SubjectId::Music => "music",
            SubjectId::History => "history",
        }
    }

    /// The subject key the chat widget sends in its dropdown payload.
    pub fn key(&self) -> &'static str {
        match self {
            SubjectId::Danish => "dansk",
            SubjectId::Math => "matematik",
            SubjectId::English => "engelsk",
            SubjectId::Music => "musik",
            SubjectId::History => "historie",
        }
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Who the coach is talking to. Selects the role-framing instruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    Student,
    Teacher,
    Leadership,
    Parent,
}

impl Audience {
    /// Parse a client-supplied role string.
    ///
    /// Unrecognized strings fall back to `Student` — a misnamed role must
    /// never fail a request.
    pub fn parse_or_default(role: Option<&str>) -> Self {
        match role.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("teacher") => Audience::Teacher,
            Some("leadership") => Audience::Leadership,
            Some("parent") => Audience::Parent,
            _ => Audience::Student,
        }
    }
}

/// Where the active subject for a turn came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectSource {
    /// The client sent a recognized subject with the request.
    Explicit,
    /// The classifier inferred it from the message or history.
    Inferred,
    /// Nothing matched; the configured default applied.
    Default,
}

/// The resolved subject for one turn, plus provenance.
///
/// Exactly one decision exists per request; the subject never changes
/// mid-assembly. Used only for prompt construction, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSubjectDecision {
    pub subject: SubjectId,
    pub source: SubjectSource,
}

impl ActiveSubjectDecision {
    pub fn explicit(subject: SubjectId) -> Self {
        Self {
            subject,
            source: SubjectSource::Explicit,
        }
    }

    pub fn inferred(subject: SubjectId) -> Self {
        Self {
            subject,
            source: SubjectSource::Inferred,
        }
    }

    pub fn fallback(subject: SubjectId) -> Self {
        Self {
            subject,
            source: SubjectSource::Default,
        }
    }
}
