//! The context persistence resolver.
//!
//! Combines the client-supplied explicit subject, the classifier's
//! inference, and the configured default into one authoritative
//! `ActiveSubjectDecision` per turn.
//!
//! Precedence: explicit → inferred → default. An explicit string that does
//! not canonicalize to a known subject fails closed — the resolver proceeds
//! to inference rather than erroring. This is the guarantee that keeps
//! free-text follow-ups ("more on that") in the previously active subject
//! instead of drifting.

use soulcoach_core::{ActiveSubjectDecision, SubjectId, Turn};
use tracing::debug;

use crate::classifier::classify;

/// Canonicalize a client-supplied subject string.
///
/// Tolerates English and Danish names and common abbreviations, the chat
/// widget's grade-prefixed keys ("10-matematik"), and its elective-suffixed
/// keys ("musik-valgfag"). Anything unrecognized yields `None`.
pub fn canonicalize_subject(raw: &str) -> Option<SubjectId> {
    let mut key = raw.trim().to_lowercase();

    // "10. klasse" variants and electives use decorated keys in the widget.
    if let Some(stripped) = key.strip_prefix("10-") {
        key = stripped.to_string();
    }
    if let Some(stripped) = key.strip_suffix("-valgfag") {
        key = stripped.to_string();
    }

    match key.as_str() {
        "dansk" | "danish" => Some(SubjectId::Danish),
        "matematik" | "mathematics" | "math" | "mat" => Some(SubjectId::Math),
        "engelsk" | "english" | "eng" => Some(SubjectId::English),
        "musik" | "music" | "mus" => Some(SubjectId::Music),
        "historie" | "history" | "hist" => Some(SubjectId::History),
        _ => None,
    }
}

/// Resolve the active subject for one turn.
pub fn resolve(
    explicit_subject: Option<&str>,
    message: &str,
    history: &[Turn],
    default_subject: SubjectId,
) -> ActiveSubjectDecision {
    if let Some(raw) = explicit_subject {
        if let Some(subject) = canonicalize_subject(raw) {
            return ActiveSubjectDecision::explicit(subject);
        }
        debug!(subject = %raw, "Unrecognized explicit subject, falling back to inference");
    }

    if let Some(subject) = classify(message, history) {
        return ActiveSubjectDecision::inferred(subject);
    }

    ActiveSubjectDecision::fallback(default_subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soulcoach_core::SubjectSource;

    #[test]
    fn explicit_subject_wins_in_both_languages() {
        // Every recognized spelling resolves as explicit, regardless of
        // message or history content.
        let cases = [
            ("engelsk", SubjectId::English),
            ("English", SubjectId::English),
            ("eng", SubjectId::English),
            ("matematik", SubjectId::Math),
            ("math", SubjectId::Math),
            ("  Musik ", SubjectId::Music),
            ("historie", SubjectId::History),
            ("history", SubjectId::History),
            ("dansk", SubjectId::Danish),
        ];

        let history = vec![Turn::user("rytme og musik")];
        for (raw, expected) in cases {
            let decision = resolve(Some(raw), "help with fractions", &history, SubjectId::English);
            assert_eq!(decision.subject, expected, "for input {raw:?}");
            assert_eq!(decision.source, SubjectSource::Explicit);
        }
    }

    #[test]
    fn widget_decorated_keys_canonicalize() {
        assert_eq!(canonicalize_subject("10-matematik"), Some(SubjectId::Math));
        assert_eq!(canonicalize_subject("musik-valgfag"), Some(SubjectId::Music));
        assert_eq!(canonicalize_subject("10-dansk"), Some(SubjectId::Danish));
    }

    #[test]
    fn unknown_explicit_fails_closed_to_inference() {
        let decision = resolve(
            Some("astrologi"),
            "help me with fractions",
            &[],
            SubjectId::English,
        );
        assert_eq!(decision.subject, SubjectId::Math);
        assert_eq!(decision.source, SubjectSource::Inferred);
    }

    #[test]
    fn follow_up_inherits_prior_subject() {
        // The single most important guarantee: a generic follow-up stays in
        // the previously active subject.
        let history = vec![
            Turn::user("giv mig idéer til rytme-aktiviteter i musikundervisning"),
            Turn::assistant("1) 👐 Body percussion call-and-response …"),
        ];
        let decision = resolve(None, "give me more examples", &history, SubjectId::English);
        assert_eq!(decision.subject, SubjectId::Music);
        assert_eq!(decision.source, SubjectSource::Inferred);
    }

    #[test]
    fn nothing_matches_uses_default() {
        let decision = resolve(None, "hi there", &[], SubjectId::English);
        assert_eq!(decision.subject, SubjectId::English);
        assert_eq!(decision.source, SubjectSource::Default);
    }

    #[test]
    fn blank_explicit_subject_is_not_a_match() {
        let decision = resolve(Some(""), "hello", &[], SubjectId::English);
        assert_eq!(decision.source, SubjectSource::Default);
    }
}
