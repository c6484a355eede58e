//! The subject classifier.
//!
//! Scans the recent-history window from most recent to oldest and returns
//! the first subject whose keyword set matches; the live message is only
//! consulted when no historical turn carries a signal. This ordering is what
//! makes context persistence work: a follow-up like "give me more examples"
//! has no signal of its own and inherits the subject of the prior turn.

use soulcoach_core::{SubjectId, Turn};

use crate::lexicon::subject_signal;

/// Classify the active subject for a turn.
///
/// Returns `None` when neither the history window nor the message matches
/// any subject's keyword set.
pub fn classify(message: &str, history: &[Turn]) -> Option<SubjectId> {
    for turn in history.iter().rev() {
        if let Some(subject) = match_subject(&turn.text) {
            return Some(subject);
        }
    }
    match_subject(message)
}

/// Test one text against every subject's keyword set, in fixed order.
fn match_subject(text: &str) -> Option<SubjectId> {
    let normalized = text.to_lowercase();
    SubjectId::ALL
        .into_iter()
        .find(|subject| subject_signal(*subject, &normalized))
}
