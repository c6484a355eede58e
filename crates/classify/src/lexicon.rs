//! The keyword lexicon — bilingual trigger terms per subject.
//!
//! All terms are lowercase; matching is case-insensitive substring matching
//! against a lowercased copy of the text. Extending the coach to a new
//! subject means a new `SubjectId` variant plus a keyword set here.

use soulcoach_core::SubjectId;

/// Trigger terms for the Danish (first-language) subject.
const DANISH_KEYWORDS: &[&str] = &[
    "dansk",
    "stavning",
    "navneord",
    "udsagnsord",
    "tillægsord",
    "læsebog",
    "diktat",
];

/// Trigger terms for math.
const MATH_KEYWORDS: &[&str] = &[
    "matematik",
    "math",
    "regne",
    "regnestykke",
    "brøk",
    "ligning",
    "geometri",
    "geometry",
    "fraction",
    "equation",
    "algebra",
    "multiplication",
    "division",
    "÷",
    "×",
];

/// Trigger terms for English (second-language) lessons.
const ENGLISH_KEYWORDS: &[&str] = &[
    "engelsk",
    "english",
    "essay",
    "vocabulary",
    "gloser",
    "grammar",
    "spelling",
    "reading comprehension",
];

/// Unconditional music trigger terms. "noder" is unambiguous in Danish
/// (generic study notes are "noter"), so it belongs here.
const MUSIC_KEYWORDS: &[&str] = &[
    "musik",
    "music",
    "rytme",
    "rhythm",
    "melodi",
    "melody",
    "ostinato",
    "noder",
    "nodeark",
    "nodesystem",
    "instrument",
];

/// Anchor terms that disambiguate "notes" toward musical notation.
const MUSIC_ANCHORS: &[&str] = &[
    "clef",
    "scale",
    "staff",
    "beat",
    "measure",
    "treble",
    "bass",
    "sheet",
    "read music",
    "nøgle",
    "skala",
    "takt",
];

/// Terms ambiguous between generic note-taking and musical notation.
/// These only count as a music signal when an anchor co-occurs.
const AMBIGUOUS_NOTE_TERMS: &[&str] = &["notes", "noter"];

/// Trigger terms for history.
const HISTORY_KEYWORDS: &[&str] = &[
    "historie",
    "history",
    "vikinger",
    "vikings",
    "middelalder",
    "verdenskrig",
    "world war",
    "kildekritik",
    "reformation",
];

/// The keyword set for a subject.
pub fn keywords_for(subject: SubjectId) -> &'static [&'static str] {
    match subject {
        SubjectId::Danish => DANISH_KEYWORDS,
        SubjectId::Math => MATH_KEYWORDS,
        SubjectId::English => ENGLISH_KEYWORDS,
        SubjectId::Music => MUSIC_KEYWORDS,
        SubjectId::History => HISTORY_KEYWORDS,
    }
}

/// Does lowercased `text` carry a signal for `subject`?
///
/// Music gets the disambiguation rule: an ambiguous "notes" term counts only
/// when a music anchor occurs in the same text; otherwise it is not a music
/// signal at all.
pub fn subject_signal(subject: SubjectId, text: &str) -> bool {
    if keywords_for(subject).iter().any(|k| text.contains(k)) {
        return true;
    }

    if subject == SubjectId::Music {
        let ambiguous = AMBIGUOUS_NOTE_TERMS.iter().any(|k| text.contains(k));
        let anchored = MUSIC_ANCHORS.iter().any(|k| text.contains(k));
        return ambiguous && anchored;
    }

    false
}
