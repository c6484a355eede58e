//! Language framing — decide which language the coach replies in.
//!
//! The widget can request Danish explicitly; otherwise the live message is
//! checked for Danish text features (ÆØÅ diacritics or the function words
//! "og", "ikke", "jeg", "du" between spaces). English is the primary
//! language, Danish the secondary.

use serde::{Deserialize, Serialize};

/// The client's explicit language preference, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    /// Reply in Danish.
    Da,
    /// No explicit preference; use the text heuristic.
    #[default]
    Auto,
}

impl LanguagePreference {
    /// Interpret the request's optional `language` field. Only "da" selects
    /// Danish; anything else (including absence) means auto-detect.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(l) if l.eq_ignore_ascii_case("da") => Self::Da,
            _ => Self::Auto,
        }
    }
}

/// Danish function words that mark a Danish-language message even without
/// diacritics. Matched with surrounding spaces to avoid substring hits.
const DANISH_FUNCTION_WORDS: [&str; 4] = [" og ", " ikke ", " jeg ", " du "];

/// Does the message look like Danish?
pub fn looks_danish(message: &str) -> bool {
    if message
        .chars()
        .any(|c| matches!(c, 'Æ' | 'Ø' | 'Å' | 'æ' | 'ø' | 'å'))
    {
        return true;
    }
    DANISH_FUNCTION_WORDS.iter().any(|w| message.contains(w))
}

/// The language-framing instruction for this turn.
pub fn language_framing(preference: LanguagePreference, message: &str) -> &'static str {
    match preference {
        LanguagePreference::Da => "Reply in Danish.",
        LanguagePreference::Auto => {
            if looks_danish(message) {
                "Reply in Danish."
            } else {
                "Reply in English unless the user clearly writes Danish."
            }
        }
    }
}
