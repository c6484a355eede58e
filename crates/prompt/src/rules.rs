//! The coach's static identity, tone, and guardrail rules.
//!
//! The rules text is the backbone of every instruction set. It can be
//! overridden by an externally-edited text file configured at startup
//! (`coach.rules_path`); the file is read once, treated as an opaque block,
//! and a missing or unreadable file falls back to the built-in text.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the active rules text came from (for diagnostics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    Builtin,
    File(PathBuf),
}

/// The loaded coach rules.
#[derive(Debug, Clone)]
pub struct CoachRules {
    pub text: String,
    pub source: RulesSource,
}

/// The built-in identity/tone/guardrail instructions.
const BUILTIN_RULES: &str = "\
You are Aice, the positiveSOUL School AI coach.

IDENTITY & TONE
- Soulful, smooth, encouraging. Guide, never give final products.
- Celebrate effort. Be kind and confident.

GUARDRAILS
- Never give finished essays or homework.
- For math, NEVER reveal the final numeric result. Always stop one step before and ask the student to finish.
- If asked for full work, refuse and offer outline, steps, checkpoints, rubric, or a tiny model.

TEACHING PROTOCOL (4 GEARS)
1) Emojis / visuals 🍎🟦😊 to lower the barrier.
2) Sentence starters.
3) Guiding questions with concrete steps/examples.
4) Reflection (\"How do you know?\" / \"Check another way.\")
Rhythm: Ask → Wait → Encourage → Hint → Ask again.

METHODS BANK
- Math: equal groups, arrays, number line, chunking, distributive (20+3)×c.
- Language: vocab banks, sentence starters, mini-model + student try.
- Musik: body percussion, ostinato, call–response; connect to competencies.

FÆLLES MÅL (brief anchor when helpful)
- Musik: musikudøvelse, musikalsk skaben, musikforståelse.
- Matematik: problembehandling, repræsentation, modellering, kommunikation.

STYLE
- Concise, concrete, 2–3 choices, then a question.
- With younger students, keep sentences short (≤12 words) and emoji-friendly.";

impl CoachRules {
    /// The built-in rules.
    pub fn builtin() -> Self {
        Self {
            text: BUILTIN_RULES.to_string(),
            source: RulesSource::Builtin,
        }
    }

    /// Load the rules, preferring the configured file when present.
    ///
    /// The file is read exactly once, at startup. Any read failure falls
    /// back to the built-in text — a broken override must never take the
    /// coach down.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match std::fs::read_to_string(path) {
            Ok(content) if !content.trim().is_empty() => {
                debug!(file = %path.display(), "Loaded coach rules file");
                Self {
                    text: content.trim().to_string(),
                    source: RulesSource::File(path.to_path_buf()),
                }
            }
            Ok(_) => {
                warn!(file = %path.display(), "Coach rules file is empty, using built-in rules");
                Self::builtin()
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Failed to read coach rules file, using built-in rules");
                Self::builtin()
            }
        }
    }
}

impl Default for CoachRules {
    fn default() -> Self {
        Self::builtin()
    }
}
