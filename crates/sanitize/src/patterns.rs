//! Compiled sanitizer patterns.
//!
//! Each pattern compiles once on first use. Compilation failure is reported
//! as a `SanitizeError` instead of panicking, so the sanitizer's recovery
//! path stays reachable. All matching happens against lowercased text, which
//! also keeps the Danish operator words case-correct without relying on
//! Unicode case folding.

use regex_lite::Regex;
use std::sync::OnceLock;

use crate::SanitizeError;

/// `<number><operator><number>` in any of the supported symbol conventions.
const NUMERIC_OP_SRC: &str = r"\d+\s*[+x×*/÷-]\s*\d+";

/// Operator words, English and Danish.
const OP_WORDS_SRC: &str = r"\b(add|plus|minus|subtract|times|multiply|divide|divided by|gange|ganget|dividere|divideret|divider|læg sammen|trække fra|træk fra)\b";

/// A completed equation: expression, equality marker, numeric result.
const COMPLETED_EQUATION_SRC: &str =
    r"\d+\s*[+x×*/÷-]\s*\d+\s*(=|equals?( to)?)\s*-?\d+([.,]\d+)?";

/// A bare equality marker followed directly by a numeric value
/// ("the answer equals 42").
const BARE_EQUALITY_SRC: &str = r"(=|\bequals?( to)?\b)\s*-?\d+([.,]\d+)?";

static NUMERIC_OP: OnceLock<Option<Regex>> = OnceLock::new();
static OP_WORDS: OnceLock<Option<Regex>> = OnceLock::new();
static COMPLETED_EQUATION: OnceLock<Option<Regex>> = OnceLock::new();
static BARE_EQUALITY: OnceLock<Option<Regex>> = OnceLock::new();

fn compiled(
    cell: &'static OnceLock<Option<Regex>>,
    source: &'static str,
) -> Result<&'static Regex, SanitizeError> {
    cell.get_or_init(|| Regex::new(source).ok())
        .as_ref()
        .ok_or(SanitizeError::InvalidPattern(source))
}

pub(crate) fn numeric_op() -> Result<&'static Regex, SanitizeError> {
    compiled(&NUMERIC_OP, NUMERIC_OP_SRC)
}

pub(crate) fn op_words() -> Result<&'static Regex, SanitizeError> {
    compiled(&OP_WORDS, OP_WORDS_SRC)
}

pub(crate) fn completed_equation() -> Result<&'static Regex, SanitizeError> {
    compiled(&COMPLETED_EQUATION, COMPLETED_EQUATION_SRC)
}

pub(crate) fn bare_equality() -> Result<&'static Regex, SanitizeError> {
    compiled(&BARE_EQUALITY, BARE_EQUALITY_SRC)
}
