//! Subject classification and context persistence for soulcoach.
//!
//! A deliberately simple rule engine: bilingual keyword sets per subject,
//! scanned against the recent-history window and the live message. It is
//! intentionally not a statistical classifier — the interface
//! (`text, history -> subject`) stays stable so a learned classifier could
//! replace it without touching the resolver or the assembler.
//!
//! # Determinism
//!
//! Classification of the same `(message, history)` pair always yields the
//! same result: fixed subject scan order, no randomness, no external calls.

pub mod classifier;
pub mod lexicon;
pub mod resolver;

pub use classifier::classify;
pub use resolver::{canonicalize_subject, resolve};
