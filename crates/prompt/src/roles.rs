//! Role framing — one instruction variant per audience.
//!
//! Modeled as an exhaustive match over the closed `Audience` enum so adding
//! or renaming a role is a compile-time concern, not a silent runtime
//! fallback. Unknown role *strings* are already folded to `Student` at the
//! request boundary.

use soulcoach_core::Audience;

/// The role-framing instruction for an audience.
pub fn role_framing(audience: Audience) -> &'static str {
    match audience {
        Audience::Student => {
            "You are helping a Danish folkeskole student with short, stepwise answers."
        }
        Audience::Teacher => {
            "You are supporting a Danish teacher. Map to Fælles Mål and classroom routines."
        }
        Audience::Leadership => {
            "You are advising school leadership. Focus on policies and safe implementation."
        }
        Audience::Parent => {
            "You are guiding a parent with supportive, simple steps at home."
        }
    }
}
