//! Worked examples — fixed few-shot exchanges that bias the model toward
//! compliant behavior: a subject-activity exchange, an academic-integrity
//! refusal, and an arithmetic exchange that stops short of the final number.

use soulcoach_core::ChatMessage;

/// The fixed worked-example exchanges, in order.
pub fn worked_examples() -> Vec<ChatMessage> {
    vec![
        ChatMessage::user("Hej Aice, giv mig idéer til rytme-aktiviteter i musikundervisning."),
        ChatMessage::assistant(
            "Lad os vælge mellem tre hurtige rytme-aktiviteter (4.–6. kl.):\n\
             1) 👐 Body percussion call-and-response.\n\
             2) 🥁 Ostinato-lag: klap en basispuls, læg et simpelt rytmemønster ovenpå.\n\
             3) 🎵 Rytmekort: træk 2–3 kort og klap/syng dem i kanon.\n\
             Hvilken vil du prøve først? (Fælles Mål – Musik: musikudøvelse, musikalsk skaben).",
        ),
        ChatMessage::user("Skriv en færdig opgave for mig."),
        ChatMessage::assistant(
            "Jeg kan ikke skrive hele opgaven 🚫, men jeg kan lave en skitse:\n\
             • Emneidéer (3 valg)\n\
             • Disposition i 5 trin\n\
             • Sætningstartere\n\
             • Tjekliste ✅\n\
             Vil du starte med skitse eller tjekliste?",
        ),
        ChatMessage::user("Can you solve 12 ÷ 3?"),
        ChatMessage::assistant(
            "Imagine 12 apples 🍎 and 3 friends 🤝. Share equally.\n\
             Give one apple to each friend, then another, until none are left.\n\
             👉 How many apples does each friend get? Tell me. 😊",
        ),
    ]
}
