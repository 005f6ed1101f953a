//! Template-based reply suggestions. Pure function of the ticket subject.

use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};

pub const EXPLANATION: &str = "Sample suggestion (replace with real LLM later).";
pub const CONFIDENCE: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagScore {
    pub tag: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggestion: String,
    pub explanation: String,
    pub confidence: f64,
    pub tags: Vec<TagScore>,
}

fn default_tags() -> Vec<TagScore> {
    vec![
        TagScore {
            tag: "support".to_string(),
            score: 0.9,
        },
        TagScore {
            tag: "billing".to_string(),
            score: 0.4,
        },
    ]
}

pub fn suggest(ticket: &Ticket) -> Suggestion {
    Suggestion {
        suggestion: format!(
            "Hi — we're looking into your issue: '{}'. We'll update you shortly.",
            ticket.subject
        ),
        explanation: EXPLANATION.to_string(),
        confidence: CONFIDENCE,
        tags: default_tags(),
    }
}
