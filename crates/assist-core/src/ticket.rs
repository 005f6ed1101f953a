//! Fixed, process-lifetime ticket list.
//!
//! The registry is built once at startup (from the built-in seed list or the
//! `tickets` section of `assist.yaml`) and handed to whoever needs it. Nothing
//! mutates it afterwards.

use crate::error::{AssistError, Result};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    Pending,
    Solved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Solved => "solved",
            TicketStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub subject: String,
    pub body: String,
    pub status: TicketStatus,
}

/// The demo tickets served when no `tickets` list is configured.
pub fn seed_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            ticket_id: "tkt_001".to_string(),
            subject: "Internet not working".to_string(),
            body: "My internet has been down since 7am. Please help.".to_string(),
            status: TicketStatus::Open,
        },
        Ticket {
            ticket_id: "tkt_002".to_string(),
            subject: "Double charged on my bill".to_string(),
            body: "I think I was billed twice for last month.".to_string(),
            status: TicketStatus::Open,
        },
    ]
}

// ---------------------------------------------------------------------------
// TicketRegistry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TicketRegistry {
    tickets: Vec<Ticket>,
}

impl TicketRegistry {
    /// Build a registry from `tickets`, keeping their order.
    ///
    /// Ticket ids must be unique; a duplicate is a configuration error.
    pub fn new(tickets: Vec<Ticket>) -> Result<Self> {
        for (i, t) in tickets.iter().enumerate() {
            if tickets[..i].iter().any(|o| o.ticket_id == t.ticket_id) {
                return Err(AssistError::InvalidConfig(format!(
                    "duplicate ticket_id '{}'",
                    t.ticket_id
                )));
            }
        }
        Ok(Self { tickets })
    }

    pub fn seeded() -> Self {
        Self {
            tickets: seed_tickets(),
        }
    }

    /// All tickets in seed order.
    pub fn list(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn find_by_id(&self, ticket_id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.ticket_id == ticket_id)
    }

    /// Like [`find_by_id`](Self::find_by_id) but unknown ids become
    /// [`AssistError::TicketNotFound`].
    pub fn get(&self, ticket_id: &str) -> Result<&Ticket> {
        self.find_by_id(ticket_id)
            .ok_or_else(|| AssistError::TicketNotFound(ticket_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
