//! Accept/edit decisions recorded against a suggested reply.
//!
//! Request parsing is deliberately permissive: missing or mistyped fields
//! become null/default values rather than validation errors. Entries read
//! back from the log are kept as raw JSON and only interpreted on demand, so
//! an oddly shaped record never invalidates its neighbours.

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ACTION_ACCEPTED: &str = "accepted";

// ---------------------------------------------------------------------------
// AcceptEntry
// ---------------------------------------------------------------------------

/// A freshly built record, as written by `/accept`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptEntry {
    pub ticket_id: Option<String>,
    pub action: Option<String>,
    /// Raw tag elements as sent by the client, normally `{tag, score}`.
    pub tags: Vec<Value>,
    /// Raw value as sent; only JSON numbers count towards metrics.
    pub response_time_min: Option<Value>,
    pub timestamp: String,
}

/// UTC timestamp with microsecond precision and a literal `Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

// ---------------------------------------------------------------------------
// LoggedEntry
// ---------------------------------------------------------------------------

/// One element of the persisted log, exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoggedEntry(pub Value);

impl LoggedEntry {
    pub fn from_entry(entry: &AcceptEntry) -> Result<Self> {
        Ok(Self(serde_json::to_value(entry)?))
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|obj| obj.get(name))
    }

    pub fn ticket_id(&self) -> Option<&str> {
        self.field("ticket_id").and_then(Value::as_str)
    }

    pub fn action(&self) -> Option<&str> {
        self.field("action").and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.field("timestamp").and_then(Value::as_str)
    }

    /// Exact, case-sensitive match on `"accepted"`.
    pub fn is_accepted(&self) -> bool {
        self.action() == Some(ACTION_ACCEPTED)
    }

    /// `response_time_min` when it is a JSON number.
    pub fn response_time(&self) -> Option<f64> {
        self.field("response_time_min").and_then(Value::as_f64)
    }

    /// Keys this entry contributes to tag frequency counts, in order.
    /// A `tags` field that is not an array contributes nothing.
    pub fn tag_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.field("tags")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(tag_key)
    }
}

/// Map one raw tag element to its counting key.
///
/// `{"tag": "x", ..}` counts as `x`; anything else falls back to a textual
/// form of the element (or of its `tag` field) so malformed entries still
/// show up in the counts.
pub fn tag_key(element: &Value) -> String {
    match element {
        Value::Object(obj) => match obj.get("tag") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => Value::Null.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// AcceptRequest
// ---------------------------------------------------------------------------

/// An inbound accept/edit report, normalized from an arbitrary JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptRequest {
    pub ticket_id: Option<String>,
    pub action: Option<String>,
    pub tags: Vec<Value>,
    pub response_time_min: Option<Value>,
}

impl AcceptRequest {
    /// Non-object bodies are treated as `{}`. An absent `action` defaults to
    /// `"accepted"`; a present but null or non-string one is recorded as null.
    pub fn from_json(body: &Value) -> Self {
        let empty = Map::new();
        let obj = body.as_object().unwrap_or(&empty);

        let ticket_id = obj
            .get("ticket_id")
            .and_then(Value::as_str)
            .map(str::to_string);
        let action = match obj.get("action") {
            None => Some(ACTION_ACCEPTED.to_string()),
            Some(v) => v.as_str().map(str::to_string),
        };
        let tags = obj
            .get("tags")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let response_time_min = match obj.get("response_time_min") {
            None | Some(Value::Null) => None,
            Some(v) => Some(v.clone()),
        };

        Self {
            ticket_id,
            action,
            tags,
            response_time_min,
        }
    }

    pub fn into_entry(self, at: DateTime<Utc>) -> AcceptEntry {
        AcceptEntry {
            ticket_id: self.ticket_id,
            action: self.action,
            tags: self.tags,
            response_time_min: self.response_time_min,
            timestamp: format_timestamp(at),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
