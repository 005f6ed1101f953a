pub mod accept;
pub mod index;
pub mod metrics;
pub mod suggest;
pub mod tickets;

use axum::body::Bytes;
use serde_json::Value;

/// Decode a request body without rejecting it. Empty or non-JSON bodies
/// decode to `null`, which callers treat like an empty object.
pub(crate) fn lenient_json(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}
