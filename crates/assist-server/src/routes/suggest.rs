use assist_core::suggest::{suggest, Suggestion};
use assist_core::AssistError;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::routes::lenient_json;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub ticket_id: String,
    #[serde(flatten)]
    pub suggestion: Suggestion,
}

/// POST /suggest — canned reply for `{ ticket_id }`.
///
/// A missing or unknown `ticket_id` is a 404.
pub async fn suggest_reply(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<Json<SuggestResponse>, AppError> {
    let body = lenient_json(&body);
    let Some(ticket_id) = body.get("ticket_id").and_then(|v| v.as_str()) else {
        tracing::debug!("suggest called without a string ticket_id");
        return Err(AssistError::TicketNotFound(String::new()).into());
    };

    let ticket = app.registry.get(ticket_id).inspect_err(|_| {
        tracing::debug!(ticket_id, "suggest for unknown ticket");
    })?;

    Ok(Json(SuggestResponse {
        ticket_id: ticket.ticket_id.clone(),
        suggestion: suggest(ticket),
    }))
}
