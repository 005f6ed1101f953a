use assist_core::ticket::Ticket;
use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /tickets — every ticket in the registry, in seed order.
pub async fn list_tickets(State(app): State<AppState>) -> Json<Vec<Ticket>> {
    Json(app.registry.list().to_vec())
}
