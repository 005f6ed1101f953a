use axum::Json;

pub const BANNER: &str =
    "Ticket assist backend is alive. Use /tickets, /suggest, /accept, /metrics endpoints.";

/// GET / — liveness banner.
pub async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": BANNER }))
}
