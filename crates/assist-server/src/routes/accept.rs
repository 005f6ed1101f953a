use assist_core::entry::{AcceptEntry, AcceptRequest};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::routes::lenient_json;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AcceptResponse {
    pub ok: bool,
    pub entry: AcceptEntry,
}

/// POST /accept — record an accept/edit decision.
///
/// Body: `{ ticket_id, action?, tags?, response_time_min? }`. Missing fields
/// are recorded as null/defaults; only a failed write is an error.
pub async fn record_accept(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<Json<AcceptResponse>, AppError> {
    let entry = AcceptRequest::from_json(&lenient_json(&body)).into_entry(chrono::Utc::now());

    let store = app.log.clone();
    let to_store = entry.clone();
    tokio::task::spawn_blocking(move || store.append(&to_store))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(
        ticket_id = entry.ticket_id.as_deref().unwrap_or("-"),
        action = entry.action.as_deref().unwrap_or("-"),
        "accept recorded"
    );

    Ok(Json(AcceptResponse { ok: true, entry }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::app_state;
    use assist_core::entry::LoggedEntry;

    #[tokio::test]
    async fn appends_entry_to_log() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = app_state(&dir);
        let body = Bytes::from_static(
            br#"{"ticket_id":"tkt_001","action":"edited","response_time_min":4}"#,
        );
        let Json(resp) = record_accept(State(app.clone()), body).await.unwrap();
        assert!(resp.ok);
        assert_eq!(resp.entry.action.as_deref(), Some("edited"));

        let log = app.log.load();
        assert_eq!(log, vec![LoggedEntry::from_entry(&resp.entry).unwrap()]);
    }

    #[tokio::test]
    async fn garbage_body_still_records_default_entry() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = app_state(&dir);
        let Json(resp) = record_accept(State(app.clone()), Bytes::from_static(b"not json"))
            .await
            .unwrap();
        assert_eq!(resp.entry.ticket_id, None);
        assert_eq!(resp.entry.action.as_deref(), Some("accepted"));
        assert_eq!(app.log.load().len(), 1);
    }

    #[tokio::test]
    async fn timestamp_is_utc_iso() {
        let dir = tempfile::TempDir::new().unwrap();
        let Json(resp) = record_accept(State(app_state(&dir)), Bytes::from_static(b"{}"))
            .await
            .unwrap();
        assert!(resp.entry.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&resp.entry.timestamp).is_ok());
    }
}
