use assist_core::metrics::{compute, Metrics};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MetricsQuery {
    pub total_shown: Option<String>,
}

impl MetricsQuery {
    /// Absent or non-integer values count as 0.
    pub fn total_shown(&self) -> i64 {
        match self.total_shown.as_deref() {
            None => 0,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::debug!(raw, "non-numeric total_shown, using 0");
                0
            }),
        }
    }
}

/// GET /metrics?total_shown=N — aggregates over the accept log.
pub async fn get_metrics(
    State(app): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> Result<Json<Metrics>, AppError> {
    let total_shown = query.total_shown();
    let store = app.log.clone();
    let metrics = tokio::task::spawn_blocking(move || compute(&store.load(), total_shown))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))?;
    Ok(Json(metrics))
}
