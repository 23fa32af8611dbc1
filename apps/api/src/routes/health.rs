use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version, storage backend,
/// and the per-user résumé limit.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "scrollify-api",
        "storage": state.store.backend(),
        "maxResumesPerUser": state.config.max_resumes_per_user
    }))
}
