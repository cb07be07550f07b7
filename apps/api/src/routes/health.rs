use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Service status plus reference-data shape, so operators can see what the
/// process is actually serving.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "wagecheck-api",
        "reference_data": {
            "roles": state.data.catalog.len(),
            "wage_benchmarks": state.data.wage_index.len(),
            "zip_mappings": state.data.zip_index.len(),
            "loaded_at": state.data.loaded_at,
        }
    }))
}
