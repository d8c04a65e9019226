//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /api/health — liveness plus a database round trip.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let db_ok = state.db_pool.health_check().await.unwrap_or(false);

    Json(json!({
        "status": if db_ok { "healthy" } else { "unhealthy" },
        "database": db_ok,
        "connections": state.engine.connection_count(),
    }))
}
