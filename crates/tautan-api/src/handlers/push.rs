//! Push subscription endpoints.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use tautan_entity::push::SubscriptionKeys;

use crate::error::ApiError;
use crate::extract::AuthUser;
use crate::state::AppState;

/// Request body for saving a browser push subscription.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    /// Push service endpoint URL.
    pub endpoint: String,
    /// Client encryption keys.
    pub keys: SubscriptionKeys,
}

/// POST /api/subscribe — save or update the caller's push subscription.
pub async fn subscribe(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<Value>, ApiError> {
    state
        .subscriptions
        .upsert(&req.endpoint, user.user_id, &req.keys)
        .await?;

    info!(user_id = user.user_id, "Push subscription saved");
    Ok(Json(json!({
        "success": true,
        "message": "Push subscription saved",
    })))
}

/// GET /api/vapid-public-key — application key for the browser's Push API.
pub async fn vapid_public_key(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "publicKey": state.config.push.vapid_public_key }))
}
