//! Application state shared across all handlers.

use std::sync::Arc;

use tautan_auth::jwt::JwtDecoder;
use tautan_core::config::AppConfig;
use tautan_database::DatabasePool;
use tautan_database::repositories::PushSubscriptionRepository;
use tautan_realtime::engine::ChatEngine;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: DatabasePool,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Real-time chat engine.
    pub engine: Arc<ChatEngine>,
    /// Push subscription repository.
    pub subscriptions: Arc<PushSubscriptionRepository>,
}
