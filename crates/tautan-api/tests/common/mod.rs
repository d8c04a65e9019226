//! Shared test harness: the full router wired to no-op gateways and a
//! lazily created pool pointing at an unreachable database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tautan_api::{AppState, build_router};
use tautan_auth::{JwtDecoder, JwtEncoder};
use tautan_core::config::app::ServerConfig;
use tautan_core::config::auth::AuthConfig;
use tautan_core::config::logging::LoggingConfig;
use tautan_core::config::push::PushConfig;
use tautan_core::config::realtime::RealtimeConfig;
use tautan_core::config::{AppConfig, DatabaseConfig};
use tautan_core::result::AppResult;
use tautan_core::types::UserId;
use tautan_database::DatabasePool;
use tautan_database::repositories::PushSubscriptionRepository;
use tautan_entity::chat::{ChatMessage, ContactSummary};
use tautan_entity::gateway::{ChatStore, PushDispatch};
use tautan_realtime::engine::ChatEngine;

const SECRET: &str = "handshake-test-secret";

pub struct EmptyStore;

#[async_trait]
impl ChatStore for EmptyStore {
    async fn persist_message(
        &self,
        _from: UserId,
        _to: UserId,
        _body: &str,
    ) -> AppResult<ChatMessage> {
        unreachable!("no frame reaches the store in these tests")
    }

    async fn fetch_history(&self, _a: UserId, _b: UserId) -> AppResult<Vec<ChatMessage>> {
        Ok(Vec::new())
    }

    async fn fetch_contacts(&self, _user: UserId) -> AppResult<Vec<ContactSummary>> {
        Ok(Vec::new())
    }

    async fn mark_thread_read(&self, _user: UserId, _peer: UserId) -> AppResult<()> {
        Ok(())
    }
}

pub struct NoopPush;

#[async_trait]
impl PushDispatch for NoopPush {
    async fn push_notify(&self, _recipient: UserId, _sender: UserId, _body: &str) -> AppResult<()> {
        Ok(())
    }
}

pub struct Harness {
    pub router: Router,
    pub engine: Arc<ChatEngine>,
    pub encoder: JwtEncoder,
}

impl Harness {
    pub fn new() -> Self {
        let auth = AuthConfig {
            jwt_secret: SECRET.to_string(),
            token_ttl_seconds: 3600,
        };
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origin: "http://localhost:5173".to_string(),
            },
            // Port 1 refuses immediately, so the health round trip fails
            // fast instead of waiting out a connect timeout.
            database: DatabaseConfig {
                url: "postgres://localhost:1/unused".to_string(),
                max_connections: 1,
                min_connections: 0,
                connect_timeout_seconds: 1,
                idle_timeout_seconds: 1,
            },
            auth: auth.clone(),
            push: PushConfig {
                enabled: false,
                service_url: String::new(),
                vapid_public_key: String::new(),
                contact_email: String::new(),
                timeout_seconds: 1,
                ttl_seconds: 60,
            },
            realtime: RealtimeConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db_pool = DatabasePool::connect_lazy(&config.database).expect("lazy pool");

        let engine = Arc::new(ChatEngine::new(
            &config.realtime,
            Arc::new(EmptyStore),
            Arc::new(NoopPush),
        ));

        let state = AppState {
            config: Arc::new(config),
            db_pool: db_pool.clone(),
            jwt_decoder: Arc::new(JwtDecoder::new(&auth)),
            engine: Arc::clone(&engine),
            subscriptions: Arc::new(PushSubscriptionRepository::new(db_pool.pool().clone())),
        };

        Self {
            router: build_router(state),
            engine,
            encoder: JwtEncoder::new(&auth),
        }
    }

    /// Plain GET, returning the status and parsed JSON body.
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, body)
    }

    /// WebSocket upgrade request against `/ws`, returning only the status.
    pub async fn upgrade_request(&self, uri: &str) -> StatusCode {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .header("host", "localhost")
            .header("connection", "upgrade")
            .header("upgrade", "websocket")
            .header("sec-websocket-version", "13")
            .header("sec-websocket-key", "dGhlIHNhbXBsZSBub25jZQ==")
            .body(Body::empty())
            .expect("build request");

        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("send request")
            .status()
    }
}
