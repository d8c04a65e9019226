//! Tautan Server — Real-time chat and presence service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tautan_core::config::AppConfig;
use tautan_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TAUTAN_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Tautan v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let database = tautan_database::connection::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    tautan_database::migration::run_migrations(database.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(tautan_database::repositories::user::UserRepository::new(
        database.pool().clone(),
    ));
    let chat_repo = Arc::new(tautan_database::repositories::chat::ChatRepository::new(
        database.pool().clone(),
    ));
    let subscription_repo = Arc::new(
        tautan_database::repositories::push_subscription::PushSubscriptionRepository::new(
            database.pool().clone(),
        ),
    );

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let jwt_decoder = Arc::new(tautan_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    // ── Step 4: Initialize push dispatcher ───────────────────────
    if config.push.enabled {
        tracing::info!("Push notifications enabled");
    } else {
        tracing::info!("Push notifications disabled");
    }
    let push_dispatcher = Arc::new(tautan_push::dispatcher::WebPushDispatcher::new(
        Arc::clone(&user_repo),
        Arc::clone(&subscription_repo),
        config.push.clone(),
    ));

    // ── Step 5: Initialize chat engine ───────────────────────────
    tracing::info!("Initializing chat engine...");
    let engine = Arc::new(tautan_realtime::engine::ChatEngine::new(
        &config.realtime,
        Arc::clone(&chat_repo) as Arc<dyn tautan_entity::gateway::ChatStore>,
        Arc::clone(&push_dispatcher) as Arc<dyn tautan_entity::gateway::PushDispatch>,
    ));
    tracing::info!("Chat engine initialized");

    // ── Step 6: Build and start HTTP server ──────────────────────
    tracing::info!(
        "Starting HTTP server on {}:{}...",
        config.server.host,
        config.server.port
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = tautan_api::state::AppState {
        config: Arc::new(config),
        db_pool: database.clone(),
        jwt_decoder,
        engine: Arc::clone(&engine),
        subscriptions: subscription_repo,
    };

    let app = tautan_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Tautan server listening on {}", addr);

    // ── Step 7: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    engine.shutdown();
    database.close().await;

    tracing::info!("Tautan server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
