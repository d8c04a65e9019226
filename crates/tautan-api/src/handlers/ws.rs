//! WebSocket upgrade handler and socket loop.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::http::HeaderMap;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{error, info, warn};

use tautan_core::error::AppError;
use tautan_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for the WebSocket handshake.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    /// Bearer token. The browser client alternatively sends it as the
    /// WebSocket subprotocol, since the Browser API has no headers.
    pub token: Option<String>,
}

/// GET /ws — authenticated WebSocket upgrade.
///
/// The credential is verified before the upgrade completes; any failure
/// refuses the connection without a response frame and without touching
/// the presence registry.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let token = query
        .token
        .or_else(|| {
            headers
                .get("sec-websocket-protocol")
                .and_then(|v| v.to_str().ok())
                .map(|v| v.trim().to_string())
        })
        .ok_or_else(|| AppError::authentication("Missing bearer credential"))?;

    let claims = state.jwt_decoder.decode_token(&token)?;
    let user_id = claims.user_id;

    // Echo the offered subprotocol so browser clients accept the upgrade.
    Ok(ws
        .protocols([token])
        .on_upgrade(move |socket| handle_socket(state, user_id, socket)))
}

/// Drives one established connection until its transport closes.
async fn handle_socket(state: AppState, user_id: UserId, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (handle, mut outbound_rx) = state.engine.register_connection(user_id).await;
    let conn_id = handle.id;

    info!(conn_id = %conn_id, user_id, "WebSocket connection established");

    // Forward engine frames to the socket.
    let outbound_task = tokio::spawn(async move {
        while let Some(frame) = outbound_rx.recv().await {
            let text = match serde_json::to_string(&frame) {
                Ok(text) => text,
                Err(e) => {
                    error!(error = %e, "Failed to serialize outbound frame");
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut shutdown_rx = state.engine.shutdown_receiver();

    // Frames within one connection are handled in order: each inbound
    // message is fully processed before the next is read.
    loop {
        tokio::select! {
            result = ws_rx.next() => match result {
                Some(Ok(Message::Text(text))) => {
                    state.engine.handle_inbound(&handle, text.as_str()).await;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(conn_id = %conn_id, error = %e, "WebSocket error");
                    break;
                }
            },
            _ = shutdown_rx.recv() => {
                info!(conn_id = %conn_id, "Server shutting down, closing connection");
                break;
            }
        }
    }

    // Deregister before the socket task's resources go away, even when
    // the transport died mid-frame.
    outbound_task.abort();
    handle.mark_closed();
    state.engine.disconnect(user_id, conn_id);

    info!(conn_id = %conn_id, user_id, "WebSocket connection closed");
}
