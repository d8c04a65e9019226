//! Push dispatcher — builds chat notification payloads and forwards them
//! to the push delivery service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

use tautan_core::config::push::PushConfig;
use tautan_core::error::AppError;
use tautan_core::result::AppResult;
use tautan_core::types::UserId;
use tautan_database::repositories::{PushSubscriptionRepository, UserRepository};
use tautan_entity::gateway::PushDispatch;
use tautan_entity::push::SubscriptionKeys;

/// Notification payload shown by the browser's service worker.
#[derive(Debug, Serialize)]
struct ChatNotificationPayload {
    /// Notification type, used by the client for navigation.
    #[serde(rename = "type")]
    kind: &'static str,
    /// Human-readable notification text.
    message: String,
    /// The sender's user id, so the client can open the right thread.
    #[serde(rename = "contactId")]
    contact_id: UserId,
}

/// Request body sent to the push delivery service.
#[derive(Debug, Serialize)]
struct PushDeliveryRequest<'a> {
    /// The recipient's stored subscription.
    subscription: SubscriptionRef<'a>,
    /// JSON-encoded notification payload.
    payload: String,
    /// Time-to-live in seconds.
    ttl: u32,
}

#[derive(Debug, Serialize)]
struct SubscriptionRef<'a> {
    endpoint: &'a str,
    keys: &'a SubscriptionKeys,
}

/// Dispatches chat notifications through the configured push service.
///
/// VAPID signing and payload encryption are the delivery service's
/// concern; this side only resolves names and subscriptions.
#[derive(Debug, Clone)]
pub struct WebPushDispatcher {
    users: Arc<UserRepository>,
    subscriptions: Arc<PushSubscriptionRepository>,
    client: reqwest::Client,
    config: PushConfig,
}

impl WebPushDispatcher {
    /// Create a new dispatcher.
    pub fn new(
        users: Arc<UserRepository>,
        subscriptions: Arc<PushSubscriptionRepository>,
        config: PushConfig,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_default();

        Self {
            users,
            subscriptions,
            client,
            config,
        }
    }
}

#[async_trait]
impl PushDispatch for WebPushDispatcher {
    async fn push_notify(&self, recipient: UserId, sender: UserId, body: &str) -> AppResult<()> {
        if !self.config.enabled {
            debug!(recipient, "Push disabled, skipping notification");
            return Ok(());
        }

        let sender_name = match self.users.find_full_name(sender).await? {
            Some(name) => name,
            None => {
                warn!(sender, "Sender not found, dropping push notification");
                return Ok(());
            }
        };

        let subscription = match self.subscriptions.find_by_user(recipient).await? {
            Some(sub) => sub,
            None => {
                info!(recipient, "No push subscription found, nothing to deliver");
                return Ok(());
            }
        };

        let payload = ChatNotificationPayload {
            kind: "chat",
            message: format!("{sender_name} sent you a message: \"{body}\""),
            contact_id: sender,
        };

        let request = PushDeliveryRequest {
            subscription: SubscriptionRef {
                endpoint: &subscription.endpoint,
                keys: &subscription.keys,
            },
            payload: serde_json::to_string(&payload)?,
            ttl: self.config.ttl_seconds,
        };

        let response = self
            .client
            .post(&self.config.service_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    tautan_core::error::ErrorKind::ExternalService,
                    format!("Push delivery request failed: {e}"),
                    e,
                )
            })?;

        // 404/410 means the subscription expired at the push service.
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            info!(recipient, "Subscription expired, removing it");
            self.subscriptions.delete(&subscription.endpoint).await?;
            return Ok(());
        }

        response.error_for_status().map_err(|e| {
            AppError::with_source(
                tautan_core::error::ErrorKind::ExternalService,
                format!("Push service rejected notification: {e}"),
                e,
            )
        })?;

        info!(recipient, sender, "Push notification dispatched");
        Ok(())
    }
}
