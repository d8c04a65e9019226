//! Shared mock collaborators for engine and router tests.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use tautan_core::error::AppError;
use tautan_core::result::AppResult;
use tautan_core::types::UserId;
use tautan_entity::chat::{ChatMessage, ContactSummary};
use tautan_entity::gateway::{ChatStore, PushDispatch};

/// Chronological log of gateway calls, shared between mocks so tests can
/// assert ordering (e.g. persist happens before push).
pub type EventLog = Arc<Mutex<Vec<&'static str>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// In-memory `ChatStore` recording every call.
pub struct MockStore {
    pub messages: Mutex<Vec<ChatMessage>>,
    pub contacts: Mutex<Vec<ContactSummary>>,
    pub read_marks: Mutex<Vec<(UserId, UserId)>>,
    pub fail_persist: AtomicBool,
    next_id: AtomicI64,
    events: EventLog,
}

impl MockStore {
    pub fn new(events: EventLog) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            contacts: Mutex::new(Vec::new()),
            read_marks: Mutex::new(Vec::new()),
            fail_persist: AtomicBool::new(false),
            next_id: AtomicI64::new(1),
            events,
        }
    }
}

#[async_trait]
impl ChatStore for MockStore {
    async fn persist_message(
        &self,
        from: UserId,
        to: UserId,
        body: &str,
    ) -> AppResult<ChatMessage> {
        if self.fail_persist.load(Ordering::SeqCst) {
            self.events.lock().unwrap().push("persist_failed");
            return Err(AppError::database("insert failed"));
        }

        let record = ChatMessage {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            from_id: from,
            to_id: to,
            message: body.to_string(),
            timestamp: Utc::now(),
        };
        self.messages.lock().unwrap().push(record.clone());
        self.events.lock().unwrap().push("persist");
        Ok(record)
    }

    async fn fetch_history(&self, a: UserId, b: UserId) -> AppResult<Vec<ChatMessage>> {
        self.events.lock().unwrap().push("history");
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| {
                (m.from_id == a && m.to_id == b) || (m.from_id == b && m.to_id == a)
            })
            .cloned()
            .collect())
    }

    async fn fetch_contacts(&self, _user: UserId) -> AppResult<Vec<ContactSummary>> {
        self.events.lock().unwrap().push("contacts");
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn mark_thread_read(&self, user: UserId, peer: UserId) -> AppResult<()> {
        self.read_marks.lock().unwrap().push((user, peer));
        Ok(())
    }
}

/// `PushDispatch` mock recording every call.
pub struct MockPush {
    pub calls: Mutex<Vec<(UserId, UserId, String)>>,
    pub fail: AtomicBool,
    events: EventLog,
}

impl MockPush {
    pub fn new(events: EventLog) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
            events,
        }
    }
}

#[async_trait]
impl PushDispatch for MockPush {
    async fn push_notify(&self, recipient: UserId, sender: UserId, body: &str) -> AppResult<()> {
        self.events.lock().unwrap().push("push");
        self.calls
            .lock()
            .unwrap()
            .push((recipient, sender, body.to_string()));
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::external_service("push service unreachable"));
        }
        Ok(())
    }
}
