use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::chat::responder::GREETING;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only conversation. Messages are never edited or removed.
/// At most one exchange is in flight: a user message sets `awaiting_reply`
/// and the next AI message clears it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatLog {
    pub id: Uuid,
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl ChatLog {
    /// New log seeded with the assistant greeting.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: vec![ChatMessage::new(GREETING, Sender::Ai)],
            awaiting_reply: false,
        }
    }

    /// Appends `message`. A user message is refused while a reply is pending.
    pub fn push(&mut self, message: ChatMessage) -> Result<(), AppError> {
        match message.sender {
            Sender::User if self.awaiting_reply => {
                return Err(AppError::Conflict(format!(
                    "Chat session {} is still waiting for a reply",
                    self.id
                )))
            }
            Sender::User => self.awaiting_reply = true,
            Sender::Ai => self.awaiting_reply = false,
        }
        self.messages.push(message);
        Ok(())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory chat logs keyed by session id. Lost on restart.
#[derive(Clone, Default)]
pub struct ChatStore {
    logs: Arc<RwLock<HashMap<Uuid, ChatLog>>>,
}

impl ChatStore {
    pub async fn create(&self) -> ChatLog {
        let log = ChatLog::new();
        self.logs.write().await.insert(log.id, log.clone());
        log
    }

    pub async fn get(&self, id: Uuid) -> Result<ChatLog, AppError> {
        self.logs
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Check-and-append under one write lock, so two senders cannot both
    /// open an exchange.
    pub async fn append(&self, id: Uuid, message: ChatMessage) -> Result<(), AppError> {
        let mut logs = self.logs.write().await;
        let log = logs.get_mut(&id).ok_or_else(|| not_found(id))?;
        log.push(message)
    }

    /// Reopens the session after a failed reply. Missing sessions are ignored.
    pub async fn cancel_pending(&self, id: Uuid) {
        if let Some(log) = self.logs.write().await.get_mut(&id) {
            log.awaiting_reply = false;
        }
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.logs
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Chat session {id} not found"))
}
