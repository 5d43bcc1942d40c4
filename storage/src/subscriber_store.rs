//! Chat ids subscribed to relay announcements, persisted as `[chatId, ...]`.
//!
//! Each id appears at most once. Mutations hold the lock across the file write and only update
//! memory once the write succeeded.

use crate::error::StorageError;
use crate::json_document::JsonDocument;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::info;

pub struct SubscriberStore {
    document: JsonDocument<Vec<i64>>,
    chats: Mutex<Vec<i64>>,
}

impl SubscriberStore {
    /// Loads the subscriber file (empty when absent or malformed). Duplicate ids are collapsed.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let document = JsonDocument::new(path);
        let loaded: Vec<i64> = document.load_or_default().await;
        let mut chats = Vec::with_capacity(loaded.len());
        for id in loaded {
            if !chats.contains(&id) {
                chats.push(id);
            }
        }
        info!(
            path = %document.path().display(),
            count = chats.len(),
            "Loaded subscribed chats"
        );
        Self {
            document,
            chats: Mutex::new(chats),
        }
    }

    pub async fn list(&self) -> Vec<i64> {
        self.chats.lock().await.clone()
    }

    pub async fn contains(&self, chat_id: i64) -> bool {
        self.chats.lock().await.contains(&chat_id)
    }

    /// Subscribes `chat_id`. Returns `false` (and writes nothing) if it was already subscribed.
    pub async fn add(&self, chat_id: i64) -> Result<bool, StorageError> {
        let mut chats = self.chats.lock().await;
        if chats.contains(&chat_id) {
            return Ok(false);
        }

        let mut next = chats.clone();
        next.push(chat_id);
        self.document.save(&next).await?;
        *chats = next;

        info!(chat_id = chat_id, total = chats.len(), "Chat subscribed");
        Ok(true)
    }

    /// Unsubscribes `chat_id`. Returns `false` (and writes nothing) if it was not subscribed.
    pub async fn remove(&self, chat_id: i64) -> Result<bool, StorageError> {
        let mut chats = self.chats.lock().await;
        if !chats.contains(&chat_id) {
            return Ok(false);
        }

        let next: Vec<i64> = chats.iter().copied().filter(|id| *id != chat_id).collect();
        self.document.save(&next).await?;
        *chats = next;

        info!(chat_id = chat_id, total = chats.len(), "Chat unsubscribed");
        Ok(true)
    }
}
