//! Mock implementation of [`relayup_core::Bot`] for integration tests.
//!
//! Records every sent message so tests can assert on the broadcast without hitting Telegram.
//! Chats listed in `failing` reject messages the way Telegram does when the bot was removed.

use async_trait::async_trait;
use relayup_core::{Bot, RelayError, Result, User};
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockBot {
    failing: HashSet<i64>,
    sent: Mutex<Vec<(i64, String)>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(chats: &[i64]) -> Self {
        Self {
            failing: chats.iter().copied().collect(),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_to(&self, chat_id: i64) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(id, _)| *id == chat_id)
            .map(|(_, text)| text)
            .collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        if self.failing.contains(&chat_id) {
            return Err(RelayError::Bot(
                "Forbidden: bot was kicked from the group chat".to_string(),
            ));
        }
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }

    async fn send_html(&self, chat_id: i64, text: &str) -> Result<()> {
        self.send_message(chat_id, text).await
    }

    async fn get_chat_administrators(&self, _chat_id: i64) -> Result<Vec<User>> {
        Ok(Vec::new())
    }
}
