//! Bot abstraction for sending messages and querying chat administrators.
//!
//! [`Bot`] is transport-agnostic; `relayup_telegram::TelegramBotAdapter` implements it via teloxide.
//! Tests substitute a recording implementation.

use crate::error::Result;
use crate::types::User;
use async_trait::async_trait;

/// Outbound messaging operations used by the notifier and the command handlers.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()>;
    /// Sends a message rendered with HTML markup.
    async fn send_html(&self, chat_id: i64, text: &str) -> Result<()>;
    /// Lists the administrators of a group chat.
    async fn get_chat_administrators(&self, chat_id: i64) -> Result<Vec<User>>;
}
