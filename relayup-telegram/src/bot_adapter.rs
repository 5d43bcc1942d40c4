//! Wraps teloxide::Bot and implements [`relayup_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use crate::adapters::TelegramUserWrapper;
use async_trait::async_trait;
use relayup_core::{Bot as CoreBot, RelayError, Result, ToCoreUser, User};
use teloxide::{prelude::*, types::ChatId, types::ParseMode};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// The bot's own username via getMe; `None` if the call fails or the bot has none.
    pub async fn username(&self) -> Option<String> {
        match self.bot.get_me().await {
            Ok(me) => me.user.username.clone(),
            Err(e) => {
                tracing::warn!(error = %e, "getMe failed");
                None
            }
        }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_html(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn get_chat_administrators(&self, chat_id: i64) -> Result<Vec<User>> {
        let members = self
            .bot
            .get_chat_administrators(ChatId(chat_id))
            .await
            .map_err(|e| RelayError::Bot(e.to_string()))?;
        Ok(members
            .iter()
            .map(|member| TelegramUserWrapper(&member.user).to_core())
            .collect())
    }
}
