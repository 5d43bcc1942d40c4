//! `/start` and `/stop` handling: admin-gated subscribe / unsubscribe of group chats.
//!
//! In a private chat both commands answer with [`WELCOME_MESSAGE`] and change nothing.
//! In groups the sender must be a chat administrator. If the administrator lookup fails the
//! command is dropped without a reply.

use crate::command::SubscriptionCommand;
use async_trait::async_trait;
use relayup_core::{Bot, Handler, HandlerResponse, Message, RelayError, Result};
use std::sync::Arc;
use storage::{StorageError, SubscriberStore};
use tracing::{error, info, instrument, warn};

pub const WELCOME_MESSAGE: &str = r#"
🤖 Welcome to the Anyone Relay-Up Bot!
I am a Telegram bot that automatically pings your group chat whenever a new Anyone relay is registered from our network.

Add me to a group chat and enter <code>/start</code> to begin! Want to set up a relay yourself? Follow our guide on educ.ator.io

You can also check out the general locations of the relays on our official map: https://relaymap.ator.io/

<a href="https://x.com/AnyoneFDN"><u>Twitter</u></a> | <a href="https://t.me/anyoneprotocol"><u>Telegram</u></a>
"#;

/// Texts sent back to group chats.
pub mod replies {
    pub const STARTED: &str =
        "Anyone Relay-Up Bot started successfully and will notify this chat of new updates!";
    pub const ALREADY_ACTIVE: &str = "Bot is already active in this chat.";
    pub const START_NOT_ADMIN: &str = "Only an admin can start the bot in this chat.";
    pub const STOPPED: &str =
        "Anyone Relay-Up Bot stopped successfully and will no longer notify this chat of updates.";
    pub const ALREADY_INACTIVE: &str = "Bot is already inactive in this chat.";
    pub const STOP_NOT_ADMIN: &str = "Only an admin can stop the bot in this chat.";
}

pub struct SubscriptionHandler {
    bot: Arc<dyn Bot>,
    subscribers: Arc<SubscriberStore>,
    bot_username: String,
}

impl SubscriptionHandler {
    pub fn new(bot: Arc<dyn Bot>, subscribers: Arc<SubscriberStore>, bot_username: String) -> Self {
        Self {
            bot,
            subscribers,
            bot_username,
        }
    }

    async fn welcome(&self, message: &Message) -> HandlerResponse {
        if let Err(e) = self.bot.send_html(message.chat.id, WELCOME_MESSAGE).await {
            error!(chat_id = message.chat.id, error = %e, "Failed to send welcome message");
        }
        HandlerResponse::Reply(WELCOME_MESSAGE.to_string())
    }

    async fn is_admin(&self, message: &Message) -> Result<bool> {
        let admins = self.bot.get_chat_administrators(message.chat.id).await?;
        Ok(admins.iter().any(|admin| admin.id == message.user.id))
    }

    /// Applies the command for an admin and returns the confirmation text.
    async fn apply(&self, command: SubscriptionCommand, chat_id: i64) -> Result<&'static str> {
        let reply = match command {
            SubscriptionCommand::Start => {
                if self.subscribers.add(chat_id).await.map_err(storage_error)? {
                    replies::STARTED
                } else {
                    replies::ALREADY_ACTIVE
                }
            }
            SubscriptionCommand::Stop => {
                if self.subscribers.remove(chat_id).await.map_err(storage_error)? {
                    replies::STOPPED
                } else {
                    replies::ALREADY_INACTIVE
                }
            }
        };
        Ok(reply)
    }

    /// Admin check, then state change. Errors mean the command is dropped without a reply.
    async fn group_reply(&self, command: SubscriptionCommand, message: &Message) -> Result<&'static str> {
        if self.is_admin(message).await? {
            return self.apply(command, message.chat.id).await;
        }

        warn!(chat_id = message.chat.id, user_id = message.user.id, command = command.name(), "Non-admin subscription command");
        Ok(match command {
            SubscriptionCommand::Start => replies::START_NOT_ADMIN,
            SubscriptionCommand::Stop => replies::STOP_NOT_ADMIN,
        })
    }
}

fn storage_error(e: StorageError) -> RelayError {
    RelayError::Storage(e.to_string())
}

#[async_trait]
impl Handler for SubscriptionHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = SubscriptionCommand::parse(&message.content, &self.bot_username) else {
            return Ok(HandlerResponse::Continue);
        };

        if message.chat.is_private() {
            return Ok(self.welcome(message).await);
        }

        let chat_id = message.chat.id;
        let reply = match self.group_reply(command, message).await {
            Ok(reply) => reply,
            Err(RelayError::Storage(e)) => {
                error!(chat_id = chat_id, command = command.name(), error = %e, "Failed to persist subscribers");
                return Ok(HandlerResponse::Stop);
            }
            Err(e) => {
                error!(chat_id = chat_id, error = %e, "Error checking admin status");
                return Ok(HandlerResponse::Stop);
            }
        };

        info!(chat_id = chat_id, command = command.name(), reply = reply, "Subscription command handled");
        if let Err(e) = self.bot.send_message(chat_id, reply).await {
            error!(chat_id = chat_id, error = %e, "Failed to send command reply");
        }
        Ok(HandlerResponse::Reply(reply.to_string()))
    }
}
