//! Builds the shared pieces used by both the scheduler and the command handlers.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use handlers::{LoggingHandler, SubscriptionHandler};
use registry_client::{HttpRegistryClient, RelaySource};
use relayup_core::Bot;
use relayup_telegram::TelegramBotAdapter;
use std::sync::Arc;
use storage::{FingerprintStore, SubscriberStore};
use tracing::{info, instrument};

use crate::config::{BotConfig, DEFAULT_BOT_USERNAME};
use crate::notifier::Notifier;
use crate::watcher::RelayWatcher;

/// Everything the runner needs: Telegram handles, state stores and the poll pipeline.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub bot_username: String,
    pub fingerprints: Arc<FingerprintStore>,
    pub subscribers: Arc<SubscriberStore>,
    pub watcher: Arc<RelayWatcher>,
}

/// Opens the state files, creates the registry client and Telegram adapter, and resolves the
/// bot's username (config, then getMe, then the default).
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = config.telegram().build_bot();
    let adapter = TelegramBotAdapter::new(teloxide_bot.clone());

    let bot_username = match config.bot_username.clone() {
        Some(name) => name,
        None => adapter
            .username()
            .await
            .unwrap_or_else(|| DEFAULT_BOT_USERNAME.to_string()),
    };
    info!(username = %bot_username, "Bot username resolved");

    let bot: Arc<dyn Bot> = Arc::new(adapter);
    let source: Arc<dyn RelaySource> = Arc::new(
        HttpRegistryClient::new(&config.api_url).context("Failed to create registry client")?,
    );

    build_with(config, teloxide_bot, bot, bot_username, source).await
}

/// Same as [`build_bot_components`] with the transport and relay source supplied by the caller.
pub async fn build_with(
    config: &BotConfig,
    teloxide_bot: teloxide::Bot,
    bot: Arc<dyn Bot>,
    bot_username: String,
    source: Arc<dyn RelaySource>,
) -> Result<BotComponents> {
    let fingerprints = Arc::new(FingerprintStore::open(&config.fingerprints_file).await);
    let subscribers = Arc::new(SubscriberStore::open(&config.chat_ids_file).await);

    let watcher = Arc::new(RelayWatcher::new(
        source,
        fingerprints.clone(),
        subscribers.clone(),
        Notifier::new(bot.clone()),
        config.detection_policy(),
    ));

    Ok(BotComponents {
        teloxide_bot,
        bot,
        bot_username,
        fingerprints,
        subscribers,
        watcher,
    })
}

/// Logging first, then the subscription commands.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(SubscriptionHandler::new(
            components.bot.clone(),
            components.subscribers.clone(),
            components.bot_username.clone(),
        )))
}
