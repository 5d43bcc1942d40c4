//! Bot configuration loaded from env: Telegram connectivity, registry URL, polling, state files, logging.

mod bot_config;


pub use bot_config::{
    BotConfig, DEFAULT_BOT_USERNAME, DEFAULT_CHAT_IDS_FILE, DEFAULT_FINGERPRINTS_FILE,
    DEFAULT_LOG_FILE, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_RECENCY_WINDOW_DAYS,
    DEFAULT_SENTINEL_NICKNAME, MAX_RECENCY_WINDOW_DAYS,
};
