//! BotConfig: everything the bot needs, read from environment variables.

use anyhow::{Context, Result};
use relayup_telegram::TelegramConfig;
use std::env;
use std::time::Duration;

use crate::detector::DetectionPolicy;

pub const DEFAULT_BOT_USERNAME: &str = "RelayUpBot";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_FINGERPRINTS_FILE: &str = "./data/fingerprints.json";
pub const DEFAULT_CHAT_IDS_FILE: &str = "./data/chatIds.json";
pub const DEFAULT_SENTINEL_NICKNAME: &str = "MyRelayNickname";
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 7;
pub const MAX_RECENCY_WINDOW_DAYS: i64 = 36_500;
pub const DEFAULT_LOG_FILE: &str = "logs/relayup-bot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// BOT_USERNAME; when unset the name is taken from getMe, then [`DEFAULT_BOT_USERNAME`]
    pub bot_username: Option<String>,
    /// API_URL: relay registry endpoint
    pub api_url: String,
    /// POLL_INTERVAL_SECS
    pub poll_interval_secs: u64,
    /// FINGERPRINTS_FILE
    pub fingerprints_file: String,
    /// CHAT_IDS_FILE
    pub chat_ids_file: String,
    /// SENTINEL_NICKNAME; an empty value disables the exclusion
    pub sentinel_nickname: Option<String>,
    /// RECENCY_WINDOW_DAYS
    pub recency_window_days: i64,
    /// LOG_FILE
    pub log_file: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{} is not valid ({}): {}", key, raw, e)),
        Err(_) => Ok(default),
    }
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let api_url = env::var("API_URL").context("API_URL not set")?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let bot_username = env::var("BOT_USERNAME")
            .ok()
            .map(|s| s.trim().trim_start_matches('@').to_string())
            .filter(|s| !s.is_empty());
        let sentinel_nickname = match env::var("SENTINEL_NICKNAME") {
            Ok(s) if s.is_empty() => None,
            Ok(s) => Some(s),
            Err(_) => Some(DEFAULT_SENTINEL_NICKNAME.to_string()),
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            bot_username,
            api_url,
            poll_interval_secs: env_parse("POLL_INTERVAL_SECS", DEFAULT_POLL_INTERVAL_SECS)?,
            fingerprints_file: env_or("FINGERPRINTS_FILE", DEFAULT_FINGERPRINTS_FILE),
            chat_ids_file: env_or("CHAT_IDS_FILE", DEFAULT_CHAT_IDS_FILE),
            sentinel_nickname,
            recency_window_days: env_parse("RECENCY_WINDOW_DAYS", DEFAULT_RECENCY_WINDOW_DAYS)?,
            log_file: env_or("LOG_FILE", DEFAULT_LOG_FILE),
        })
    }

    /// Validate config: URLs must parse, intervals must be positive.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("API_URL is not a valid URL: {}", self.api_url);
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.poll_interval_secs == 0 {
            anyhow::bail!("POLL_INTERVAL_SECS must be greater than zero");
        }
        if !(1..=MAX_RECENCY_WINDOW_DAYS).contains(&self.recency_window_days) {
            anyhow::bail!(
                "RECENCY_WINDOW_DAYS must be between 1 and {}, got {}",
                MAX_RECENCY_WINDOW_DAYS,
                self.recency_window_days
            );
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn detection_policy(&self) -> DetectionPolicy {
        DetectionPolicy {
            window: chrono::Duration::try_days(self.recency_window_days)
                .unwrap_or(chrono::Duration::MAX),
            sentinel_nickname: self.sentinel_nickname.clone(),
        }
    }

    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig {
            bot_token: self.bot_token.clone(),
            telegram_api_url: self.telegram_api_url.clone(),
        }
    }
}
