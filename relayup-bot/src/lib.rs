//! # Relay-Up bot application
//!
//! Polls the relay registry, announces newly registered relays to subscribed Telegram chats, and
//! serves the `/start` / `/stop` subscription commands. Wires storage, registry-client, handlers,
//! handler-chain and relayup-telegram; loads config from env and runs scheduler + REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod detector;
pub mod notifier;
pub mod runner;
pub mod scheduler;
pub mod watcher;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, BotComponents};
pub use config::BotConfig;
pub use detector::{compute_new_relays, Detection, DetectionPolicy};
pub use notifier::{format_announcement, shorten_fingerprint, BroadcastReport, DeliveryFailure, Notifier};
pub use runner::{run_bot, run_once};
pub use scheduler::Scheduler;
pub use watcher::{RelayWatcher, TickOutcome};
