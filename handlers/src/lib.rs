//! # Handlers for the relay notifier bot
//!
//! Handler implementations run by the handler chain: message logging and the
//! `/start` / `/stop` subscription commands.

mod command;
mod logging;
mod subscription;

#[cfg(test)]
mod test;

pub use command::SubscriptionCommand;
pub use logging::LoggingHandler;
pub use subscription::{replies, SubscriptionHandler, WELCOME_MESSAGE};
