//! # relayup-core
//!
//! Core types and traits for the relay notifier bot: [`Bot`], [`Handler`], message, chat and user
//! types, and tracing initialization. Transport-agnostic; used by relayup-telegram, handler-chain
//! and handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{Chat, ChatKind, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
