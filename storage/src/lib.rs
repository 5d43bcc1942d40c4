//! Storage crate: flat JSON documents used as the bot's persistent state.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`json_document`] – JsonDocument (load-or-default / overwrite a whole JSON file)
//! - [`fingerprint_store`] – FingerprintStore (relay fingerprints already announced)
//! - [`subscriber_store`] – SubscriberStore (chat ids subscribed to announcements)

mod error;
mod fingerprint_store;
mod json_document;
mod subscriber_store;


pub use error::StorageError;
pub use fingerprint_store::{FingerprintStore, SeenFingerprints};
pub use json_document::JsonDocument;
pub use subscriber_store::SubscriberStore;
