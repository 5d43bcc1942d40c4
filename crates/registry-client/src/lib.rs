//! # Relay registry client
//!
//! Fetches the list of registered relays from the registry HTTP API.
//!
//! ## Example
//!
//! ```rust,no_run
//! use registry_client::{HttpRegistryClient, RelaySource};
//!
//! async fn example() {
//!     let client = HttpRegistryClient::new("https://api.example.org/relays").unwrap();
//!     // `None` means "no update this cycle"; the error has already been logged.
//!     if let Some(relays) = client.fetch().await {
//!         println!("{} relays registered", relays.len());
//!     }
//! }
//! ```
//!
//! The expected body is `{ "relays": [ { "fingerprint", "nickname", "first_seen" }, ... ] }`;
//! other fields are ignored.

mod client;
mod error;
mod types;

pub use client::{HttpRegistryClient, RelaySource};
pub use error::RegistryError;
pub use types::{Relay, RelayList};
