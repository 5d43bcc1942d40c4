use thiserror::Error;

/// Failures while fetching or decoding the relay list.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Invalid registry URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Registry returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to decode relay list: {0}")]
    Decode(#[from] serde_json::Error),
}
