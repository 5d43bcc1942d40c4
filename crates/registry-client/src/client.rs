//! HTTP client for the relay registry.

use crate::error::RegistryError;
use crate::types::{Relay, RelayList};
use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error, info};

/// Source of the current relay list. `None` signals "no update this cycle".
#[async_trait]
pub trait RelaySource: Send + Sync {
    async fn fetch(&self) -> Option<Vec<Relay>>;
}

/// Registry client issuing one GET per fetch against a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpRegistryClient {
    client: Client,
    url: Url,
}

impl HttpRegistryClient {
    /// Creates a client for `url` with reqwest's default settings.
    pub fn new(url: &str) -> Result<Self, RegistryError> {
        Self::with_client(Client::new(), url)
    }

    /// Creates a client reusing an existing reqwest [`Client`].
    pub fn with_client(client: Client, url: &str) -> Result<Self, RegistryError> {
        let url = Url::parse(url).map_err(|e| RegistryError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// GETs the registry URL and decodes the relay list.
    pub async fn fetch_relays(&self) -> Result<RelayList, RegistryError> {
        debug!(url = %self.url, "Fetching relay list");

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let list: RelayList = serde_json::from_str(&body)?;
        info!(count = list.relays.len(), "Fetched relay list");
        Ok(list)
    }
}

#[async_trait]
impl RelaySource for HttpRegistryClient {
    async fn fetch(&self) -> Option<Vec<Relay>> {
        match self.fetch_relays().await {
            Ok(list) => Some(list.relays),
            Err(e) => {
                error!(url = %self.url, error = %e, "Error fetching relay list");
                None
            }
        }
    }
}
