//! Fingerprints of relays that have already been announced.
//!
//! Persisted as `{ "<fingerprint>": true, ... }`. The set only grows. [`FingerprintStore::commit`]
//! writes the file first and only then marks the fingerprints as seen in memory, so a failed write
//! leaves the relays eligible for the next poll.

use crate::error::StorageError;
use crate::json_document::JsonDocument;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::info;

/// Fingerprint → "has been announced" marker.
pub type SeenFingerprints = BTreeMap<String, bool>;

pub struct FingerprintStore {
    document: JsonDocument<SeenFingerprints>,
    seen: Mutex<SeenFingerprints>,
}

impl FingerprintStore {
    /// Loads the fingerprint file (empty when absent or malformed).
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let document = JsonDocument::new(path);
        let seen: SeenFingerprints = document.load_or_default().await;
        info!(
            path = %document.path().display(),
            count = seen.len(),
            "Loaded known fingerprints"
        );
        Self {
            document,
            seen: Mutex::new(seen),
        }
    }

    /// Copy of the current set, for detection without holding the lock.
    pub async fn snapshot(&self) -> SeenFingerprints {
        self.seen.lock().await.clone()
    }

    pub async fn is_known(&self, fingerprint: &str) -> bool {
        self.seen.lock().await.get(fingerprint).copied().unwrap_or(false)
    }

    /// Number of fingerprints ever recorded.
    pub async fn len(&self) -> usize {
        self.seen.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Persists the current set plus `fingerprints`, then marks them seen. Returns the new total.
    pub async fn commit<I, S>(&self, fingerprints: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = self.seen.lock().await;
        let mut next = seen.clone();
        for fp in fingerprints {
            next.insert(fp.into(), true);
        }

        self.document.save(&next).await?;

        let added = next.len() - seen.len();
        *seen = next;
        info!(added = added, total = seen.len(), "Fingerprints committed");
        Ok(seen.len())
    }
}
