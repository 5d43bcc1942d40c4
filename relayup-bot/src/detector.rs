//! Detection of relays that have not been announced yet.
//!
//! Detection is pure: it never touches the known set. The caller persists the result through
//! `FingerprintStore::commit` and only then treats the relays as seen.

use chrono::{DateTime, Duration, Utc};
use registry_client::Relay;
use std::collections::HashSet;
use storage::SeenFingerprints;

/// Which relays count: registered inside `window`, nickname not equal to the sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionPolicy {
    pub window: Duration,
    /// Placeholder nickname left in relay configs that were never customised.
    pub sentinel_nickname: Option<String>,
}

impl Default for DetectionPolicy {
    fn default() -> Self {
        Self {
            window: Duration::days(crate::config::DEFAULT_RECENCY_WINDOW_DAYS),
            sentinel_nickname: Some(crate::config::DEFAULT_SENTINEL_NICKNAME.to_string()),
        }
    }
}

impl DetectionPolicy {
    /// True if the relay was first seen inside the window ending at `now` and is not the sentinel.
    pub fn qualifies(&self, relay: &Relay, now: DateTime<Utc>) -> bool {
        if self.sentinel_nickname.as_deref() == Some(relay.nickname.as_str()) {
            return false;
        }
        let Some(first_seen) = relay.first_seen_at() else {
            return false;
        };
        match now.checked_sub_signed(self.window) {
            Some(start) => first_seen >= start,
            // Window reaches past the earliest representable time.
            None => true,
        }
    }
}

/// Result of one detection pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    /// Qualifying relays with an unknown fingerprint, in fetched order.
    pub new_relays: Vec<Relay>,
    /// Every qualifying relay, new or already known.
    pub total_in_window: usize,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.new_relays.is_empty()
    }

    pub fn fingerprints(&self) -> impl Iterator<Item = &str> {
        self.new_relays.iter().map(|r| r.fingerprint.as_str())
    }
}

/// Compares `fetched` against `known`. A fingerprint repeated within `fetched` is new at most once.
pub fn compute_new_relays(
    fetched: &[Relay],
    known: &SeenFingerprints,
    policy: &DetectionPolicy,
    now: DateTime<Utc>,
) -> Detection {
    let mut detection = Detection::default();
    let mut picked: HashSet<&str> = HashSet::new();

    for relay in fetched.iter().filter(|r| policy.qualifies(r, now)) {
        detection.total_in_window += 1;

        let already_known = known.get(&relay.fingerprint).copied().unwrap_or(false);
        if !already_known && picked.insert(relay.fingerprint.as_str()) {
            tracing::info!(nickname = %relay.nickname, fingerprint = %relay.fingerprint, "New relay detected");
            detection.new_relays.push(relay.clone());
        }
    }

    detection
}
