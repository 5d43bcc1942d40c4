//! One poll cycle: fetch → detect → persist → mark seen → announce.

use chrono::{DateTime, Utc};
use registry_client::RelaySource;
use std::sync::Arc;
use storage::{FingerprintStore, SubscriberStore};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

use crate::detector::{compute_new_relays, Detection, DetectionPolicy};
use crate::notifier::{BroadcastReport, Notifier};

/// What a single cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Registry unreachable or undecodable; nothing changed.
    FetchFailed,
    NoNewRelays { total_in_window: usize },
    /// New relays were found but could not be recorded; they stay eligible for the next cycle.
    PersistFailed { new_relays: usize },
    Announced {
        detection: Detection,
        total_all_time: usize,
        report: BroadcastReport,
    },
}

pub struct RelayWatcher {
    source: Arc<dyn RelaySource>,
    fingerprints: Arc<FingerprintStore>,
    subscribers: Arc<SubscriberStore>,
    notifier: Notifier,
    policy: DetectionPolicy,
    /// Serialises detect+commit so overlapping cycles cannot announce the same relay twice.
    commit_lock: Mutex<()>,
}

impl RelayWatcher {
    pub fn new(
        source: Arc<dyn RelaySource>,
        fingerprints: Arc<FingerprintStore>,
        subscribers: Arc<SubscriberStore>,
        notifier: Notifier,
        policy: DetectionPolicy,
    ) -> Self {
        Self {
            source,
            fingerprints,
            subscribers,
            notifier,
            policy,
            commit_lock: Mutex::new(()),
        }
    }

    pub async fn tick(&self) -> TickOutcome {
        self.tick_at(Utc::now()).await
    }

    /// Runs one cycle with `now` as the end of the recency window.
    #[instrument(skip(self))]
    pub async fn tick_at(&self, now: DateTime<Utc>) -> TickOutcome {
        let Some(relays) = self.source.fetch().await else {
            return TickOutcome::FetchFailed;
        };

        let (detection, total_all_time) = {
            let _guard = self.commit_lock.lock().await;
            let known = self.fingerprints.snapshot().await;
            let detection = compute_new_relays(&relays, &known, &self.policy, now);

            if detection.is_empty() {
                info!(
                    fetched = relays.len(),
                    total_in_window = detection.total_in_window,
                    "No new fingerprints detected"
                );
                return TickOutcome::NoNewRelays {
                    total_in_window: detection.total_in_window,
                };
            }

            let committed = self.fingerprints.commit(detection.fingerprints()).await;
            match committed {
                Ok(total) => (detection, total),
                Err(e) => {
                    error!(error = %e, new_relays = detection.new_relays.len(), "Failed to persist fingerprints, skipping announcement");
                    return TickOutcome::PersistFailed {
                        new_relays: detection.new_relays.len(),
                    };
                }
            }
        };

        let subscribers = self.subscribers.list().await;
        let report = self
            .notifier
            .announce(
                &detection.new_relays,
                detection.total_in_window,
                total_all_time,
                &subscribers,
            )
            .await;

        TickOutcome::Announced {
            detection,
            total_all_time,
            report,
        }
    }
}
