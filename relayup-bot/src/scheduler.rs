//! Fixed-interval driver for [`RelayWatcher`].
//!
//! The first cycle runs immediately, then one per period forever. Each cycle is spawned, so a slow
//! cycle does not delay the next trigger and cycles may overlap.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::watcher::RelayWatcher;

pub struct Scheduler {
    watcher: Arc<RelayWatcher>,
    period: Duration,
}

impl Scheduler {
    pub fn new(watcher: Arc<RelayWatcher>, period: Duration) -> Self {
        Self { watcher, period }
    }

    /// Runs until the process is terminated.
    pub async fn run(self) {
        info!(period_secs = self.period.as_secs(), "Scheduler started");
        self.spawn_cycle();

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            self.spawn_cycle();
        }
    }

    /// Starts [`Scheduler::run`] in the background.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    fn spawn_cycle(&self) {
        let watcher = self.watcher.clone();
        tokio::spawn(async move {
            let outcome = watcher.tick().await;
            debug!(outcome = ?outcome, "Cycle finished");
        });
    }
}
