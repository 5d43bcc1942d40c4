//! In-memory relay sources.

use async_trait::async_trait;
use registry_client::{Relay, RelaySource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns whatever relay list is currently set (`None` simulates a failed fetch) and counts calls.
#[derive(Default)]
pub struct StaticSource {
    relays: Mutex<Option<Vec<Relay>>>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(relays: Vec<Relay>) -> Self {
        Self {
            relays: Mutex::new(Some(relays)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn set(&self, relays: Option<Vec<Relay>>) {
        *self.relays.lock().unwrap() = relays;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RelaySource for StaticSource {
    async fn fetch(&self) -> Option<Vec<Relay>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.relays.lock().unwrap().clone()
    }
}
