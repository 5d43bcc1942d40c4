//! A poll cycle wired to the real HTTP registry client, served by mockito.

mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use common::mock_bot::MockBot;
use registry_client::HttpRegistryClient;
use relayup_bot::{DetectionPolicy, Notifier, RelayWatcher, TickOutcome};
use storage::{FingerprintStore, SubscriberStore};
use tempfile::TempDir;

/// **Test: Registry response flows through detection and broadcast.**
///
/// **Setup:** Registry lists a fresh relay, a sentinel relay, an old relay and one with null fields.
/// **Action:** One cycle at a fixed time.
/// **Expected:** Only the fresh relay is announced; its fingerprint is persisted.
#[tokio::test]
async fn test_cycle_against_http_registry() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/relays")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"relays":[
                {"fingerprint":"AAA111","nickname":"R1","first_seen":"2024-06-15 10:00:00"},
                {"fingerprint":"BBB222","nickname":"MyRelayNickname","first_seen":"2024-06-15 10:00:00"},
                {"fingerprint":"OLD000","nickname":"old","first_seen":"2024-01-01 00:00:00"},
                {"fingerprint":"NUL000","nickname":null,"first_seen":null}
            ]}"#,
        )
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let fingerprints = Arc::new(FingerprintStore::open(dir.path().join("fingerprints.json")).await);
    let subscribers = Arc::new(SubscriberStore::open(dir.path().join("chatIds.json")).await);
    subscribers.add(-100).await.unwrap();

    let client = HttpRegistryClient::new(&format!("{}/relays", server.url())).unwrap();
    let watcher = RelayWatcher::new(
        Arc::new(client),
        fingerprints.clone(),
        subscribers,
        Notifier::new(bot.clone()),
        DetectionPolicy::default(),
    );

    let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let outcome = watcher.tick_at(now).await;

    mock.assert_async().await;
    match outcome {
        TickOutcome::Announced {
            detection, report, ..
        } => {
            assert_eq!(detection.total_in_window, 1);
            assert_eq!(detection.fingerprints().collect::<Vec<_>>(), vec!["AAA111"]);
            assert_eq!(report.delivered, vec![-100]);
        }
        other => panic!("expected announcement, got {:?}", other),
    }
    assert!(fingerprints.is_known("AAA111").await);
    assert!(!fingerprints.is_known("NUL000").await);
    assert_eq!(bot.sent_to(-100).len(), 1);
}

/// **Test: A registry error leaves state untouched.**
#[tokio::test]
async fn test_cycle_with_registry_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/relays")
        .with_status(502)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let bot = Arc::new(MockBot::new());
    let fingerprints = Arc::new(FingerprintStore::open(dir.path().join("fingerprints.json")).await);
    let subscribers = Arc::new(SubscriberStore::open(dir.path().join("chatIds.json")).await);
    subscribers.add(-100).await.unwrap();

    let client = HttpRegistryClient::new(&format!("{}/relays", server.url())).unwrap();
    let watcher = RelayWatcher::new(
        Arc::new(client),
        fingerprints.clone(),
        subscribers,
        Notifier::new(bot.clone()),
        DetectionPolicy::default(),
    );

    assert_eq!(watcher.tick().await, TickOutcome::FetchFailed);
    assert!(fingerprints.is_empty().await);
    assert!(bot.sent().is_empty());
    assert!(!dir.path().join("fingerprints.json").exists());
}
