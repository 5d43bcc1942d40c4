//! Announcement formatting and fan-out to subscribed chats.

use futures::future::join_all;
use registry_client::Relay;
use relayup_core::Bot;
use std::sync::Arc;
use tracing::{error, info, instrument};

const HEADER: &str = "🌐 New Relays Registered!";

/// `ABCDEFGH` → `ABC...FGH`. Fingerprints shorter than six characters are returned unchanged.
pub fn shorten_fingerprint(fingerprint: &str) -> String {
    let chars: Vec<char> = fingerprint.chars().collect();
    if chars.len() < 6 {
        return fingerprint.to_string();
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 3..].iter().collect();
    format!("{}...{}", head, tail)
}

/// One claim line per relay, in order, followed by the all-time total.
pub fn format_announcement(new_relays: &[Relay], total_all_time: usize) -> String {
    let claims = new_relays
        .iter()
        .map(|relay| {
            format!(
                "{} claims fingerprint {}",
                relay.nickname,
                shorten_fingerprint(&relay.fingerprint)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\nTotal Relays Registered - All Time: {}",
        HEADER, claims, total_all_time
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub chat_id: i64,
    pub error: String,
}

/// Per-chat outcome of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: Vec<i64>,
    pub failed: Vec<DeliveryFailure>,
}

impl BroadcastReport {
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failed.len()
    }

    pub fn all_delivered(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Sends announcements through a [`Bot`].
#[derive(Clone)]
pub struct Notifier {
    bot: Arc<dyn Bot>,
}

impl Notifier {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }

    /// Sends the announcement to every subscriber concurrently. A failing chat never blocks the
    /// others; outcomes are reported in subscriber order.
    #[instrument(skip(self, new_relays, subscribers), fields(new = new_relays.len(), subscribers = subscribers.len()))]
    pub async fn announce(
        &self,
        new_relays: &[Relay],
        total_in_window: usize,
        total_all_time: usize,
        subscribers: &[i64],
    ) -> BroadcastReport {
        let message = format_announcement(new_relays, total_all_time);

        let sends = subscribers.iter().map(|&chat_id| {
            let message = message.as_str();
            async move { (chat_id, self.bot.send_message(chat_id, message).await) }
        });

        let mut report = BroadcastReport::default();
        for (chat_id, result) in join_all(sends).await {
            match result {
                Ok(()) => report.delivered.push(chat_id),
                Err(e) => {
                    error!(chat_id = chat_id, error = %e, "Error sending announcement");
                    report.failed.push(DeliveryFailure {
                        chat_id,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            total_in_window = total_in_window,
            total_all_time = total_all_time,
            delivered = report.delivered.len(),
            failed = report.failed.len(),
            "Announcement broadcast"
        );
        report
    }
}
