use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::api::GitHubClient;
use crate::event::{ApiResult, Event};

/// Spawn a profile fetch for `username`.
///
/// Exactly one [`Event::FetchCompleted`] is sent unless `cancel` fires first,
/// in which case nothing is sent.
pub fn start_fetch(
    client: GitHubClient,
    username: String,
    seq: u64,
    sender: UnboundedSender<Event>,
    cancel: CancellationToken,
) {
    tokio::spawn(async move {
        let result = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(seq, "fetch cancelled");
                return;
            }
            result = client.get_user(&username) => result,
        };

        if let Err(ref e) = result {
            tracing::warn!(seq, %username, "fetch failed: {e}");
        }
        let result: ApiResult<_> = result.map_err(|e| Arc::new(e.to_string()));
        let _ = sender.send(Event::FetchCompleted { seq, result });
    });
}

/// Spawn a one-shot timer that sends [`Event::TimerFired`] after `interval`.
pub fn start_timer(interval: Duration, sender: UnboundedSender<Event>, cancel: CancellationToken) {
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = tokio::time::sleep(interval) => {
                let _ = sender.send(Event::TimerFired);
            }
        }
    });
}
