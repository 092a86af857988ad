//! Refresh polling and the freshness ticker.
//!
//! Both are explicit objects owning their task handle, started and stopped
//! by whoever owns them, instead of ambient process-wide timers.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::source::SummarySource;
use crate::state::ViewState;

#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between retries while upstream has nothing yet.
    pub retry_delay: Duration,
    /// Retries before giving up and asking the user to refresh manually.
    pub max_attempts: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            retry_delay: Duration::from_secs(10),
            max_attempts: 30,
        }
    }
}

/// One-shot polling loop: fetch until a non-empty feed lands, then stop.
///
/// Empty answers are retried on a fixed delay; a transport failure ends
/// the loop and leaves the view in `Failed` for a manual retry.
pub struct RefreshScheduler {
    source: Arc<dyn SummarySource>,
    view: Arc<ViewState>,
    config: PollConfig,
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn new(source: Arc<dyn SummarySource>, view: Arc<ViewState>, config: PollConfig) -> Self {
        Self {
            source,
            view,
            config,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Spawn the polling task. A no-op while a previous run is still going.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let source = self.source.clone();
        let view = self.view.clone();
        let config = self.config.clone();
        self.handle = Some(tokio::spawn(async move {
            poll_until_ready(source, view, config).await;
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn poll_until_ready(
    source: Arc<dyn SummarySource>,
    view: Arc<ViewState>,
    config: PollConfig,
) {
    view.mark_loading().await;
    for attempt in 1..=config.max_attempts {
        match source.fetch_feed().await {
            Ok(feed) if feed.is_empty() => {
                info!(
                    attempt,
                    "⏳ No summaries yet, retrying in {}s",
                    config.retry_delay.as_secs()
                );
                view.mark_waiting().await;
                tokio::time::sleep(config.retry_delay).await;
            }
            Ok(feed) => {
                info!("📰 Loaded {} summaries", feed.summaries.len());
                view.set_feed(feed).await;
                return;
            }
            Err(e) => {
                error!("Failed to fetch summaries: {e}");
                view.mark_failed(e.to_string()).await;
                return;
            }
        }
    }
    view.mark_failed(format!(
        "no summaries after {} attempts",
        config.max_attempts
    ))
    .await;
}

/// Keeps the "last updated ... ago" label current while the page lives.
pub struct FreshnessTicker {
    view: Arc<ViewState>,
    interval: Duration,
    handle: Option<JoinHandle<()>>,
}

impl FreshnessTicker {
    pub fn new(view: Arc<ViewState>, interval: Duration) -> Self {
        Self {
            view,
            interval,
            handle: None,
        }
    }

    pub fn start(&mut self) {
        if self.handle.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }
        let view = self.view.clone();
        let period = self.interval;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.tick().await; // first tick fires immediately
            loop {
                interval.tick().await;
                view.refresh_updated_label().await;
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for FreshnessTicker {
    fn drop(&mut self) {
        self.stop();
    }
}
