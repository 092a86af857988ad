//! Shared view state written by the poller and ticker tasks.

use hns_core::SummaryFeed;
use hns_render::timeago;
use tokio::sync::RwLock;

/// Where the view currently stands with respect to upstream data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    /// First fetch has not completed yet.
    Loading,
    /// Upstream answered with an empty set; a retry is scheduled.
    Waiting,
    /// A feed is loaded and rendered.
    Ready,
    /// Transport failed; waiting for a manual retry.
    Failed(String),
}

impl ViewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewStatus::Loading => "loading",
            ViewStatus::Waiting => "waiting",
            ViewStatus::Ready => "ready",
            ViewStatus::Failed(_) => "failed",
        }
    }
}

/// Point-in-time copy handed to request handlers.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub status: ViewStatus,
    pub feed: SummaryFeed,
    pub updated_label: Option<String>,
}

#[derive(Debug)]
struct ViewInner {
    status: ViewStatus,
    feed: SummaryFeed,
    updated_label: Option<String>,
}

/// The single mutable surface of the view layer. Only the scheduler, the
/// ticker and the manual-refresh handler write here.
#[derive(Debug)]
pub struct ViewState {
    inner: RwLock<ViewInner>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            inner: RwLock::new(ViewInner {
                status: ViewStatus::Loading,
                feed: SummaryFeed::default(),
                updated_label: None,
            }),
        }
    }
}

impl ViewState {
    pub async fn snapshot(&self) -> ViewSnapshot {
        let inner = self.inner.read().await;
        ViewSnapshot {
            status: inner.status.clone(),
            feed: inner.feed.clone(),
            updated_label: inner.updated_label.clone(),
        }
    }

    /// Install a freshly fetched feed and stamp its freshness label.
    pub async fn set_feed(&self, feed: SummaryFeed) {
        let label = feed.last_updated().map(timeago::time_since_now);
        let mut inner = self.inner.write().await;
        inner.feed = feed;
        inner.status = ViewStatus::Ready;
        inner.updated_label = label;
    }

    pub async fn mark_loading(&self) {
        self.inner.write().await.status = ViewStatus::Loading;
    }

    pub async fn mark_waiting(&self) {
        self.inner.write().await.status = ViewStatus::Waiting;
    }

    pub async fn mark_failed(&self, message: String) {
        self.inner.write().await.status = ViewStatus::Failed(message);
    }

    /// Recompute the "last updated ... ago" label from the loaded feed.
    pub async fn refresh_updated_label(&self) {
        let mut inner = self.inner.write().await;
        inner.updated_label = inner.feed.last_updated().map(timeago::time_since_now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hns_core::SummaryRecord;

    fn feed_with_timestamp(ts: &str) -> SummaryFeed {
        SummaryFeed::new(vec![SummaryRecord {
            story_id: 1,
            title: "t".to_string(),
            url: None,
            points: 0,
            comment_count: 10,
            summary: String::new(),
            created_at: Some(ts.to_string()),
        }])
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let state = ViewState::default();
        let snap = state.snapshot().await;
        assert_eq!(snap.status, ViewStatus::Loading);
        assert!(snap.feed.is_empty());
        assert!(snap.updated_label.is_none());
    }

    #[tokio::test]
    async fn test_set_feed_marks_ready_and_stamps_label() {
        let state = ViewState::default();
        state.set_feed(feed_with_timestamp("2024-03-01 06:00:00")).await;
        let snap = state.snapshot().await;
        assert_eq!(snap.status, ViewStatus::Ready);
        assert!(snap.updated_label.is_some());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_feed() {
        let state = ViewState::default();
        state.set_feed(feed_with_timestamp("2024-03-01 06:00:00")).await;
        state.mark_failed("boom".to_string()).await;
        let snap = state.snapshot().await;
        assert_eq!(snap.status, ViewStatus::Failed("boom".to_string()));
        assert!(!snap.feed.is_empty());
    }
}
