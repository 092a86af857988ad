//! Where summaries come from.

use async_trait::async_trait;
use hns_core::{Error, Result, SummaryFeed, SummaryRecord};
use url::Url;

/// Upstream feed of summarized stories.
///
/// An empty feed is a normal answer (the summarizer has not finished a
/// cycle yet); errors mean the transport itself failed.
#[async_trait]
pub trait SummarySource: Send + Sync {
    async fn fetch_feed(&self) -> Result<SummaryFeed>;
}

/// HTTP source hitting the summarizer's `/api/summaries` endpoint.
pub struct HttpSummarySource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSummarySource {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
        let endpoint = base
            .join("api/summaries")
            .map_err(|e| Error::InvalidUrl(e.to_string()))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl SummarySource for HttpSummarySource {
    async fn fetch_feed(&self) -> Result<SummaryFeed> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        // Upstream answers 404 with an error body while its cache is cold.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(SummaryFeed::default());
        }
        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "summaries endpoint returned {}",
                response.status()
            )));
        }
        let summaries: Vec<SummaryRecord> = response.json().await?;
        Ok(SummaryFeed::new(summaries))
    }
}

/// Fixed in-memory source, used by tests and local demos.
pub struct StaticSummarySource {
    feed: SummaryFeed,
}

impl StaticSummarySource {
    pub fn new(summaries: Vec<SummaryRecord>) -> Self {
        Self {
            feed: SummaryFeed::new(summaries),
        }
    }
}

#[async_trait]
impl SummarySource for StaticSummarySource {
    async fn fetch_feed(&self) -> Result<SummaryFeed> {
        Ok(self.feed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpSummarySource::new("not a url").is_err());
    }

    #[test]
    fn test_endpoint_join() {
        let source = HttpSummarySource::new("http://localhost:5000/").unwrap();
        assert_eq!(
            source.endpoint.as_str(),
            "http://localhost:5000/api/summaries"
        );
    }

    #[tokio::test]
    async fn test_static_source_round_trip() {
        let source = StaticSummarySource::new(vec![]);
        assert!(source.fetch_feed().await.unwrap().is_empty());
    }
}
