use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// One summarized story as delivered by the upstream summarizer API.
///
/// Records are immutable once received; a refresh replaces the whole set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub story_id: i64,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub comment_count: i64,
    pub summary: String,
    /// Upstream writes SQLite `datetime('now')` strings (UTC, no zone
    /// suffix), so this stays raw and is parsed on demand.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl SummaryRecord {
    /// Timestamp of this record, if upstream sent one we can parse.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
            return Some(naive.and_utc());
        }
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Link to the discussion thread on Hacker News.
    pub fn discussion_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.story_id)
    }
}

/// A full refresh worth of summaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryFeed {
    pub summaries: Vec<SummaryRecord>,
}

impl SummaryFeed {
    pub fn new(summaries: Vec<SummaryRecord>) -> Self {
        Self { summaries }
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Most recent record timestamp, used for the "last updated" label.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.summaries
            .iter()
            .filter_map(SummaryRecord::created_at_utc)
            .max()
    }
}

/// A structured piece of a rendered summary, consumed in order by the
/// display layer. List blocks render as unordered lists, paragraph blocks
/// as paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content")]
pub enum RenderBlock {
    ArticleSynopsis(String),
    SectionHeading(String),
    ListBlock(Vec<String>),
    ParagraphBlock(String),
}

/// Everything the display layer needs to build one story fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSummary {
    pub synopsis: String,
    /// Controversy rating 0-10, absent when the raw text carries none.
    pub rating: Option<u8>,
    pub blocks: Vec<RenderBlock>,
}
