//! Turns raw LLM summary blobs into ordered render blocks.
//!
//! The upstream summarizer emits semi-structured text (an article synopsis,
//! a controversy rating, a bulleted sentiment section) whose formatting
//! drifts from run to run. Everything here is a total function over
//! arbitrary text: malformed input degrades, it never errors.

pub mod body;
pub mod markup;
pub mod rating;
pub mod sections;
pub mod timeago;

use hns_core::{RenderBlock, RenderedSummary, SummaryRecord};

pub use body::{format_body, LOW_SIGNAL_PLACEHOLDER};
pub use markup::normalize;
pub use rating::{extract_rating, rating_color, rating_css_color};
pub use sections::extract_sections;

pub mod prelude {
    pub use crate::{format_body, normalize, render_summary};
    pub use hns_core::{RenderBlock, RenderedSummary, Result, SummaryRecord};
}

/// Render one summary record into everything a display fragment needs.
///
/// The rating is extracted from the original text before any sentinel
/// stripping, so it is available even when the body is suppressed by the
/// low-comment guard.
pub fn render_summary(record: &SummaryRecord) -> RenderedSummary {
    render_parts(&record.summary, record.comment_count)
}

/// [`render_summary`] for callers holding just the text and count.
pub fn render_parts(raw: &str, comment_count: i64) -> RenderedSummary {
    let rating = rating::extract_rating(raw);
    let sections = sections::extract_sections(raw);
    let blocks = if body::too_few_comments(comment_count) {
        vec![body::placeholder_block()]
    } else {
        body::format_body(&sections.remainder)
    };
    RenderedSummary {
        synopsis: sections.synopsis,
        rating,
        blocks,
    }
}

/// Assemble the full ordered block sequence for one story fragment:
/// synopsis first, then a heading over the sentiment body. The placeholder
/// paragraph stands alone, without the heading.
pub fn fragment_blocks(rendered: &RenderedSummary) -> Vec<RenderBlock> {
    let mut blocks = Vec::with_capacity(rendered.blocks.len() + 2);
    if !rendered.synopsis.is_empty() {
        blocks.push(RenderBlock::ArticleSynopsis(rendered.synopsis.clone()));
    }
    let suppressed = rendered.blocks == [body::placeholder_block()];
    if !rendered.blocks.is_empty() && !suppressed {
        blocks.push(RenderBlock::SectionHeading(
            "What readers are saying".to_string(),
        ));
    }
    blocks.extend(rendered.blocks.iter().cloned());
    blocks
}
