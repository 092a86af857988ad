//! HTML assembly over render blocks.
//!
//! Consumes the ordered `RenderBlock` sequences the core produces; list
//! blocks become unordered lists, paragraph blocks become paragraphs, in
//! the original order. Summary-derived text is passed through untouched
//! (the upstream summarizer already embeds citation anchors in it); only
//! values interpolated here, like titles and URLs, are escaped.

use hns_core::{RenderBlock, SummaryRecord};
use hns_render::{fragment_blocks, rating_css_color, render_summary};

use crate::state::{ViewSnapshot, ViewStatus};

/// Escape text dropped into element content or attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn render_block(block: &RenderBlock) -> String {
    match block {
        RenderBlock::ArticleSynopsis(text) => {
            format!("<p class=\"synopsis\">{text}</p>\n")
        }
        RenderBlock::SectionHeading(text) => format!("<h3>{}</h3>\n", escape(text)),
        RenderBlock::ListBlock(items) => {
            let mut out = String::from("<ul>\n");
            for item in items {
                out.push_str(&format!("  <li>{item}</li>\n"));
            }
            out.push_str("</ul>\n");
            out
        }
        RenderBlock::ParagraphBlock(text) => format!("<p>{text}</p>\n"),
    }
}

/// One story card: title, meta line, controversy badge, then the block
/// sequence from the core renderer.
pub fn render_story(record: &SummaryRecord) -> String {
    let rendered = render_summary(record);

    let title = escape(&record.title);
    let title_html = match record.url.as_deref() {
        Some(url) if !url.is_empty() => {
            format!("<a href=\"{}\" target=\"_blank\">{title}</a>", escape(url))
        }
        _ => title,
    };

    let badge = rendered
        .rating
        .map(|rating| {
            format!(
                "<span class=\"controversy\" style=\"background-color: {}\">controversy {rating}/10</span>",
                rating_css_color(rating)
            )
        })
        .unwrap_or_default();

    let body: String = fragment_blocks(&rendered)
        .iter()
        .map(render_block)
        .collect();

    format!(
        "<article class=\"story\">\n\
         <h2>{title_html}</h2>\n\
         <p class=\"meta\">{points} points · <a href=\"{discussion}\" target=\"_blank\">{comments} comments</a> {badge}</p>\n\
         {body}</article>\n",
        points = record.points,
        discussion = record.discussion_url(),
        comments = record.comment_count,
    )
}

/// The full page for the current view state.
pub fn render_page(snapshot: &ViewSnapshot) -> String {
    let updated = snapshot
        .updated_label
        .as_deref()
        .map(|label| format!("<p class=\"updated\">Last updated {label}</p>\n"))
        .unwrap_or_default();

    let content = match &snapshot.status {
        ViewStatus::Loading | ViewStatus::Waiting => {
            "<p class=\"notice\">Summaries are being generated, check back in a moment.</p>\n"
                .to_string()
        }
        ViewStatus::Failed(message) => format!(
            "<p class=\"notice error\">Could not load summaries: {}</p>\n\
             <form method=\"post\" action=\"/api/refresh\"><button type=\"submit\">Try again</button></form>\n",
            escape(message)
        ),
        ViewStatus::Ready => snapshot
            .feed
            .summaries
            .iter()
            .map(render_story)
            .collect(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>HN Discussion Summaries</title>
<style>{css}</style>
</head>
<body>
<header><h1>HN Discussion Summaries</h1>
{updated}</header>
<main>
{content}</main>
</body>
</html>"#,
        css = PAGE_CSS,
    )
}

const PAGE_CSS: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 0 auto; padding: 1rem; }\n\
.story { border-bottom: 1px solid #ddd; padding: 1rem 0; }\n\
.meta { color: #666; font-size: 0.9rem; }\n\
.synopsis { font-style: italic; }\n\
.controversy { color: #111; border-radius: 4px; padding: 0 0.4rem; }\n\
.notice { color: #666; }\n\
.notice.error { color: #a00; }\n";
