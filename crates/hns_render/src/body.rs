//! Line-by-line grouping of the sentiment body into render blocks.

use hns_core::RenderBlock;

use crate::markup;

/// Shown in place of the sentiment body when a story has too few comments
/// for the summarizer to say anything useful.
pub const LOW_SIGNAL_PLACEHOLDER: &str =
    "There are not enough comments to generate a summary of the reader's thoughts.";

/// Stories below this many comments get the placeholder instead of a body.
pub const MIN_COMMENTS_FOR_BODY: i64 = 5;

/// True when the sentiment body should be suppressed for `comment_count`.
pub fn too_few_comments(comment_count: i64) -> bool {
    comment_count < MIN_COMMENTS_FOR_BODY
}

/// The single placeholder block emitted when the guard fires.
pub fn placeholder_block() -> RenderBlock {
    RenderBlock::ParagraphBlock(LOW_SIGNAL_PLACEHOLDER.to_string())
}

/// Group the body text into list and paragraph blocks, preserving line
/// order.
///
/// Consecutive bullet-marked lines form one `ListBlock`; any non-bullet
/// line closes the open list and becomes a `ParagraphBlock` of its own.
/// Blank lines are skipped and do not break a list.
pub fn format_body(remainder: &str) -> Vec<RenderBlock> {
    let mut blocks = Vec::new();
    let mut items: Vec<String> = Vec::new();
    let mut in_list = false;

    for line in remainder.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match strip_bullet_marker(line) {
            Some(content) => {
                in_list = true;
                items.push(collapse_citation_gaps(&markup::normalize(content)));
            }
            None => {
                if in_list {
                    blocks.push(RenderBlock::ListBlock(std::mem::take(&mut items)));
                    in_list = false;
                }
                blocks.push(RenderBlock::ParagraphBlock(markup::normalize(line)));
            }
        }
    }
    if in_list {
        blocks.push(RenderBlock::ListBlock(items));
    }
    blocks
}

/// Returns the line content past its bullet marker, or `None` for
/// non-bullet lines. Accepted spellings: `•`, `* `, `- `.
fn strip_bullet_marker(line: &str) -> Option<&str> {
    if let Some(rest) = line.strip_prefix('•') {
        return Some(rest.trim_start());
    }
    if let Some(rest) = line.strip_prefix("* ") {
        return Some(rest.trim_start());
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return Some(rest.trim_start());
    }
    None
}

/// Collapse whitespace between adjacent citation tokens: `[1] [2]` becomes
/// `[1][2]` so the links render as one run.
fn collapse_citation_gaps(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        out.push(ch);
        if ch != ']' {
            continue;
        }
        let after = &text[idx + 1..];
        let gap = after.len() - after.trim_start().len();
        if gap > 0 && after.trim_start().starts_with('[') {
            for _ in after[..gap].chars() {
                chars.next();
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> RenderBlock {
        RenderBlock::ListBlock(items.iter().map(|s| s.to_string()).collect())
    }

    fn para(text: &str) -> RenderBlock {
        RenderBlock::ParagraphBlock(text.to_string())
    }

    #[test]
    fn test_list_grouping() {
        let blocks = format_body("- a\n- b\ntext\n- c");
        assert_eq!(blocks, vec![list(&["a", "b"]), para("text"), list(&["c"])]);
    }

    #[test]
    fn test_blank_lines_do_not_split_lists() {
        let blocks = format_body("- a\n\n- b");
        assert_eq!(blocks, vec![list(&["a", "b"])]);
    }

    #[test]
    fn test_all_marker_spellings() {
        let blocks = format_body("• glyph\n* star\n- dash");
        assert_eq!(blocks, vec![list(&["glyph", "star", "dash"])]);
    }

    #[test]
    fn test_paragraph_only() {
        let blocks = format_body("no bullets here\nsecond line");
        assert_eq!(
            blocks,
            vec![para("no bullets here"), para("second line")]
        );
    }

    #[test]
    fn test_markup_normalized_per_line() {
        let blocks = format_body("- Point one **bold**\nOutside ****loud****");
        assert_eq!(
            blocks,
            vec![list(&["Point one bold"]), para("Outside loud")]
        );
    }

    #[test]
    fn test_citation_collapsing_in_list_items() {
        let blocks = format_body("- claim [1] [2]");
        assert_eq!(blocks, vec![list(&["claim [1][2]"])]);
    }

    #[test]
    fn test_citations_not_collapsed_in_paragraphs() {
        let blocks = format_body("claim [1] [2]");
        assert_eq!(blocks, vec![para("claim [1] [2]")]);
    }

    #[test]
    fn test_trailing_list_is_flushed() {
        let blocks = format_body("intro\n- last");
        assert_eq!(blocks, vec![para("intro"), list(&["last"])]);
    }

    #[test]
    fn test_empty_input() {
        assert!(format_body("").is_empty());
        assert!(format_body("\n\n  \n").is_empty());
    }

    #[test]
    fn test_hyphen_without_space_is_not_a_bullet() {
        let blocks = format_body("-not a bullet");
        assert_eq!(blocks, vec![para("-not a bullet")]);
    }

    #[test]
    fn test_gate() {
        for count in [0, 1, 2, 3, 4] {
            assert!(too_few_comments(count), "count {count}");
        }
        for count in [5, 6, 100] {
            assert!(!too_few_comments(count), "count {count}");
        }
    }
}
