//! Sentinel-based section splitting.
//!
//! The raw summary blob is semi-structured: an `ARTICLE SUMMARY:` span, a
//! `CONTROVERSY: <digits>` line, and a `KEY POINTS:` label ahead of the
//! bullet list. The summarizer drifts on all of these, so splitting is
//! best-effort and never loses text that sits outside a sentinel.

pub const ARTICLE_SUMMARY: &str = "ARTICLE SUMMARY:";
pub const CONTROVERSY: &str = "CONTROVERSY:";
pub const KEY_POINTS: &str = "KEY POINTS:";

/// Raw text split into the article synopsis and everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub synopsis: String,
    pub remainder: String,
}

/// Split `raw` at the section sentinels.
///
/// The synopsis is the text between `ARTICLE SUMMARY:` and the next
/// `CONTROVERSY:`, trimmed. The remainder is the rest of the text with the
/// synopsis span, every `CONTROVERSY: <digits>` occurrence and every
/// `KEY POINTS:` label removed. Missing or out-of-order sentinels degrade
/// to an empty synopsis with the whole text as remainder.
pub fn extract_sections(raw: &str) -> Sections {
    let (synopsis, rest) = match raw.find(ARTICLE_SUMMARY) {
        Some(open) => {
            let body_start = open + ARTICLE_SUMMARY.len();
            match raw[body_start..].find(CONTROVERSY) {
                Some(rel) => {
                    let body_end = body_start + rel;
                    let synopsis = raw[body_start..body_end].trim().to_string();
                    let mut rest = String::with_capacity(raw.len());
                    rest.push_str(&raw[..open]);
                    rest.push_str(&raw[body_end..]);
                    (synopsis, rest)
                }
                // No closing sentinel after the opener: leave the text
                // where it is rather than guess at a span.
                None => (String::new(), raw.to_string()),
            }
        }
        None => (String::new(), raw.to_string()),
    };

    let rest = strip_controversy_labels(&rest);
    let remainder = rest.replace(KEY_POINTS, "").trim().to_string();

    Sections { synopsis, remainder }
}

/// Remove every `CONTROVERSY:` sentinel together with the rating digits
/// (and the whitespace between them) that follow it.
fn strip_controversy_labels(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(CONTROVERSY) {
        out.push_str(&rest[..start]);
        let after = &rest[start + CONTROVERSY.len()..];
        let skip = span_of_spaces_and_digits(after);
        rest = &after[skip..];
    }
    out.push_str(rest);
    out
}

fn span_of_spaces_and_digits(text: &str) -> usize {
    let mut end = 0;
    let mut seen_digit = false;
    for (idx, ch) in text.char_indices() {
        if ch == ' ' || ch == '\t' {
            if seen_digit {
                break;
            }
        } else if ch.is_ascii_digit() {
            seen_digit = true;
        } else {
            break;
        }
        end = idx + ch.len_utf8();
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_shape() {
        let raw = "ARTICLE SUMMARY:\nShort intro.\nCONTROVERSY: 7\nKEY POINTS:\n- a\n- b";
        let sections = extract_sections(raw);
        assert_eq!(sections.synopsis, "Short intro.");
        assert_eq!(sections.remainder, "- a\n- b");
    }

    #[test]
    fn test_missing_article_summary() {
        let raw = "CONTROVERSY: 3\nKEY POINTS:\n- only bullets";
        let sections = extract_sections(raw);
        assert_eq!(sections.synopsis, "");
        assert_eq!(sections.remainder, "- only bullets");
    }

    #[test]
    fn test_no_sentinels_at_all() {
        let raw = "just a blob of text\nwith two lines";
        let sections = extract_sections(raw);
        assert_eq!(sections.synopsis, "");
        assert_eq!(sections.remainder, raw);
    }

    #[test]
    fn test_opener_without_controversy() {
        let raw = "ARTICLE SUMMARY:\nIntro with no rating below.\n- a";
        let sections = extract_sections(raw);
        assert_eq!(sections.synopsis, "");
        assert!(sections.remainder.contains("Intro with no rating below."));
        assert!(sections.remainder.contains(ARTICLE_SUMMARY));
    }

    #[test]
    fn test_out_of_order_sentinels() {
        // CONTROVERSY before ARTICLE SUMMARY: no synopsis, labels stripped.
        let raw = "CONTROVERSY: 4\nARTICLE SUMMARY:\ntrailing text";
        let sections = extract_sections(raw);
        assert_eq!(sections.synopsis, "");
        assert!(sections.remainder.contains("trailing text"));
        assert!(!sections.remainder.contains(CONTROVERSY));
    }

    #[test]
    fn test_text_before_opener_is_kept() {
        let raw = "preamble\nARTICLE SUMMARY:\nIntro.\nCONTROVERSY: 2\nbody";
        let sections = extract_sections(raw);
        assert_eq!(sections.synopsis, "Intro.");
        assert!(sections.remainder.starts_with("preamble"));
        assert!(sections.remainder.ends_with("body"));
    }

    #[test]
    fn test_controversy_without_digits() {
        let raw = "CONTROVERSY: unusually high\nbody";
        let sections = extract_sections(raw);
        assert_eq!(sections.remainder, "unusually high\nbody");
    }

    #[test]
    fn test_empty_input() {
        let sections = extract_sections("");
        assert_eq!(sections.synopsis, "");
        assert_eq!(sections.remainder, "");
    }

    #[test]
    fn test_extraction_completeness() {
        let raw = "ARTICLE SUMMARY:\nIntro text.\nCONTROVERSY: 9\nKEY POINTS:\n- alpha\n- beta";
        let sections = extract_sections(raw);
        // Every non-sentinel character of the input survives in one of the
        // two outputs.
        for needle in ["Intro text.", "- alpha", "- beta"] {
            assert!(
                sections.synopsis.contains(needle) || sections.remainder.contains(needle),
                "lost text: {needle}"
            );
        }
        for sentinel in [ARTICLE_SUMMARY, CONTROVERSY, KEY_POINTS] {
            assert!(!sections.synopsis.contains(sentinel));
            assert!(!sections.remainder.contains(sentinel));
        }
    }
}
