//! Bold-emphasis cleanup for model output.
//!
//! The upstream summarizer is inconsistent about emphasis nesting: section
//! labels sometimes come wrapped in four asterisks (`****KEY POINTS:****`),
//! sometimes plain text gets the same treatment, and ordinary `**bold**`
//! shows up inside bullet points. All three forms are reduced to plain text.

/// Strip all recognized emphasis forms from one line.
///
/// Applied most-specific first so the quadruple-marker forms are never
/// half-eaten by the double-marker rule. Idempotent: a clean line comes
/// back unchanged.
pub fn normalize(line: &str) -> String {
    let line = strip_delimited(line, "****", true);
    let line = strip_delimited(&line, "****", false);
    strip_delimited(&line, "**", false)
}

/// Remove matched `marker`...`marker` pairs, keeping the inner text.
///
/// Pairs are matched lazily (closing marker is the next occurrence). With
/// `require_colon` the inner text must end in `:`, which is how labelled
/// headings like `****ARTICLE SUMMARY:****` are told apart from plain
/// emphasis. Unpaired markers are left alone.
fn strip_delimited(text: &str, marker: &str, require_colon: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(marker) else {
            out.push_str(rest);
            break;
        };
        let after_open = &rest[start + marker.len()..];
        let Some(end) = after_open.find(marker) else {
            out.push_str(rest);
            break;
        };
        let inner = &after_open[..end];
        if require_colon && !inner.ends_with(':') {
            // Not the labelled form; emit through the opening marker and
            // keep scanning so a later pair can still match.
            out.push_str(&rest[..start + marker.len()]);
            rest = after_open;
            continue;
        }
        out.push_str(&rest[..start]);
        out.push_str(inner);
        rest = &after_open[end + marker.len()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadruple_marker_with_colon() {
        assert_eq!(normalize("****KEY POINTS:****"), "KEY POINTS:");
    }

    #[test]
    fn test_quadruple_marker_plain() {
        assert_eq!(normalize("****emphasis****"), "emphasis");
    }

    #[test]
    fn test_double_marker() {
        assert_eq!(normalize("Point one **bold** end"), "Point one bold end");
    }

    #[test]
    fn test_mixed_forms_in_one_line() {
        assert_eq!(
            normalize("****Label:**** then **bold** and ****loud****"),
            "Label: then bold and loud"
        );
    }

    #[test]
    fn test_surrounding_text_untouched() {
        assert_eq!(normalize("a ****b:**** c"), "a b: c");
    }

    #[test]
    fn test_no_markers_is_noop() {
        assert_eq!(normalize("plain text, no markers"), "plain text, no markers");
    }

    #[test]
    fn test_unpaired_marker_left_alone() {
        assert_eq!(normalize("dangling ** here"), "dangling ** here");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "****KEY POINTS:****",
            "**bold** and ****more****",
            "no markers at all",
            "",
            "dangling ** here",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
    }
}
