//! Heading demotion for embedded documentation.
//!
//! Each page carries its own level-1 title, so every heading inside the
//! embedded documentation moves down one level.
//!
//! # Examples
//!
//! ```
//! use refdoc_codegen::markdown::normalize_headings;
//!
//! let doc = "# Parameters\n- `n`  the   number of seeds";
//! assert_eq!(
//!     normalize_headings(doc),
//!     "## Parameters\n- `n` the number of seeds"
//! );
//! ```

/// Markdown heading marker.
const HEADING_MARKER: char = '#';

/// Deepest heading level recognised as a heading token.
const MAX_HEADING_LEVEL: usize = 6;

/// Demotes every heading in `doc` by one level.
///
/// Works line by line: each line is split on whitespace, any token made only
/// of 1 to 6 `#` characters gets one more `#`, and the tokens are joined
/// back with single spaces. Line breaks are preserved; runs of whitespace
/// inside a line (including indentation) collapse to one space.
///
/// A 6-marker token becomes 7 markers; there is no cap.
#[must_use]
pub fn normalize_headings(doc: &str) -> String {
    doc.split('\n')
        .map(normalize_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn normalize_line(line: &str) -> String {
    line.split_whitespace()
        .map(|token| {
            if is_heading_marker(token) {
                format!("{token}{HEADING_MARKER}")
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_heading_marker(token: &str) -> bool {
    (1..=MAX_HEADING_LEVEL).contains(&token.len()) && token.chars().all(|c| c == HEADING_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h1_becomes_h2() {
        assert_eq!(normalize_headings("# Title"), "## Title");
    }

    #[test]
    fn test_every_level_demoted() {
        let doc = "# a\n## b\n### c\n#### d\n##### e";
        assert_eq!(
            normalize_headings(doc),
            "## a\n### b\n#### c\n##### d\n###### e"
        );
    }

    #[test]
    fn test_h6_is_not_capped() {
        assert_eq!(normalize_headings("###### Deep"), "####### Deep");
    }

    #[test]
    fn test_seven_markers_untouched() {
        assert_eq!(normalize_headings("####### x"), "####### x");
    }

    #[test]
    fn test_marker_tokens_anywhere_in_line() {
        // Token-based, not position-based.
        assert_eq!(normalize_headings("see # here"), "see ## here");
    }

    #[test]
    fn test_mixed_tokens_untouched() {
        assert_eq!(normalize_headings("#tag and #1"), "#tag and #1");
        assert_eq!(normalize_headings("C# code"), "C# code");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(normalize_headings("  a   b\tc  "), "a b c");
    }

    #[test]
    fn test_line_breaks_preserved() {
        assert_eq!(normalize_headings("a\n\nb\n"), "a\n\nb\n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_headings(""), "");
    }

    #[test]
    fn test_code_fences_are_not_special() {
        let doc = "```python\nimport webgestaltpy\n```";
        assert_eq!(normalize_headings(doc), doc);
    }
}
