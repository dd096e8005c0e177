//! Word wrap and centring measured in display cells.

use textwrap::{Options, WordSeparator, WrapAlgorithm};
use unicode_width::UnicodeWidthStr;

/// Wrap `text` to rows no wider than `width` cells.
///
/// Explicit newlines always break, and leading indentation survives.
/// Words longer than a row are split. An empty input or a zero width
/// yields no rows.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let options = Options::new(usize::from(width))
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace);
    let mut rows: Vec<String> = textwrap::wrap(text, options)
        .into_iter()
        .map(|row| row.into_owned())
        .collect();
    // A trailing empty row comes from the final newline, not content
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    rows
}

/// Centre `text` in a row of `width` cells. Text wider than the row is
/// returned unchanged.
pub fn center(text: &str, width: u16) -> String {
    let text_width = text.width();
    let width = width as usize;
    if text_width >= width {
        return text.to_string();
    }
    let pad = (width - text_width) / 2;
    format!("{}{text}", " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        let rows = wrap_text("the quick brown fox jumps", 10);
        assert_eq!(rows, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn splits_overlong_words() {
        let rows = wrap_text("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn keeps_explicit_newlines() {
        let rows = wrap_text("one\n\ntwo", 10);
        assert_eq!(rows, vec!["one", "", "two"]);
    }

    #[test]
    fn empty_and_zero_width() {
        assert!(wrap_text("", 10).is_empty());
        assert!(wrap_text("hello", 0).is_empty());
        assert!(wrap_text("hello\n", 10).len() == 1);
    }

    #[test]
    fn measures_wide_characters() {
        // Each CJK character is two cells wide
        let rows = wrap_text("日本語です", 4);
        assert_eq!(rows, vec!["日本", "語で", "す"]);
    }

    #[test]
    fn keeps_leading_indentation() {
        let rows = wrap_text("Steps:\n  1. boil\n  2. drain", 30);
        assert_eq!(rows, vec!["Steps:", "  1. boil", "  2. drain"]);
    }

    #[test]
    fn rows_never_exceed_width() {
        let text = "a verylongwordthatcannotfit and   some spaced   words";
        for width in 1..12 {
            for row in wrap_text(text, width) {
                assert!(row.width() <= usize::from(width), "{row:?} wider than {width}");
            }
        }
    }

    #[test]
    fn center_pads_left() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
