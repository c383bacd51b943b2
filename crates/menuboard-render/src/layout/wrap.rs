//! Breaking channel entries into column-sized fragments.
//!
//! An entry is first split on `'\n'`; each resulting paragraph is wrapped on
//! its own and never merged with its neighbours. Cuts are measured on the
//! untrimmed remainder; only the carved fragments are trimmed.

use super::types::WrapMode;
use super::util::{byte_offset, char_width};

/// Wrap one entry into fragments no longer than `width` characters.
///
/// A zero `width` cannot be carved, so each paragraph is returned whole and
/// left for the caller to truncate.
///
/// # Example
///
/// ```rust
/// use menuboard_render::layout::wrap_entry;
/// use menuboard_render::WrapMode;
///
/// let lines = wrap_entry("hello world foo\nbar", 9, WrapMode::Smart);
/// assert_eq!(lines, vec!["hello", "world foo", "bar"]);
///
/// let lines = wrap_entry("hello world", 4, WrapMode::Hard);
/// assert_eq!(lines, vec!["hell", "o wo", "rld"]);
/// ```
pub fn wrap_entry(entry: &str, width: usize, mode: WrapMode) -> Vec<String> {
    let mut fragments = Vec::new();
    for paragraph in entry.split('\n') {
        wrap_paragraph(paragraph, width, mode, &mut fragments);
    }
    fragments
}

fn wrap_paragraph(paragraph: &str, width: usize, mode: WrapMode, out: &mut Vec<String>) {
    let mut rest = paragraph;

    if width > 0 {
        while char_width(rest) > width {
            let cut = match mode {
                WrapMode::Smart => {
                    last_break(rest, width).unwrap_or_else(|| byte_offset(rest, width))
                }
                WrapMode::Hard => byte_offset(rest, width),
            };
            out.push(rest[..cut].trim().to_string());
            rest = rest[cut..].trim_start();
        }
    }

    out.push(rest.trim().to_string());
}

/// Byte offset of the last whitespace within the first `width + 1` characters.
///
/// A break at offset 0 carves an empty fragment; the remainder is still
/// shortened because its leading whitespace is trimmed off.
fn last_break(s: &str, width: usize) -> Option<usize> {
    s.char_indices()
        .take(width + 1)
        .filter(|(_, c)| c.is_whitespace())
        .map(|(idx, _)| idx)
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smart(s: &str, width: usize) -> Vec<String> {
        wrap_entry(s, width, WrapMode::Smart)
    }

    fn hard(s: &str, width: usize) -> Vec<String> {
        wrap_entry(s, width, WrapMode::Hard)
    }

    #[test]
    fn short_text_is_one_trimmed_fragment() {
        assert_eq!(smart("  hi  ", 10), vec!["hi"]);
        assert_eq!(hard("exact", 5), vec!["exact"]);
    }

    #[test]
    fn smart_breaks_at_last_space() {
        assert_eq!(smart("hello world foo", 9), vec!["hello", "world foo"]);
        assert_eq!(smart("hello world foo", 8), vec!["hello", "world", "foo"]);
    }

    #[test]
    fn smart_accepts_space_right_after_width() {
        assert_eq!(smart("abcd efg", 4), vec!["abcd", "efg"]);
    }

    #[test]
    fn smart_falls_back_to_hard_cut() {
        assert_eq!(smart("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn smart_handles_long_word_after_short_one() {
        assert_eq!(smart("a bcdefghij", 4), vec!["a", "bcde", "fghi", "j"]);
    }

    #[test]
    fn hard_ignores_word_boundaries() {
        assert_eq!(hard("hello world foo", 4), vec!["hell", "o wo", "rld", "foo"]);
    }

    #[test]
    fn newlines_start_new_fragments() {
        assert_eq!(smart("ab\ncd", 10), vec!["ab", "cd"]);
        assert_eq!(smart("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_newline_yields_empty_fragment() {
        assert_eq!(smart("ab\n", 10), vec!["ab", ""]);
    }

    #[test]
    fn whitespace_only_entry_yields_empty_fragments() {
        assert_eq!(smart("  ", 3), vec![""]);
        assert_eq!(smart("", 3), vec![""]);
        assert_eq!(smart("    ", 3), vec!["", ""]);
    }

    #[test]
    fn hard_cut_counts_leading_whitespace() {
        assert_eq!(hard("   abcdef", 4), vec!["a", "bcde", "f"]);
    }

    #[test]
    fn smart_breaks_inside_leading_whitespace() {
        assert_eq!(smart("   abcdef", 4), vec!["", "abcd", "ef"]);
    }

    #[test]
    fn smart_may_break_at_first_character() {
        assert_eq!(smart(" abcdefgh", 4), vec!["", "abcd", "efgh"]);
    }

    #[test]
    fn carriage_returns_are_trimmed() {
        assert_eq!(smart("one\r\ntwo", 10), vec!["one", "two"]);
    }

    #[test]
    fn tabs_count_as_break_points() {
        assert_eq!(smart("abc\tdef", 5), vec!["abc", "def"]);
    }

    #[test]
    fn zero_width_keeps_paragraph_whole() {
        assert_eq!(smart(" long text ", 0), vec!["long text"]);
        assert_eq!(hard("a\nb", 0), vec!["a", "b"]);
    }

    #[test]
    fn multibyte_text_wraps_by_chars() {
        assert_eq!(hard("ääääää", 4), vec!["ääää", "ää"]);
        assert_eq!(smart("öö öö", 3), vec!["öö", "öö"]);
    }
}
