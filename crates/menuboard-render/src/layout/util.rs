//! Utility functions for measuring, padding and truncating cell text.
//!
//! Widths are counted in `char`s. Wide and combining characters are not
//! special-cased, so every function here agrees with the wrapping code on
//! what "fits" means.

/// Returns the width of a string in characters.
///
/// # Example
///
/// ```rust
/// use menuboard_render::layout::char_width;
///
/// assert_eq!(char_width("hello"), 5);
/// assert_eq!(char_width("héllo"), 5);
/// ```
pub fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the `n`th character, or `s.len()` when `s` is shorter.
pub(crate) fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx)
}

/// Keeps at most `max_width` characters from the start of `s`.
///
/// No marker is appended: the cut is exact.
///
/// # Example
///
/// ```rust
/// use menuboard_render::layout::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello World", 5), "Hello");
/// assert_eq!(truncate_to_width("Hi", 5), "Hi");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> &str {
    &s[..byte_offset(s, max_width)]
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// # Example
///
/// ```rust
/// use menuboard_render::layout::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");  // No truncation
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(char_width(s));
    let mut out = String::with_capacity(s.len() + padding);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', padding));
    out
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// When the remaining space is odd, the extra space goes on the right.
///
/// # Example
///
/// ```rust
/// use menuboard_render::layout::pad_center;
///
/// assert_eq!(pad_center("hi", 6), "  hi  ");
/// assert_eq!(pad_center("hi", 5), " hi  ");  // Extra space on right
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(char_width(s));
    let left = padding / 2;
    let right = padding - left;
    let mut out = String::with_capacity(s.len() + padding);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
