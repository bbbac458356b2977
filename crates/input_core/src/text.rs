//! UTF-8 helpers that keep carets on character boundaries.

use std::borrow::Cow;

/// Clamp a byte index into `s` onto a character boundary.
///
/// Indices past the end clamp to `s.len()`; indices inside a multi-byte
/// character move back to the start of that character.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "1€2"; // '€' is 3 bytes
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 4), 4);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// The caret position one character before `i` (or 0).
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map_or(0, |(idx, _)| idx)
}

/// The caret position one character after `i` (or `s.len()`).
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map_or(s.len(), |ch| i + ch.len_utf8())
}

/// Strip CR and LF so pasted or typed text stays on one line.
///
/// Borrows when there is nothing to strip.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("12.5"), "12.5");
/// assert_eq!(filter_single_line("12\r\n.5\n"), "12.5");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}
