//! Text selection representation.

/// A selection as a byte range into a field's text.
///
/// Always normalized so `start <= end`. A collapsed range (`start == end`)
/// is the plain caret position. Offsets produced by
/// [`InputValueStore`](crate::InputValueStore) sit on UTF-8 character boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a range from two endpoints in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A zero-width range at `at`.
    #[inline]
    pub fn collapsed(at: usize) -> Self {
        Self { start: at, end: at }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the selected substring, or `""` if the range does not fit `value`.
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        value.get(self.start..self.end).unwrap_or("")
    }

    /// Returns `value` with this range replaced by `insert`.
    ///
    /// Endpoints past the end of `value` are clamped; endpoints inside a
    /// multi-byte character move back to its start.
    pub fn splice(&self, value: &str, insert: &str) -> String {
        let start = crate::text::clamp_to_char_boundary(value, self.start);
        let end = crate::text::clamp_to_char_boundary(value, self.end).max(start);

        let mut out = String::with_capacity(value.len() - (end - start) + insert.len());
        out.push_str(&value[..start]);
        out.push_str(insert);
        out.push_str(&value[end..]);
        out
    }
}
