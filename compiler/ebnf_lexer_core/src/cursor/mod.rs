//! Character cursor over a borrowed `&str`.
//!
//! The cursor advances one `char` at a time. Its position is a byte offset
//! that always sits on a UTF-8 character boundary, so any two positions it
//! has visited delimit a valid `&str` slice.

/// Read-only view of the input plus a position.
///
/// # Invariant
///
/// `0 <= pos <= source.len()` and `source.is_char_boundary(pos)`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the character at the current position, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Returns `true` if not at EOF and `pred` holds for the current character.
    #[inline]
    pub fn matches(&self, pred: impl Fn(char) -> bool) -> bool {
        self.current().is_some_and(pred)
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The full input the cursor was created over.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Extract a source substring.
    ///
    /// `start..end` must be positions this cursor has occupied.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Advance past ordinary string-literal content to the next `"` or `\`.
    ///
    /// Returns the delimiter byte the cursor now sits on, or `None` if no
    /// delimiter remains (the cursor is then at EOF). Both delimiters are
    /// ASCII, so the landing position is always a character boundary.
    pub fn skip_to_string_delim(&mut self) -> Option<u8> {
        let remaining = &self.source.as_bytes()[self.pos..];
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset;
            Some(remaining[offset])
        } else {
            self.pos = self.source.len();
            None
        }
    }
}

#[cfg(test)]
mod tests;
