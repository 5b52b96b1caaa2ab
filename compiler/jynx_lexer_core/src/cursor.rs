//! Forward-only byte cursor over a borrowed source string.
//!
//! The cursor never copies the source. Reads at or past the end of the
//! source yield `0x00`, so the scanner can look up to two bytes ahead
//! without bounds checks at the call site. An interior `0x00` byte reads
//! the same as the end of input; use [`Cursor::is_eof`] to tell them apart.

/// Forward-only cursor over a borrowed `&str`.
///
/// The cursor is [`Copy`]; it holds the source slice and a single offset.
///
/// # Invariant
///
/// `pos <= source_len`. Every public method that moves the cursor keeps
/// the position on a UTF-8 character boundary as long as it only steps
/// over ASCII bytes, which is all the scanner ever does.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: u32,
    /// Scannable length of `source`, saturated at `u32::MAX`.
    source_len: u32,
}

/// Size assertion: `&str` = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// Sources longer than `u32::MAX` bytes are scanned only up to
    /// `u32::MAX`. The integration layer (`jynx_lexer`) rejects oversized
    /// sources before they get here.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.source_len {
            self.source.as_bytes()[pos as usize]
        } else {
            0
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(2))
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the scannable source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must lie within the source and on character
    /// boundaries. Scanner-produced offsets always do. A range that breaks
    /// the contract yields the empty string instead of panicking.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at the end of the source regardless of what `pred` says
    /// about `0x00`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte, or to EOF if there is none.
    ///
    /// The cursor is left *on* the newline.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance to the next `"` or `\n`, whichever comes first.
    ///
    /// Returns the byte found (the cursor is left on it), or `0` at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr2(b'"', b'\n', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    fn remaining(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.pos as usize..self.source_len as usize]
    }
}

#[cfg(test)]
mod tests;
