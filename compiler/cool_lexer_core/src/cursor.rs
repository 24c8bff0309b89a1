//! Zero-cost cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the current byte equals the sentinel (`0x00`) and the position
//! has reached or exceeded the source length.
//!
//! # Interior Null Bytes
//!
//! Cool source may contain NUL characters. A null at `pos < source_len` is
//! content; a null at `pos >= source_len` is the sentinel (EOF).

/// First window size for [`find_first`]. Doubles on every miss.
const MIN_WINDOW: usize = 64;

/// Offset of the first byte matched by either search.
///
/// `memchr` runs to the end of its haystack when nothing matches, so the
/// haystack is scanned in windows that start small and double on each miss.
/// The secondary search is also cut off at the primary hit. A call therefore
/// reads O(distance to the hit) bytes, not O(remaining input).
fn find_first(
    haystack: &[u8],
    primary: impl Fn(&[u8]) -> Option<usize>,
    secondary: impl Fn(&[u8]) -> Option<usize>,
) -> Option<usize> {
    let mut start = 0;
    let mut window = MIN_WINDOW;
    while start < haystack.len() {
        let end = haystack.len().min(start.saturating_add(window));
        let chunk = &haystack[start..end];
        let hit = match primary(chunk) {
            Some(p) => Some(secondary(&chunk[..p]).unwrap_or(p)),
            None => secondary(chunk),
        };
        if let Some(off) = hit {
            return Some(start + off);
        }
        start = end;
        window = window.saturating_mul(2);
    }
    None
}

/// Horizontal whitespace: space, tab, vertical tab, form feed.
#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C)
}

/// Zero-cost cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], enabling cheap state snapshots.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: every byte from `source_len` to the end
/// is `0x00`, with at least two such bytes. This is guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 1 < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(
            buf.as_bytes()[source_len as usize] == 0,
            "sentinel byte must be 0x00"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at EOF. Interior null bytes also return `0x00`; use
    /// [`is_eof()`](Self::is_eof) to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe to call anywhere up to and including the sentinel.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.as_bytes()[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Panics
    ///
    /// Panics if `start..end` does not fall on character boundaries, which
    /// only happens if the caller split a multi-byte character.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel terminates the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance past horizontal whitespace (space, tab, vertical tab, form feed).
    #[inline]
    pub fn eat_blanks(&mut self) {
        self.eat_while(is_blank);
    }

    /// Consume one line terminator (`\n`, `\r`, or `\r\n`).
    ///
    /// Returns `false` and leaves the cursor alone if the current byte does
    /// not start a line terminator.
    #[inline]
    pub fn eat_newline(&mut self) -> bool {
        match self.current() {
            b'\n' => {
                self.advance();
                true
            }
            b'\r' => {
                self.advance();
                if self.current() == b'\n' {
                    self.advance();
                }
                true
            }
            _ => false,
        }
    }

    /// Advance to the next `\n` or `\r` byte, or to EOF.
    ///
    /// Used to skip line comment bodies. The terminator itself is left for
    /// the caller so line counting stays in one place.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_line_end(&mut self) {
        let remaining = self.remaining();
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past ordinary string content to the next interesting byte.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Interesting bytes for strings: `"`, `\`, `\n`, `\r`. Interior NULs are
    /// ordinary content here.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let found = find_first(
            self.remaining(),
            |hay| memchr::memchr3(b'"', b'\\', b'\n', hay),
            |hay| memchr::memchr(b'\r', hay),
        );

        if let Some(off) = found {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Advance past ordinary block comment content to the next interesting
    /// byte. Returns the byte found, or 0 for EOF.
    ///
    /// Interesting bytes for comments: `(`, `)`, `*`, `\n`, `\r`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_comment_delim(&mut self) -> u8 {
        let found = find_first(
            self.remaining(),
            |hay| memchr::memchr3(b'(', b')', b'*', hay),
            |hay| memchr::memchr2(b'\n', b'\r', hay),
        );

        if let Some(off) = found {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }

    /// Unscanned source bytes (no sentinel or padding).
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        let start = self.pos.min(self.source_len) as usize;
        &self.buf.as_bytes()[start..self.source_len as usize]
    }
}
