//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees `0x00` sentinel bytes after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also leaves safe padding for [`Cursor::peek()`](crate::Cursor::peek).
//!
//! NUL is a legal character inside Cool source (the scanner reports it where
//! it matters), so an interior `0x00` is told apart from the sentinel by
//! position, not by value.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00, padding_zeros...]
///  ^                ^           ^
///  0                |           rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The padding is made of `'\0'` characters, so the whole buffer stays a
/// valid `str` and slicing it never needs `unsafe`.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source..., '\0' sentinel, '\0' padding...]`.
    buf: String,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Whether `new` had to cut the input to fit `u32` offsets.
    truncated: bool,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// # File Size
    ///
    /// Offsets are `u32`. Sources larger than `u32::MAX` bytes are cut to
    /// the longest prefix of whole characters that fits, and
    /// [`is_truncated()`](Self::is_truncated) reports it. Text past the cut is
    /// never scanned.
    pub fn new(source: &str) -> Self {
        let original_len = source.len();
        let source = truncate_to(source, u32::MAX as usize);
        let source_len = source.len();
        let truncated = source_len < original_len;

        // Round up to the next 64-byte boundary, keeping at least two
        // sentinel bytes so `peek()` at the last source byte stays in bounds.
        let padded_len = (source_len + 2 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = String::with_capacity(padded_len);
        buf.push_str(source);
        buf.extend(std::iter::repeat('\0').take(padded_len - source_len));

        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncate_to bounds the source length to u32::MAX"
        )]
        let source_len = source_len as u32;

        Self {
            buf,
            source_len,
            truncated,
        }
    }

    /// Returns the source text (without sentinel or padding).
    pub fn as_str(&self) -> &str {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the input was longer than `u32::MAX` bytes and was
    /// cut.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Cut `source` to at most `limit` bytes on a character boundary.
fn truncate_to(source: &str, limit: usize) -> &str {
    if source.len() <= limit {
        return source;
    }
    let mut end = limit;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    &source[..end]
}

#[cfg(test)]
mod tests;
