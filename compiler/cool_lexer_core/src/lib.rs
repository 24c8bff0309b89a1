//! Byte-level scanning primitives for Cool source text.
//!
//! - [`SourceBuffer`]: owns the source with a `0x00` sentinel and padding
//! - [`Cursor`]: `Copy` read head over a buffer with memchr-backed skips
//!
//! This crate knows nothing about tokens; the scanner in `cool_lexer`
//! drives a cursor and decides what the bytes mean.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
