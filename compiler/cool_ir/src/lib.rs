//! Cool IR - value types shared by the scanner and its consumers.
//!
//! This crate contains:
//! - Names for interned text
//! - The sharded string interner and the per-category symbol tables
//! - Tokens, token kinds and lexical error kinds
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: literal and identifier text becomes `Name(u32)`
//! - **Errors Are Values**: lexical errors travel inside tokens, never as panics

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod lex_error;
mod name;
mod symbols;
mod token;

pub use interner::{InternError, StringInterner, StringLookup};
pub use lex_error::LexErrorKind;
pub use name::Name;
pub use symbols::{SymbolTable, SymbolTables};
pub use token::{Token, TokenKind, TokenPayload};

static_assert_size!(Name, 4);
