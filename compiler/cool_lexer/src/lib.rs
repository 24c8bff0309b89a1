//! Scanner for the Cool teaching language.
//!
//! Converts source text into [`Token`]s one at a time:
//!
//! ```text
//! source → SourceBuffer → Cursor → Scanner::next_token() → Token
//! ```
//!
//! The scanner is a pull-driven state machine with three modes (main
//! dispatch, string constant, block comment). Literal and identifier text is
//! interned through [`SymbolTables`]. Lexical errors come back as
//! `TokenKind::Error` tokens; a few of them end the stream, after which only
//! `Eof` is returned.

mod comment;
mod config;
mod diagnostic;
pub mod dump;
mod keywords;
mod scanner;
mod string;

pub use config::{ScannerConfig, MAX_STR_CONST};
pub use cool_ir::{LexErrorKind, Name, SymbolTable, SymbolTables, Token, TokenKind, TokenPayload};
pub use cool_lexer_core::SourceBuffer;
pub use diagnostic::LexDiagnostic;
pub use scanner::{Mode, Scanner};

/// Scan `source` to completion.
///
/// Returns every token in order, ending with exactly one `Eof` token.
/// Input over `u32::MAX` bytes is cut on a character boundary first (see
/// [`SourceBuffer::new`]); tokens past the cut are not produced.
pub fn tokenize(source: &str, filename: &str, tables: &SymbolTables) -> Vec<Token> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(&buf, filename, tables);
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        let done = tok.is_eof();
        tokens.push(tok);
        if done {
            break;
        }
    }
    tokens
}
