//! Main-mode dispatch and scanner state.
//!
//! `next_token()` loops over single rule applications until one of them
//! yields a token. In [`Mode::Initial`] each step matches one lexical unit
//! by maximal munch: the dispatch byte picks the candidate rules, and the
//! longest match wins (`<-` over `<`, `(*` over `(`, `--` over `-`,
//! `classify` over `class`). Equal-length ties go to the higher-priority
//! rule, so keywords and booleans beat identifiers.
//!
//! String constants and block comments run their own sub-machines (see
//! `string.rs` and `comment.rs`).

use cool_ir::{LexErrorKind, SymbolTable, SymbolTables, Token, TokenKind};
use cool_lexer_core::{Cursor, SourceBuffer};
use tracing::{debug, error, trace, warn};

use crate::config::ScannerConfig;
use crate::diagnostic::LexDiagnostic;
use crate::keywords;

/// Scanner mode. Exactly one is active at a time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Between tokens.
    Initial,
    /// Inside a string constant.
    InString,
    /// Inside a (possibly nested) block comment.
    InBlockComment,
}

/// Pull-driven scanner over one source unit.
///
/// All mutable state lives here; scanning several files means creating one
/// scanner per file, optionally sharing the same [`SymbolTables`].
pub struct Scanner<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) tables: &'a SymbolTables,
    filename: &'a str,
    pub(crate) config: ScannerConfig,
    pub(crate) mode: Mode,
    /// Current 1-based line. Bumped once per consumed line terminator.
    pub(crate) line: u32,
    /// Line the token under construction started on.
    pub(crate) token_line: u32,
    /// Decoded contents of the current string constant.
    pub(crate) string_buffer: String,
    /// Open block comments beyond the outermost one.
    pub(crate) comment_depth: u32,
    /// Set once a stream-ending error has been reported.
    eof_latched: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner with the default [`ScannerConfig`].
    ///
    /// Only the text held by `buf` is scanned: input over `u32::MAX` bytes
    /// was already cut by [`SourceBuffer::new`], which is logged here as a
    /// warning.
    pub fn new(buf: &'a SourceBuffer, filename: &'a str, tables: &'a SymbolTables) -> Self {
        Self::with_config(buf, filename, tables, ScannerConfig::default())
    }

    pub fn with_config(
        buf: &'a SourceBuffer,
        filename: &'a str,
        tables: &'a SymbolTables,
        config: ScannerConfig,
    ) -> Self {
        if buf.is_truncated() {
            warn!(
                file = filename,
                scanned = buf.len(),
                "source exceeds u32::MAX bytes; text past the cut is not scanned"
            );
        }
        Self {
            cursor: buf.cursor(),
            tables,
            filename,
            config,
            mode: Mode::Initial,
            line: 1,
            token_line: 1,
            string_buffer: String::new(),
            comment_depth: 0,
            eof_latched: false,
        }
    }

    /// Current line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Whether a stream-ending error has been reported.
    pub fn is_latched(&self) -> bool {
        self.eof_latched
    }

    /// Build a diagnostic for an error token, using this scanner's filename.
    pub fn diagnostic(&self, token: &Token) -> Option<LexDiagnostic> {
        token
            .error()
            .map(|kind| LexDiagnostic::new(self.filename, token.line, kind.clone()))
    }

    /// Produce the next token.
    ///
    /// Returns `Eof` once input is exhausted, and on every call after that.
    /// After a latching error only `Eof` is returned, even if input remains.
    pub fn next_token(&mut self) -> Token {
        if self.eof_latched {
            return self.eof();
        }
        let token = loop {
            let step = match self.mode {
                Mode::Initial => self.scan_initial(),
                Mode::InString => Some(self.scan_string()),
                Mode::InBlockComment => self.scan_block_comment(),
            };
            if let Some(token) = step {
                break token;
            }
        };
        trace!(line = token.line, kind = ?token.kind, "token");
        token
    }

    // ─── Shared helpers ─────────────────────────────────────────────────

    /// A token of `kind` starting on the current token line.
    #[inline]
    pub(crate) fn token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_line)
    }

    pub(crate) fn error(&self, kind: LexErrorKind) -> Token {
        self.token(TokenKind::Error(kind))
    }

    pub(crate) fn eof(&self) -> Token {
        Token::new(TokenKind::Eof, self.line)
    }

    /// Consume one line terminator and count it. The count saturates at
    /// `u32::MAX`.
    #[inline]
    pub(crate) fn newline(&mut self) {
        let consumed = self.cursor.eat_newline();
        debug_assert!(consumed, "newline() called off a line terminator");
        self.line = self.line.saturating_add(1);
    }

    /// Report `kind` and end the stream.
    pub(crate) fn latch(&mut self, kind: LexErrorKind) -> Token {
        debug!(file = self.filename, line = self.line, error = %kind, "latching end of input");
        self.eof_latched = true;
        self.error(kind)
    }

    // ─── Main mode ──────────────────────────────────────────────────────

    /// Apply one main-mode rule. Returns `None` for input that produces no
    /// token (whitespace, comments, entering a sub-mode).
    fn scan_initial(&mut self) -> Option<Token> {
        self.token_line = self.line;
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => Some(self.eof()),
            b' ' | b'\t' | 0x0B | 0x0C => {
                self.cursor.eat_blanks();
                None
            }
            b'\n' | b'\r' => {
                self.newline();
                None
            }
            b'"' => {
                self.enter_string();
                None
            }
            b'(' => self.left_paren(),
            b'*' => Some(self.star()),
            b'-' => self.minus_or_comment(),
            b'=' => Some(self.equal()),
            b'<' => Some(self.less()),
            b'+' => Some(self.single(TokenKind::Plus)),
            b'/' => Some(self.single(TokenKind::Slash)),
            b'.' => Some(self.single(TokenKind::Dot)),
            b'~' => Some(self.single(TokenKind::Tilde)),
            b',' => Some(self.single(TokenKind::Comma)),
            b';' => Some(self.single(TokenKind::Semicolon)),
            b':' => Some(self.single(TokenKind::Colon)),
            b')' => Some(self.single(TokenKind::RParen)),
            b'@' => Some(self.single(TokenKind::At)),
            b'{' => Some(self.single(TokenKind::LBrace)),
            b'}' => Some(self.single(TokenKind::RBrace)),
            b'0'..=b'9' => Some(self.integer(start)),
            b'a'..=b'z' | b'A'..=b'Z' => Some(self.identifier(start)),
            // Continuation bytes and bytes that never occur in UTF-8.
            0x80..=0xBF | 0xF8..=0xFF => self.unmatched_byte(start),
            _ => Some(self.unexpected_char(start)),
        }
    }

    /// Single-byte token: advance one byte and emit `kind`.
    fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token(kind)
    }

    fn left_paren(&mut self) -> Option<Token> {
        self.cursor.advance(); // consume '('
        if self.cursor.current() == b'*' {
            self.cursor.advance();
            self.enter_block_comment();
            None
        } else {
            Some(self.token(TokenKind::LParen))
        }
    }

    fn star(&mut self) -> Token {
        self.cursor.advance(); // consume '*'
        if self.cursor.current() == b')' {
            self.cursor.advance();
            self.error(LexErrorKind::MismatchedCommentClose)
        } else {
            self.token(TokenKind::Star)
        }
    }

    fn minus_or_comment(&mut self) -> Option<Token> {
        self.cursor.advance(); // consume '-'
        if self.cursor.current() == b'-' {
            // Line comment; the terminator is left for the newline rule.
            self.cursor.eat_until_line_end();
            None
        } else {
            Some(self.token(TokenKind::Minus))
        }
    }

    fn equal(&mut self) -> Token {
        self.cursor.advance(); // consume '='
        if self.cursor.current() == b'>' {
            self.cursor.advance();
            self.token(TokenKind::DArrow)
        } else {
            self.token(TokenKind::Eq)
        }
    }

    fn less(&mut self) -> Token {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                self.token(TokenKind::Le)
            }
            b'-' => {
                self.cursor.advance();
                self.token(TokenKind::Assign)
            }
            _ => self.token(TokenKind::Lt),
        }
    }

    /// Decimal digits, interned verbatim. No range check.
    fn integer(&mut self, start: u32) -> Token {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        let text = self.cursor.slice_from(start);
        let name = self.tables.intern(SymbolTable::Int, text);
        self.token(TokenKind::Int(name))
    }

    fn identifier(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);

        if let Some(kind) = keywords::lookup(text) {
            return self.token(kind);
        }
        if let Some(value) = keywords::boolean(text) {
            return self.token(TokenKind::Bool(value));
        }

        let name = self.tables.intern(SymbolTable::Ident, text);
        if text.as_bytes()[0].is_ascii_lowercase() {
            self.token(TokenKind::ObjectId(name))
        } else {
            self.token(TokenKind::TypeId(name))
        }
    }

    /// Any other single character, reported with its text.
    fn unexpected_char(&mut self, start: u32) -> Token {
        self.cursor.advance_char();
        let text = self.cursor.slice_from(start).to_owned();
        self.error(LexErrorKind::UnexpectedCharacter { text })
    }

    /// A byte that cannot begin a character. Source text is valid UTF-8 and
    /// every rule consumes whole characters, so reaching this is a scanner
    /// bug. Logged and skipped; never surfaced as a token.
    fn unmatched_byte(&mut self, start: u32) -> Option<Token> {
        let byte = self.cursor.current();
        error!(
            file = self.filename,
            line = self.line,
            pos = start,
            byte,
            "scanner reached a byte no rule can start"
        );
        debug_assert!(
            false,
            "byte {byte:#04x} at offset {start} does not start a character"
        );
        self.cursor.advance();
        None
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    /// Yields tokens up to, not including, the first `Eof`.
    fn next(&mut self) -> Option<Token> {
        let tok = self.next_token();
        if tok.is_eof() {
            None
        } else {
            Some(tok)
        }
    }
}

/// Returns `true` if `b` may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
