//! String constant sub-machine.
//!
//! Entered on `"`. Ordinary runs are copied into the string buffer; escapes
//! are decoded as they are seen. The literal ends at the closing quote, at a
//! raw line terminator (error, scanning resumes on the next line), or at
//! end of input (latching error).

use cool_ir::{LexErrorKind, SymbolTable, Token, TokenKind};
use tracing::debug;

use crate::scanner::{Mode, Scanner};

impl Scanner<'_> {
    /// Consume the opening quote and start a fresh literal.
    pub(crate) fn enter_string(&mut self) {
        self.cursor.advance(); // consume '"'
        self.string_buffer.clear();
        self.mode = Mode::InString;
        debug!(line = self.line, "entering string constant");
    }

    /// Run the string sub-machine until it yields a token.
    pub(crate) fn scan_string(&mut self) -> Token {
        loop {
            let run_start = self.cursor.pos();
            let delim = self.cursor.skip_to_string_delim();
            self.string_buffer
                .push_str(self.cursor.slice_from(run_start));

            match delim {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.close_string();
                }
                b'\\' => self.escape(),
                b'\n' | b'\r' => {
                    self.newline();
                    self.mode = Mode::Initial;
                    debug!(line = self.line, "string constant cut off by newline");
                    return self.error(LexErrorKind::UnterminatedString);
                }
                _ => return self.string_eof(),
            }
        }
    }

    /// Decode one backslash escape into the buffer.
    ///
    /// `\b \n \f \t` map to their control characters, `\` before a line
    /// terminator continues the literal on the next line, and any other
    /// escaped character is kept as itself.
    fn escape(&mut self) {
        self.cursor.advance(); // consume '\'
        if self.cursor.is_eof() {
            return;
        }
        match self.cursor.current() {
            b'\n' | b'\r' => {
                self.newline();
                self.string_buffer.push('\n');
            }
            b'b' => self.push_escaped('\u{8}'),
            b'n' => self.push_escaped('\n'),
            b'f' => self.push_escaped('\u{c}'),
            b't' => self.push_escaped('\t'),
            _ => {
                let start = self.cursor.pos();
                self.cursor.advance_char();
                self.string_buffer
                    .push_str(self.cursor.slice_from(start));
            }
        }
    }

    #[inline]
    fn push_escaped(&mut self, c: char) {
        self.cursor.advance();
        self.string_buffer.push(c);
    }

    /// Closing quote seen: validate and intern the literal.
    fn close_string(&mut self) -> Token {
        self.mode = Mode::Initial;
        if self.string_buffer.len() >= self.config.max_string_len {
            return self.error(LexErrorKind::StringTooLong);
        }
        if self.string_buffer.contains('\0') {
            return self.latch(LexErrorKind::NullInString);
        }
        let name = self.tables.intern(SymbolTable::Str, &self.string_buffer);
        self.token(TokenKind::Str(name))
    }

    /// End of input before the closing quote.
    fn string_eof(&mut self) -> Token {
        self.token_line = self.line;
        let kind = if self.string_buffer.contains('\0') {
            LexErrorKind::NullInString
        } else {
            LexErrorKind::EofInString
        };
        self.latch(kind)
    }
}
