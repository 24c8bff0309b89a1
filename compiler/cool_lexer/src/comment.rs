//! Block comment sub-machine.
//!
//! `(* ... *)` comments nest to any depth. Inside a comment only `(*`, `*)`
//! and line terminators matter; lone `(`, `)` and `*` are skipped.

use cool_ir::{LexErrorKind, Token};
use tracing::{debug, trace};

use crate::scanner::{Mode, Scanner};

impl Scanner<'_> {
    /// Called after the opening `(*` has been consumed.
    pub(crate) fn enter_block_comment(&mut self) {
        self.comment_depth = 0;
        self.mode = Mode::InBlockComment;
        debug!(line = self.line, "entering block comment");
    }

    /// Skip comment text until the outermost comment closes (`None`) or
    /// input runs out (latching error).
    pub(crate) fn scan_block_comment(&mut self) -> Option<Token> {
        loop {
            match self.cursor.skip_to_comment_delim() {
                b'(' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'*' {
                        self.cursor.advance();
                        self.comment_depth += 1;
                        trace!(depth = self.comment_depth, "nested block comment");
                    }
                }
                b'*' => {
                    self.cursor.advance();
                    if self.cursor.current() == b')' {
                        self.cursor.advance();
                        if self.comment_depth == 0 {
                            self.mode = Mode::Initial;
                            debug!(line = self.line, "block comment closed");
                            return None;
                        }
                        self.comment_depth -= 1;
                    }
                }
                b')' => self.cursor.advance(),
                b'\n' | b'\r' => self.newline(),
                _ => {
                    self.token_line = self.line;
                    return Some(self.latch(LexErrorKind::UnterminatedComment));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
