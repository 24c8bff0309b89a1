//! Lexical error kinds carried by error tokens.
//!
//! Every lexical error is reported in-band as `TokenKind::Error(kind)`.
//! The `Display` text is the human-readable message shown to users.

/// What kind of lexical error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// `*)` with no open block comment.
    #[error("mismatched close comment")]
    MismatchedCommentClose,
    /// End of input inside a block comment.
    #[error("EOF in block comment")]
    UnterminatedComment,
    /// String constant reached the maximum length.
    #[error("string constant too long")]
    StringTooLong,
    /// String constant holds a NUL character, typed or escaped.
    #[error("string contains null character")]
    NullInString,
    /// Raw line terminator before the closing quote.
    #[error("unterminated string constant")]
    UnterminatedString,
    /// A character no lexical rule accepts. The message is the character itself.
    #[error("{text}")]
    UnexpectedCharacter { text: String },
    /// End of input inside a string constant.
    #[error("EOF in string constant")]
    EofInString,
}

impl LexErrorKind {
    /// Whether reporting this error ends the token stream.
    ///
    /// After a latching error the scanner answers every request with `Eof`.
    pub fn is_latching(&self) -> bool {
        matches!(
            self,
            LexErrorKind::UnterminatedComment | LexErrorKind::NullInString | LexErrorKind::EofInString
        )
    }
}
