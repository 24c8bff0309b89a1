//! Token types produced by the Cool scanner.
//!
//! A token is its kind (with any payload folded into the variant) plus the
//! source line on which it began. Tokens are immutable once built.

use super::{LexErrorKind, Name, SymbolTable};
use std::fmt;

/// A token with the line it started on.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based source line where the token's first character appeared.
    pub line: u32,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token { kind, line }
    }

    /// The payload carried by this token, if any.
    #[inline]
    pub fn payload(&self) -> Option<TokenPayload> {
        self.kind.payload()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    /// The error kind for error tokens.
    pub fn error(&self) -> Option<&LexErrorKind> {
        match &self.kind {
            TokenKind::Error(kind) => Some(kind),
            _ => None,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ line {}", self.kind, self.line)
    }
}

/// Token kinds for Cool.
///
/// Literal and identifier variants hold a [`Name`] from the matching
/// [`SymbolTable`]; see [`TokenPayload`].
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Keywords (matched case-insensitively)
    Case,
    Class,
    Else,
    Esac,
    Fi,
    If,
    In,
    Inherits,
    IsVoid,
    Let,
    Loop,
    New,
    Not,
    Of,
    Pool,
    Then,
    While,

    // Multi-character operators
    DArrow, // =>
    Le,     // <=
    Assign, // <-

    // Single-character operators and punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Eq,
    Lt,
    Dot,
    Tilde,
    Comma,
    Semicolon,
    Colon,
    LParen,
    RParen,
    At,
    LBrace,
    RBrace,

    /// String constant (decoded contents, `SymbolTable::Str`)
    Str(Name),
    /// Integer literal (raw digit text, `SymbolTable::Int`)
    Int(Name),
    /// `true` / `false` in any letter case
    Bool(bool),
    /// Identifier starting with a lowercase letter (`SymbolTable::Ident`)
    ObjectId(Name),
    /// Identifier starting with an uppercase letter (`SymbolTable::Ident`)
    TypeId(Name),

    Error(LexErrorKind),
    Eof,
}

/// The optional payload view of a [`TokenKind`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenPayload {
    Str(Name),
    Int(Name),
    Ident(Name),
    Bool(bool),
}

impl TokenPayload {
    /// The symbol table a handle payload was interned into.
    pub fn table(self) -> Option<SymbolTable> {
        match self {
            TokenPayload::Str(_) => Some(SymbolTable::Str),
            TokenPayload::Int(_) => Some(SymbolTable::Int),
            TokenPayload::Ident(_) => Some(SymbolTable::Ident),
            TokenPayload::Bool(_) => None,
        }
    }
}

impl TokenKind {
    /// Keyword kinds, in table order.
    pub const KEYWORDS: [TokenKind; 17] = [
        TokenKind::Case,
        TokenKind::Class,
        TokenKind::Else,
        TokenKind::Esac,
        TokenKind::Fi,
        TokenKind::If,
        TokenKind::In,
        TokenKind::Inherits,
        TokenKind::IsVoid,
        TokenKind::Let,
        TokenKind::Loop,
        TokenKind::New,
        TokenKind::Not,
        TokenKind::Of,
        TokenKind::Pool,
        TokenKind::Then,
        TokenKind::While,
    ];

    pub fn payload(&self) -> Option<TokenPayload> {
        match *self {
            TokenKind::Str(name) => Some(TokenPayload::Str(name)),
            TokenKind::Int(name) => Some(TokenPayload::Int(name)),
            TokenKind::ObjectId(name) | TokenKind::TypeId(name) => Some(TokenPayload::Ident(name)),
            TokenKind::Bool(value) => Some(TokenPayload::Bool(value)),
            _ => None,
        }
    }

    pub fn is_keyword(&self) -> bool {
        Self::KEYWORDS.contains(self)
    }

    /// Classic upper-case name of the kind, as used in token listings.
    ///
    /// Single-character tokens are shown quoted, e.g. `'+'`.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Case => "CASE",
            TokenKind::Class => "CLASS",
            TokenKind::Else => "ELSE",
            TokenKind::Esac => "ESAC",
            TokenKind::Fi => "FI",
            TokenKind::If => "IF",
            TokenKind::In => "IN",
            TokenKind::Inherits => "INHERITS",
            TokenKind::IsVoid => "ISVOID",
            TokenKind::Let => "LET",
            TokenKind::Loop => "LOOP",
            TokenKind::New => "NEW",
            TokenKind::Not => "NOT",
            TokenKind::Of => "OF",
            TokenKind::Pool => "POOL",
            TokenKind::Then => "THEN",
            TokenKind::While => "WHILE",
            TokenKind::DArrow => "DARROW",
            TokenKind::Le => "LE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Eq => "'='",
            TokenKind::Lt => "'<'",
            TokenKind::Dot => "'.'",
            TokenKind::Tilde => "'~'",
            TokenKind::Comma => "','",
            TokenKind::Semicolon => "';'",
            TokenKind::Colon => "':'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::At => "'@'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Str(_) => "STR_CONST",
            TokenKind::Int(_) => "INT_CONST",
            TokenKind::Bool(_) => "BOOL_CONST",
            TokenKind::ObjectId(_) => "OBJECTID",
            TokenKind::TypeId(_) => "TYPEID",
            TokenKind::Error(_) => "ERROR",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Str(name) => write!(f, "Str({name:?})"),
            TokenKind::Int(name) => write!(f, "Int({name:?})"),
            TokenKind::Bool(value) => write!(f, "Bool({value})"),
            TokenKind::ObjectId(name) => write!(f, "ObjectId({name:?})"),
            TokenKind::TypeId(name) => write!(f, "TypeId({name:?})"),
            TokenKind::Error(kind) => write!(f, "Error({kind:?})"),
            _ => write!(f, "{}", self.display_name()),
        }
    }
}
