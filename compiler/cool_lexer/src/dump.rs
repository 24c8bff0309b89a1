//! Classic token listing.
//!
//! ```text
//! #name "hello.cl"
//! #1 CLASS
//! #1 TYPEID Main
//! #1 '{'
//! #2 STR_CONST "hi\n"
//! ```
//!
//! String payloads and error messages are printed quoted, with `\n \t \b \f`
//! escapes, `\\` and `\"`, and any other non-printable byte as a three-digit
//! octal escape. The `Eof` token is not listed.

use std::fmt::{self, Write};

use cool_ir::{SymbolTable, SymbolTables, Token, TokenKind};

/// Display adapter printing one token as a listing line (no newline).
pub struct TokenDump<'a> {
    token: &'a Token,
    tables: &'a SymbolTables,
}

impl<'a> TokenDump<'a> {
    pub fn new(token: &'a Token, tables: &'a SymbolTables) -> Self {
        Self { token, tables }
    }
}

impl fmt::Display for TokenDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = &self.token.kind;
        write!(f, "#{} {}", self.token.line, kind.display_name())?;
        match kind {
            TokenKind::Str(name) => {
                f.write_char(' ')?;
                write_escaped(f, self.tables.lookup(SymbolTable::Str, *name))
            }
            TokenKind::Int(name) => write!(f, " {}", self.tables.lookup(SymbolTable::Int, *name)),
            TokenKind::ObjectId(name) | TokenKind::TypeId(name) => {
                write!(f, " {}", self.tables.lookup(SymbolTable::Ident, *name))
            }
            TokenKind::Bool(value) => write!(f, " {value}"),
            TokenKind::Error(err) => {
                f.write_char(' ')?;
                write_escaped(f, &err.to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Full listing for a token stream, one line per token, ending at `Eof`.
pub fn dump_tokens(filename: &str, tokens: &[Token], tables: &SymbolTables) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "#name \"{filename}\"");
    for token in tokens.iter().take_while(|t| !t.is_eof()) {
        let _ = writeln!(out, "{}", TokenDump::new(token, tables));
    }
    out
}

/// Write `text` as a quoted, escaped string literal.
fn write_escaped(out: &mut impl Write, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for &byte in text.as_bytes() {
        match byte {
            b'\\' => out.write_str("\\\\")?,
            b'"' => out.write_str("\\\"")?,
            b'\n' => out.write_str("\\n")?,
            b'\t' => out.write_str("\\t")?,
            0x08 => out.write_str("\\b")?,
            0x0C => out.write_str("\\f")?,
            0x20..=0x7E => out.write_char(char::from(byte))?,
            _ => write!(out, "\\{byte:03o}")?,
        }
    }
    out.write_char('"')
}

#[cfg(test)]
mod tests;
