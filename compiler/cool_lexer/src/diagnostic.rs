//! User-facing rendering of lexical errors.

use cool_ir::LexErrorKind;

/// A lexical error located in a file.
///
/// Renders as `"<file>", line <n>: <message>`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("\"{file}\", line {line}: {kind}")]
pub struct LexDiagnostic {
    pub file: String,
    pub line: u32,
    pub kind: LexErrorKind,
}

impl LexDiagnostic {
    pub fn new(file: impl Into<String>, line: u32, kind: LexErrorKind) -> Self {
        Self {
            file: file.into(),
            line,
            kind,
        }
    }
}
