//! Per-category symbol tables.
//!
//! String constants, integer literal text and identifiers live in separate
//! interners, so a `Name` is only meaningful together with the
//! [`SymbolTable`] it was interned into.
//!
//! Resolving a handle against a different table is a caller bug: it returns
//! unrelated text, or panics when the handle's index is past the end of that
//! table. The payload view of a token (`TokenPayload::table()`) names the
//! right table for every handle the scanner produces.

use crate::{InternError, Name, StringInterner};

/// Category of interned text.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SymbolTable {
    /// Decoded string constant contents.
    Str,
    /// Raw integer literal digits.
    Int,
    /// Object and type identifiers.
    Ident,
}

/// The interning service handed to the scanner.
///
/// One [`StringInterner`] per [`SymbolTable`]. Shared by reference across
/// scanners so identifiers from different files intern to the same handles.
pub struct SymbolTables {
    strings: StringInterner,
    ints: StringInterner,
    idents: StringInterner,
}

/// Identifiers every Cool program can refer to without declaring them.
const PREDEFINED_IDENTS: &[&str] = &[
    // Basic classes
    "Object",
    "IO",
    "Int",
    "Bool",
    "String",
    "SELF_TYPE",
    "Main",
    // Object methods
    "abort",
    "type_name",
    "copy",
    // IO methods
    "out_string",
    "out_int",
    "in_string",
    "in_int",
    // String methods
    "length",
    "concat",
    "substr",
    // Well-known names
    "self",
    "main",
];

impl SymbolTables {
    /// Create tables with the predefined identifiers already interned.
    pub fn new() -> Self {
        let tables = Self {
            strings: StringInterner::new(),
            ints: StringInterner::new(),
            idents: StringInterner::new(),
        };
        for ident in PREDEFINED_IDENTS {
            tables.idents.intern(ident);
        }
        tables
    }

    /// The interner backing `table`.
    #[inline]
    pub fn table(&self, table: SymbolTable) -> &StringInterner {
        match table {
            SymbolTable::Str => &self.strings,
            SymbolTable::Int => &self.ints,
            SymbolTable::Ident => &self.idents,
        }
    }

    /// Intern `text` into `table`.
    #[inline]
    pub fn intern(&self, table: SymbolTable, text: &str) -> Name {
        self.table(table).intern(text)
    }

    /// Intern an owned buffer into `table` without copying it again.
    #[inline]
    pub fn intern_owned(&self, table: SymbolTable, text: String) -> Name {
        self.table(table).intern_owned(text)
    }

    /// Fallible variant of [`intern`](Self::intern).
    pub fn try_intern(&self, table: SymbolTable, text: &str) -> Result<Name, InternError> {
        self.table(table).try_intern(text)
    }

    /// Resolve a handle previously returned for `table`.
    ///
    /// # Panics
    ///
    /// May panic if `name` came from a different table (see the module docs).
    #[inline]
    pub fn lookup(&self, table: SymbolTable, name: Name) -> &'static str {
        self.table(table).lookup(name)
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::new()
    }
}
