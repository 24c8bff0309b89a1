use crate::{tokenize, LexErrorKind, Mode, Scanner, SourceBuffer, SymbolTable, SymbolTables, Token, TokenKind};
use pretty_assertions::assert_eq;

fn scan(source: &str, tables: &SymbolTables) -> Vec<(TokenKind, u32)> {
    tokenize(source, "test.cl", tables)
        .into_iter()
        .map(|t| (t.kind, t.line))
        .collect()
}

fn object_id(tables: &SymbolTables, text: &str) -> TokenKind {
    TokenKind::ObjectId(tables.intern(SymbolTable::Ident, text))
}

const UNTERMINATED: TokenKind = TokenKind::Error(LexErrorKind::UnterminatedComment);

// ─── Nesting ────────────────────────────────────────────────────────────

#[test]
fn nested_comment_produces_nothing() {
    let tables = SymbolTables::new();
    assert_eq!(scan("(* a (* b *) c *)", &tables), vec![(TokenKind::Eof, 1)]);
}

#[test]
fn deep_nesting() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* (* (* *) *) *) x", &tables),
        vec![(object_id(&tables, "x"), 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn extra_close_after_comment_is_mismatched() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* a *) *)", &tables),
        vec![
            (TokenKind::Error(LexErrorKind::MismatchedCommentClose), 1),
            (TokenKind::Eof, 1),
        ]
    );
}

#[test]
fn token_right_after_close() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* c *)class", &tables),
        vec![(TokenKind::Class, 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn empty_comment() {
    let tables = SymbolTables::new();
    assert_eq!(scan("(**)", &tables), vec![(TokenKind::Eof, 1)]);
}

// ─── Lone Delimiters ────────────────────────────────────────────────────

#[test]
fn lone_parens_and_stars_are_skipped() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* ( ) * a*b (x) ** *) y", &tables),
        vec![(object_id(&tables, "y"), 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn double_star_closes() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* **) z", &tables),
        vec![(object_id(&tables, "z"), 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn paren_star_paren_opens_but_does_not_close() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(*)", &tables),
        vec![(UNTERMINATED, 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn other_comment_forms_are_text() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* -- \" *) w", &tables),
        vec![(object_id(&tables, "w"), 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn block_open_inside_line_comment_is_ignored() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("-- (*\nx", &tables),
        vec![(object_id(&tables, "x"), 2), (TokenKind::Eof, 2)]
    );
}

// ─── Lines ──────────────────────────────────────────────────────────────

#[test]
fn line_terminators_counted_inside_comment() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(*\n\r\n\r*)x", &tables),
        vec![(object_id(&tables, "x"), 4), (TokenKind::Eof, 4)]
    );
}

#[test]
fn unterminated_reports_line_at_eof() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(*\n\n", &tables),
        vec![(UNTERMINATED, 3), (TokenKind::Eof, 3)]
    );
}

// ─── End of Input ───────────────────────────────────────────────────────

#[test]
fn unclosed_comment() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* unclosed", &tables),
        vec![(UNTERMINATED, 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn unclosed_nested_comment() {
    let tables = SymbolTables::new();
    assert_eq!(
        scan("(* (* *)", &tables),
        vec![(UNTERMINATED, 1), (TokenKind::Eof, 1)]
    );
}

#[test]
fn unterminated_comment_reported_once() {
    let tables = SymbolTables::new();
    let buf = SourceBuffer::new("x (* never closed");
    let mut scanner = Scanner::new(&buf, "test.cl", &tables);
    assert_eq!(scanner.next_token().kind, object_id(&tables, "x"));
    assert_eq!(scanner.next_token(), Token::new(UNTERMINATED, 1));
    assert!(scanner.is_latched());
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Eof, 1));
    }
}

#[test]
fn mode_returns_to_initial_after_close() {
    let tables = SymbolTables::new();
    let buf = SourceBuffer::new("(* a *) b");
    let mut scanner = Scanner::new(&buf, "test.cl", &tables);
    assert_eq!(scanner.next_token().kind, object_id(&tables, "b"));
    assert_eq!(scanner.mode(), Mode::Initial);
    assert_eq!(scanner.comment_depth, 0);
}
