use super::*;
use crate::{tokenize, LexErrorKind};
use pretty_assertions::assert_eq;

fn listing(source: &str) -> String {
    let tables = SymbolTables::new();
    let tokens = tokenize(source, "test.cl", &tables);
    dump_tokens("test.cl", &tokens, &tables)
}

fn escaped(text: &str) -> String {
    let mut out = String::new();
    let _ = write_escaped(&mut out, text);
    out
}

#[test]
fn program_listing() {
    let source = "class Main inherits IO {\n  x : Int <- 42;\n  s : String <- \"a\\tb\";\n  b : Bool <- TRUE;\n};\n#";
    let expected = r##"#name "test.cl"
#1 CLASS
#1 TYPEID Main
#1 INHERITS
#1 TYPEID IO
#1 '{'
#2 OBJECTID x
#2 ':'
#2 TYPEID Int
#2 ASSIGN
#2 INT_CONST 42
#2 ';'
#3 OBJECTID s
#3 ':'
#3 TYPEID String
#3 ASSIGN
#3 STR_CONST "a\tb"
#3 ';'
#4 OBJECTID b
#4 ':'
#4 TYPEID Bool
#4 ASSIGN
#4 BOOL_CONST true
#4 ';'
#5 '}'
#5 ';'
#6 ERROR "#"
"##;
    assert_eq!(listing(source), expected);
}

#[test]
fn empty_source_lists_only_header() {
    assert_eq!(listing(""), "#name \"test.cl\"\n");
}

#[test]
fn latched_error_ends_listing() {
    let expected = "#name \"test.cl\"\n#1 OBJECTID x\n#2 ERROR \"EOF in block comment\"\n";
    assert_eq!(listing("x\n(* open"), expected);
}

#[test]
fn single_token_line() {
    let tables = SymbolTables::new();
    let tok = Token::new(
        TokenKind::Error(LexErrorKind::UnterminatedString),
        7,
    );
    assert_eq!(
        TokenDump::new(&tok, &tables).to_string(),
        "#7 ERROR \"unterminated string constant\""
    );
    let tok = Token::new(TokenKind::DArrow, 2);
    assert_eq!(TokenDump::new(&tok, &tables).to_string(), "#2 DARROW");
}

#[test]
fn escapes_named_controls() {
    assert_eq!(escaped("a\nb\tc\u{8}d\u{c}"), r#""a\nb\tc\bd\f""#);
    assert_eq!(escaped("q\"\\"), r#""q\"\\""#);
}

#[test]
fn escapes_other_bytes_as_octal() {
    assert_eq!(escaped("\u{1}\r\u{7f}"), r#""\001\015\177""#);
    assert_eq!(escaped("λ"), r#""\316\273""#);
}
