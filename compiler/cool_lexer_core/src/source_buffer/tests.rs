use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_str(), "");
    assert!(buf.cursor().is_eof());
}

#[test]
fn content_round_trips() {
    let src = "class Main { };\n";
    let buf = SourceBuffer::new(src);
    assert_eq!(buf.as_str(), src);
    assert_eq!(buf.as_bytes(), src.as_bytes());
    assert_eq!(buf.len() as usize, src.len());
}

#[test]
fn padded_to_cache_line_with_sentinel() {
    for len in [0usize, 1, 62, 63, 64, 65, 127, 128] {
        let src = "a".repeat(len);
        let buf = SourceBuffer::new(&src);
        assert_eq!(buf.buf.len() % CACHE_LINE, 0, "len {len}");
        assert!(buf.buf.len() >= len + 2, "len {len}");
        assert!(buf.buf.as_bytes()[len..].iter().all(|&b| b == 0), "len {len}");
    }
}

#[test]
fn interior_nul_is_content() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"a\0b");
}

#[test]
fn multibyte_source() {
    let buf = SourceBuffer::new("λ→");
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_str(), "λ→");
}

#[test]
fn ordinary_source_is_not_truncated() {
    let buf = SourceBuffer::new("class Main {};");
    assert!(!buf.is_truncated());
    assert!(!SourceBuffer::new("").is_truncated());
}

#[test]
fn truncate_within_limit_unchanged() {
    assert_eq!(truncate_to("abc", 3), "abc");
    assert_eq!(truncate_to("abc", 10), "abc");
    assert_eq!(truncate_to("", 0), "");
}

#[test]
fn truncate_cuts_on_char_boundary() {
    assert_eq!(truncate_to("abcdef", 4), "abcd");
    // `λ` is two bytes; a cut through it drops the whole character.
    assert_eq!(truncate_to("aλb", 2), "a");
    assert_eq!(truncate_to("aλb", 3), "aλ");
    // `→` is three bytes.
    assert_eq!(truncate_to("→→", 5), "→");
}
