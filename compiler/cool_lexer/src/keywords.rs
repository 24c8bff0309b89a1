//! Keyword and boolean resolution.
//!
//! Identifiers are scanned first, then looked up here. All keywords and the
//! boolean literals match in any letter case: the identifier is ASCII
//! case-folded into a small stack buffer and compared against a
//! length-bucketed table. Anything longer than the longest keyword is
//! rejected before folding.

use cool_ir::TokenKind;

/// Length of the longest keyword (`inherits`).
const MAX_KEYWORD_LEN: usize = 8;

/// Look up a keyword, ignoring letter case.
///
/// Returns `None` for ordinary identifiers, including ones that merely start
/// with a keyword (`classify`, `iffy`).
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-8 chars
    if !(2..=MAX_KEYWORD_LEN).contains(&len) {
        return None;
    }

    let mut buf = [0u8; MAX_KEYWORD_LEN];
    let folded = &mut buf[..len];
    for (dst, src) in folded.iter_mut().zip(bytes) {
        *dst = src.to_ascii_lowercase();
    }

    match len {
        2 => match &*folded {
            b"fi" => Some(TokenKind::Fi),
            b"if" => Some(TokenKind::If),
            b"in" => Some(TokenKind::In),
            b"of" => Some(TokenKind::Of),
            _ => None,
        },
        3 => match &*folded {
            b"let" => Some(TokenKind::Let),
            b"new" => Some(TokenKind::New),
            b"not" => Some(TokenKind::Not),
            _ => None,
        },
        4 => match &*folded {
            b"case" => Some(TokenKind::Case),
            b"else" => Some(TokenKind::Else),
            b"esac" => Some(TokenKind::Esac),
            b"loop" => Some(TokenKind::Loop),
            b"pool" => Some(TokenKind::Pool),
            b"then" => Some(TokenKind::Then),
            _ => None,
        },
        5 => match &*folded {
            b"class" => Some(TokenKind::Class),
            b"while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match &*folded {
            b"isvoid" => Some(TokenKind::IsVoid),
            _ => None,
        },
        8 => match &*folded {
            b"inherits" => Some(TokenKind::Inherits),
            _ => None,
        },
        _ => None,
    }
}

/// Recognize `true` / `false` in any letter case.
pub(crate) fn boolean(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
