//! Code point decoding and character classes.
//!
//! Every read from the source goes through [`decode_at`], which reports both
//! the scalar value and the number of bytes it occupies. Byte offsets stay
//! correct on non-ASCII input because nothing else indexes the buffer.

/// Decodes the code point starting at byte `offset`.
///
/// Returns `(scalar, width_in_bytes)`, or `None` when `offset` is at or past
/// the end of `source`.
///
/// ```
/// use chi_lex::unicode::decode_at;
///
/// assert_eq!(decode_at("aé", 0), Some(('a', 1)));
/// assert_eq!(decode_at("aé", 1), Some(('é', 2)));
/// assert_eq!(decode_at("aé", 3), None);
/// ```
#[inline]
pub fn decode_at(source: &str, offset: usize) -> Option<(char, usize)> {
    let bytes = source.as_bytes();
    let first = *bytes.get(offset)?;

    // Fast path for ASCII
    if first < 0x80 {
        return Some((first as char, 1));
    }

    source
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .map(|c| (c, c.len_utf8()))
}

/// Whitespace separating tokens: space, tab, newline, carriage return.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// A letter (any script) or underscore.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// A letter, digit or underscore.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// An ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
