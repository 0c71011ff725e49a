//! Code-point predicates shared by the repair parser.

#[inline]
pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

#[inline]
pub(crate) fn is_whitespace_except_newline(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

/// Unicode space look-alikes that get normalized to an ASCII space.
#[inline]
pub(crate) fn is_special_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

#[inline]
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub(crate) fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Characters that terminate numbers and keywords.
#[inline]
pub(crate) fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        ',' | ':' | '[' | ']' | '/' | '{' | '}' | '(' | ')' | '\n' | '+'
    )
}

/// The stricter delimiter set used while recovering a string with a
/// missing end quote.
#[inline]
pub(crate) fn is_unquoted_string_delimiter(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '/' | '{' | '}' | '\n' | '+')
}

#[inline]
pub(crate) fn is_start_of_value(c: char) -> bool {
    is_quote(c) || matches!(c, '[' | '{' | '-' | '_') || c.is_ascii_alphanumeric()
}

/// The control characters that have a short JSON escape.
#[inline]
pub(crate) fn is_control_character(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | '\u{0008}' | '\u{000C}')
}

#[inline]
pub(crate) fn is_valid_string_character(c: char) -> bool {
    c >= '\u{0020}'
}

#[inline]
pub(crate) fn is_function_name_char_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

#[inline]
pub(crate) fn is_function_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[inline]
pub(crate) fn is_quote(c: char) -> bool {
    is_double_quote_like(c) || is_single_quote_like(c)
}

#[inline]
pub(crate) fn is_double_quote(c: char) -> bool {
    c == '"'
}

#[inline]
pub(crate) fn is_double_quote_like(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

#[inline]
pub(crate) fn is_single_quote(c: char) -> bool {
    c == '\''
}

#[inline]
pub(crate) fn is_single_quote_like(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{0060}' | '\u{00B4}')
}

/// Characters allowed to extend a bare URL.
#[inline]
pub(crate) fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '_' | '-'
                | '.'
                | '~'
                | ':'
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '@'
                | '!'
                | '$'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | ';'
                | '='
                | '%'
        )
}
