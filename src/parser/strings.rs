//! The backtracking string parser.
//!
//! The only production that retries: it resolves ambiguous quote
//! placement by reparsing the same span under a different termination
//! policy. `stop_at_delimiter` ends the string at the next
//! unquoted-string delimiter; `stop_at_index` ends it at a position
//! scheduled by an earlier pass. At most three passes happen per string.

use crate::buffer;
use crate::classify::{
    is_control_character, is_delimiter, is_digit, is_double_quote, is_double_quote_like, is_hex,
    is_quote, is_single_quote, is_single_quote_like, is_unquoted_string_delimiter, is_url_char,
    is_valid_string_character,
};

use super::{starts_like_url, ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Parse a string enclosed by any quote variant into a double-quoted
    /// JSON string, repairing the start/end quotes, escape sequences and
    /// embedded delimiters along the way.
    pub(super) fn parse_string(
        &mut self,
        stop_at_delimiter: bool,
        stop_at_index: Option<usize>,
    ) -> ParseResult<bool> {
        let mut skip_escape_chars = false;
        if self.peek() == Some('\\') {
            // a spurious escape before the opening quote; drop it and
            // keep dropping the escape the writer put before every quote
            self.advance();
            skip_escape_chars = true;
        }

        let start_quote = match self.peek() {
            Some(c) if is_quote(c) => c,
            _ => return Ok(false),
        };
        // the end quote must come from the same equivalence class
        let is_end_quote: fn(char) -> bool = if is_double_quote(start_quote) {
            is_double_quote
        } else if is_single_quote(start_quote) {
            is_single_quote
        } else if is_single_quote_like(start_quote) {
            is_single_quote_like
        } else {
            is_double_quote_like
        };

        let i_before = self.pos;
        let o_before = self.out.len();

        let mut str_buf = String::from("\"");
        self.advance();

        loop {
            let ch = match self.peek() {
                Some(c) => c,
                None => {
                    // end of text: the end quote is missing
                    let i_prev = self.prev_non_whitespace_index(self.text.len());
                    if !stop_at_delimiter && self.char_at(i_prev).is_some_and(is_delimiter) {
                        // the text ends in a delimiter, like ["hello] —
                        // the quote belongs before it; reparse and stop
                        // at the first delimiter
                        self.pos = i_before;
                        self.out.truncate(o_before);
                        return self.parse_string(true, None);
                    }

                    let closed = buffer::insert_before_last_whitespace(&str_buf, "\"");
                    self.out.push_str(&closed);
                    return Ok(true);
                }
            };

            if stop_at_index == Some(self.pos) {
                // the stop scheduled by the previous pass
                let closed = buffer::insert_before_last_whitespace(&str_buf, "\"");
                self.out.push_str(&closed);
                return Ok(true);
            }

            if is_end_quote(ch) {
                // candidate end quote; look around to verify it
                let i_quote = self.pos;
                let o_quote = str_buf.len();
                str_buf.push('"');
                self.advance();
                self.out.push_str(&str_buf);

                self.parse_whitespace_and_skip_comments(false);

                if stop_at_delimiter
                    || self.pos >= self.text.len()
                    || self
                        .peek()
                        .is_some_and(|c| is_delimiter(c) || is_quote(c) || is_digit(c))
                {
                    // followed by the end of the text, a delimiter or a
                    // next value: a genuine end quote
                    self.parse_concatenated_string()?;
                    return Ok(true);
                }

                let i_prev_char = self.prev_non_whitespace_index(i_quote);
                let prev_char = self.char_at(i_prev_char);

                if prev_char == Some(',') {
                    // a comma right before the quote, like
                    // {"a":"b,c,"d":"e"} — this quote opens the next
                    // string; reparse, ending just past that comma
                    self.pos = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(false, Some(i_prev_char + 1));
                }

                if prev_char.is_some_and(is_delimiter) {
                    // preceded but not followed by a delimiter: the real
                    // end quote is missing somewhere before this one
                    self.pos = i_before;
                    self.out.truncate(o_before);
                    return self.parse_string(true, None);
                }

                // the quote sits inside the string content; escape it
                self.out.truncate(o_before);
                self.pos = i_quote + ch.len_utf8();
                str_buf.insert(o_quote, '\\');
            } else if stop_at_delimiter && is_unquoted_string_delimiter(ch) {
                // recovery mode: the string ends at this delimiter —
                // unless it is a URL whose colon fooled the scan
                if self.prev_char() == Some(':')
                    && starts_like_url(&self.text[i_before + start_quote.len_utf8()..])
                {
                    while let Some(c) = self.peek() {
                        if !is_url_char(c) {
                            break;
                        }
                        str_buf.push(c);
                        self.advance();
                    }
                }

                let closed = buffer::insert_before_last_whitespace(&str_buf, "\"");
                self.out.push_str(&closed);
                self.parse_concatenated_string()?;
                return Ok(true);
            } else if ch == '\\' {
                match self.char_at(self.pos + 1) {
                    Some(next) if is_escape_character(next) => {
                        str_buf.push('\\');
                        str_buf.push(next);
                        self.pos += 1 + next.len_utf8();
                    }
                    Some('u') => {
                        let mut j = 2;
                        while j < 6 && self.char_at(self.pos + j).is_some_and(is_hex) {
                            j += 1;
                        }
                        if j == 6 {
                            str_buf.push_str(&self.text[self.pos..self.pos + 6]);
                            self.pos += 6;
                        } else if self.pos + j >= self.text.len() {
                            // truncated \uXXXX at the end of the text:
                            // drop it and let the next round close the
                            // string
                            self.pos = self.text.len();
                        } else {
                            return Err(self.err_invalid_unicode_character());
                        }
                    }
                    Some(next) => {
                        // unknown escape: keep the character, drop the
                        // backslash
                        str_buf.push(next);
                        self.pos += 1 + next.len_utf8();
                    }
                    None => {
                        // lone backslash at the end of the text
                        self.pos = self.text.len();
                    }
                }
            } else if ch == '"' && self.prev_char() != Some('\\') {
                // unescaped double quote inside another quote class
                str_buf.push_str("\\\"");
                self.advance();
            } else if is_control_character(ch) {
                str_buf.push_str(control_character_escape(ch));
                self.advance();
            } else {
                if !is_valid_string_character(ch) {
                    return Err(self.err_invalid_character(ch));
                }
                str_buf.push(ch);
                self.advance();
            }

            if skip_escape_chars {
                self.skip_character('\\');
            }
        }
    }

    /// Merge concatenated string literals: `"hello" + "world"` becomes
    /// `"helloworld"`; a dangling `+` is dropped.
    pub(super) fn parse_concatenated_string(&mut self) -> ParseResult<bool> {
        let mut processed = false;

        self.parse_whitespace_and_skip_comments(true);
        while self.peek() == Some('+') {
            processed = true;
            self.advance();
            self.parse_whitespace_and_skip_comments(true);

            // drop the end quote of the first string; on success the
            // second string's start quote takes its place
            self.out.strip_last_occurrence("\"", true);
            let start = self.out.len();
            if self.parse_string(false, None)? {
                self.out.remove_at(start, 1);
            } else {
                // the + is not followed by a string; restore the quote
                self.out.insert_before_last_whitespace("\"");
            }
        }

        Ok(processed)
    }
}

#[inline]
fn is_escape_character(c: char) -> bool {
    matches!(c, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')
}

fn control_character_escape(c: char) -> &'static str {
    match c {
        '\u{0008}' => "\\b",
        '\u{000C}' => "\\f",
        '\n' => "\\n",
        '\r' => "\\r",
        _ => "\\t",
    }
}
