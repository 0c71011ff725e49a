//! Single-pass recursive-descent repair parser.
//!
//! One function per grammatical production. Each production either
//! consumes input and emits (possibly repaired) text into the output
//! buffer, or returns `false` without advancing. Productions that
//! speculate capture a `(pos, out.len())` checkpoint and roll both back
//! on failure; no other state exists.

mod array;
mod number;
mod object;
mod strings;

use memchr::memchr;

use crate::buffer::Output;
use crate::classify::{
    is_function_name_char, is_function_name_char_start, is_quote, is_special_whitespace,
    is_start_of_value, is_unquoted_string_delimiter, is_url_char, is_whitespace,
    is_whitespace_except_newline,
};
use crate::error::{RepairError, RepairErrorKind};

pub(crate) type ParseResult<T> = Result<T, RepairError>;

const OPENING_FENCES: [&str; 3] = ["```", "[```", "{```"];
const CLOSING_FENCES: [&str; 3] = ["```", "```]", "```}"];

pub(crate) fn repair(input: &str) -> Result<String, RepairError> {
    Parser::new(input).parse()
}

pub(crate) struct Parser<'a> {
    text: &'a str,
    pos: usize,
    out: Output,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            out: Output::new(),
        }
    }

    /// Top-level driver: one value, optionally fenced, optionally
    /// continued as newline-delimited JSON, with stray closers dropped.
    fn parse(&mut self) -> Result<String, RepairError> {
        self.parse_markdown_code_block(&OPENING_FENCES);

        let processed = self.parse_value()?;
        if !processed {
            return Err(self.err_unexpected_end());
        }

        self.parse_markdown_code_block(&CLOSING_FENCES);

        let processed_comma = self.parse_character(',');
        if processed_comma {
            self.parse_whitespace_and_skip_comments(true);
        }

        if self.peek().is_some_and(is_start_of_value) && self.out.ends_with_comma_or_newline() {
            // a new value after the root: newline-delimited JSON
            if !processed_comma {
                self.out.insert_before_last_whitespace(",");
            }
            self.parse_newline_delimited_json()?;
        } else if processed_comma {
            // a trailing comma after the root value
            self.out.strip_last_occurrence(",", false);
        }

        // tolerate redundant end brackets after the document
        while matches!(self.peek(), Some('}' | ']')) {
            self.advance();
            self.parse_whitespace_and_skip_comments(true);
        }

        if self.pos >= self.text.len() {
            return Ok(std::mem::take(&mut self.out).into_string());
        }
        Err(self.err_unexpected_character())
    }

    fn parse_value(&mut self) -> ParseResult<bool> {
        self.parse_whitespace_and_skip_comments(true);
        let processed = self.parse_object()?
            || self.parse_array()?
            || self.parse_string(false, None)?
            || self.parse_number()
            || self.parse_keywords()
            || self.parse_unquoted_string(false)?
            || self.parse_regex();
        self.parse_whitespace_and_skip_comments(true);
        Ok(processed)
    }

    /// Repair newline-delimited JSON by joining the values with commas
    /// and wrapping the whole output in array brackets.
    fn parse_newline_delimited_json(&mut self) -> ParseResult<()> {
        let mut initial = true;
        let mut processed_value = true;
        while processed_value {
            if !initial {
                let processed_comma = self.parse_character(',');
                if !processed_comma {
                    self.out.insert_before_last_whitespace(",");
                }
            } else {
                initial = false;
            }
            processed_value = self.parse_value()?;
        }

        // the last round parsed nothing; drop the separator added for it
        self.out.strip_last_occurrence(",", false);
        self.out.wrap("[\n", "\n]");
        Ok(())
    }

    // ---- whitespace and comments -------------------------------------

    /// Whitespace and comments interleave freely; comments are dropped,
    /// whitespace is copied through (special whitespace as plain spaces).
    fn parse_whitespace_and_skip_comments(&mut self, skip_newline: bool) -> bool {
        let start = self.pos;
        self.parse_whitespace(skip_newline);
        loop {
            let mut changed = self.parse_comment();
            if changed {
                changed = self.parse_whitespace(skip_newline);
            }
            if !changed {
                break;
            }
        }
        self.pos > start
    }

    fn parse_whitespace(&mut self, skip_newline: bool) -> bool {
        let is_plain: fn(char) -> bool = if skip_newline {
            is_whitespace
        } else {
            is_whitespace_except_newline
        };
        let mut whitespace = String::new();
        while let Some(c) = self.peek() {
            if is_plain(c) {
                whitespace.push(c);
                self.advance();
            } else if is_special_whitespace(c) {
                whitespace.push(' ');
                self.advance();
            } else {
                break;
            }
        }
        if whitespace.is_empty() {
            return false;
        }
        self.out.push_str(&whitespace);
        true
    }

    fn parse_comment(&mut self) -> bool {
        let rest = self.text.as_bytes().get(self.pos..).unwrap_or_default();
        if rest.starts_with(b"/*") {
            // the scan starts at the opening star, so `/*/` closes itself
            let mut offset = 1;
            loop {
                match memchr(b'*', &rest[offset..]) {
                    Some(p) if rest.get(offset + p + 1) == Some(&b'/') => {
                        self.pos += offset + p + 2;
                        break;
                    }
                    Some(p) => offset += p + 1,
                    None => {
                        self.pos = self.text.len();
                        break;
                    }
                }
            }
            return true;
        }
        if rest.starts_with(b"//") {
            // up to but not including the newline
            self.pos = match memchr(b'\n', rest) {
                Some(p) => self.pos + p,
                None => self.text.len(),
            };
            return true;
        }
        false
    }

    // ---- markdown fences ---------------------------------------------

    fn parse_markdown_code_block(&mut self, blocks: &[&str]) -> bool {
        if !self.skip_markdown_code_block(blocks) {
            return false;
        }
        if self.peek().is_some_and(is_function_name_char_start) {
            // language tag like ```json
            while self.peek().is_some_and(is_function_name_char) {
                self.advance();
            }
        }
        self.parse_whitespace_and_skip_comments(true);
        true
    }

    fn skip_markdown_code_block(&mut self, blocks: &[&str]) -> bool {
        for block in blocks {
            if self.text[self.pos..].starts_with(block) {
                self.pos += block.len();
                return true;
            }
        }
        false
    }

    // ---- small consumers ---------------------------------------------

    /// Consume `c` into the output when it is next.
    fn parse_character(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.out.push(c);
            self.advance();
            return true;
        }
        false
    }

    /// Consume `c` without emitting it.
    fn skip_character(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.advance();
            return true;
        }
        false
    }

    /// Skip an ellipsis like `[1, 2, 3, ...]`, with an optional comma.
    fn skip_ellipsis(&mut self) -> bool {
        self.parse_whitespace_and_skip_comments(true);
        if self.text[self.pos..].starts_with("...") {
            self.pos += 3;
            self.parse_whitespace_and_skip_comments(true);
            self.skip_character(',');
            return true;
        }
        false
    }

    // ---- keywords, unquoted strings, regex ---------------------------

    fn parse_keywords(&mut self) -> bool {
        self.parse_keyword("true", "true")
            || self.parse_keyword("false", "false")
            || self.parse_keyword("null", "null")
            // Python literals
            || self.parse_keyword("True", "true")
            || self.parse_keyword("False", "false")
            || self.parse_keyword("None", "null")
    }

    fn parse_keyword(&mut self, name: &str, value: &str) -> bool {
        if self.text[self.pos..].starts_with(name) {
            self.out.push_str(value);
            self.pos += name.len();
            return true;
        }
        false
    }

    /// Quote a bare symbol, unwrap a function call like `NumberLong("2")`
    /// or `callback({...});`, and turn `undefined` into `null`.
    fn parse_unquoted_string(&mut self, is_key: bool) -> ParseResult<bool> {
        let start = self.pos;

        if self.peek().is_some_and(is_function_name_char_start) {
            while self.peek().is_some_and(is_function_name_char) {
                self.advance();
            }

            let mut j = self.pos;
            while let Some(c) = self.char_at(j) {
                if !is_whitespace(c) {
                    break;
                }
                j += c.len_utf8();
            }

            if self.char_at(j) == Some('(') {
                // function wrapper: keep only the inner value
                self.pos = j + 1;
                self.parse_value()?;
                if self.peek() == Some(')') {
                    self.advance();
                    if self.peek() == Some(';') {
                        self.advance();
                    }
                }
                return Ok(true);
            }
        }

        while let Some(c) = self.peek() {
            if is_unquoted_string_delimiter(c) || is_quote(c) || (is_key && c == ':') {
                break;
            }
            self.advance();
        }

        // a URL gets cut at its colon by the loop above; resume it
        if self.prev_char() == Some(':') && starts_like_url(&self.text[start..]) {
            while self.peek().is_some_and(is_url_char) {
                self.advance();
            }
        }

        if self.pos == start {
            return Ok(false);
        }

        // push trailing whitespace back off the symbol
        while self.pos > start {
            match self.prev_index(self.pos) {
                Some(i) if self.char_at(i).is_some_and(is_whitespace) => self.pos = i,
                _ => break,
            }
        }

        let symbol = &self.text[start..self.pos];
        if symbol == "undefined" {
            self.out.push_str("null");
        } else {
            self.out.push('"');
            self.out.push_str(symbol);
            self.out.push('"');
        }

        if self.peek() == Some('"') {
            // the start quote was missing; swallow the orphaned end quote
            self.advance();
        }
        Ok(true)
    }

    /// A JavaScript regex literal becomes a string, slashes included.
    fn parse_regex(&mut self) -> bool {
        if self.peek() != Some('/') {
            return false;
        }
        let start = self.pos;
        self.advance();
        while let Some(c) = self.peek() {
            if c == '/' && self.prev_char() != Some('\\') {
                break;
            }
            self.advance();
        }
        self.skip_character('/');

        self.out.push('"');
        self.out.push_str(&self.text[start..self.pos]);
        self.out.push('"');
        true
    }

    // ---- cursor helpers ----------------------------------------------

    fn char_at(&self, i: usize) -> Option<char> {
        self.text.get(i..)?.chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    /// Byte index of the character ending at `i`.
    fn prev_index(&self, i: usize) -> Option<usize> {
        let c = self.text.get(..i)?.chars().next_back()?;
        Some(i - c.len_utf8())
    }

    fn prev_char(&self) -> Option<char> {
        self.char_at(self.prev_index(self.pos)?)
    }

    /// Index of the last character before `end` that is not plain
    /// whitespace. Degrades to index 0 when everything before is.
    fn prev_non_whitespace_index(&self, end: usize) -> usize {
        let mut idx = match self.prev_index(end) {
            Some(i) => i,
            None => return 0,
        };
        while idx > 0 {
            match self.char_at(idx) {
                Some(c) if is_whitespace(c) => {
                    idx = self.prev_index(idx).unwrap_or(0);
                }
                _ => break,
            }
        }
        idx
    }

    // ---- errors ------------------------------------------------------

    fn err_unexpected_end(&self) -> RepairError {
        RepairError::new(RepairErrorKind::UnexpectedEnd, self.text.len())
    }

    fn err_unexpected_character(&self) -> RepairError {
        let c = self.peek().unwrap_or('\u{0}');
        RepairError::new(RepairErrorKind::UnexpectedCharacter(c), self.pos)
    }

    fn err_object_key_expected(&self) -> RepairError {
        RepairError::new(RepairErrorKind::ObjectKeyExpected, self.pos)
    }

    fn err_colon_expected(&self) -> RepairError {
        RepairError::new(RepairErrorKind::ColonExpected, self.pos)
    }

    fn err_invalid_character(&self, c: char) -> RepairError {
        RepairError::new(RepairErrorKind::InvalidCharacter(c), self.pos)
    }

    fn err_invalid_unicode_character(&self) -> RepairError {
        let chars: String = self.text[self.pos..].chars().take(6).collect();
        RepairError::new(RepairErrorKind::InvalidUnicodeCharacter(chars), self.pos)
    }
}

/// True when `s` opens like an http(s) URL. The caller has already seen
/// the run stop at a `:`, so matching the scheme prefix is enough.
pub(super) fn starts_like_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}
