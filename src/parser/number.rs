//! Number production.

use crate::classify::{is_delimiter, is_digit, is_whitespace};

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse a number like `2.4` or `2.4e6`. Numbers cut off at the end
    /// of the input are padded with a `0`; a lexeme that stops being
    /// numeric mid-way resets the cursor so another production can try.
    pub(super) fn parse_number(&mut self) -> bool {
        let start = self.pos;

        if self.peek() == Some('-') {
            self.advance();
            if self.at_end_of_number() {
                self.repair_number_cut_off(start);
                return true;
            }
            if !self.peek().is_some_and(is_digit) {
                self.pos = start;
                return false;
            }
        }

        // leading zeros are consumed here and dealt with at the end:
        // they can carry meaning, so they must not be cleared
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }

        if self.peek() == Some('.') {
            self.advance();
            if self.at_end_of_number() {
                self.repair_number_cut_off(start);
                return true;
            }
            if !self.peek().is_some_and(is_digit) {
                self.pos = start;
                return false;
            }
            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('-' | '+')) {
                self.advance();
            }
            if self.at_end_of_number() {
                self.repair_number_cut_off(start);
                return true;
            }
            if !self.peek().is_some_and(is_digit) {
                self.pos = start;
                return false;
            }
            while self.peek().is_some_and(is_digit) {
                self.advance();
            }
        }

        if !self.at_end_of_number() {
            self.pos = start;
            return false;
        }

        if self.pos > start {
            let num = &self.text[start..self.pos];
            let bytes = num.as_bytes();
            // an integer with a leading zero like 00789 is not valid
            // JSON; keep the digits by emitting it as a string
            let invalid_leading_zero = bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit();
            if invalid_leading_zero {
                self.out.push('"');
                self.out.push_str(num);
                self.out.push('"');
            } else {
                self.out.push_str(num);
            }
            return true;
        }

        false
    }

    fn at_end_of_number(&self) -> bool {
        match self.peek() {
            None => true,
            Some(c) => is_delimiter(c) || is_whitespace(c),
        }
    }

    /// The input stops right after `-`, `.` or an exponent introducer;
    /// appending a single `0` is the smallest completion.
    fn repair_number_cut_off(&mut self, start: usize) {
        self.out.push_str(&self.text[start..self.pos]);
        self.out.push('0');
    }
}
