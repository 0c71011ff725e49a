//! Object production.

use crate::classify::is_start_of_value;

use super::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Parse an object like `{"key": "value"}`, repairing missing
    /// commas, colons, values, and the closing brace.
    pub(super) fn parse_object(&mut self) -> ParseResult<bool> {
        if self.peek() != Some('{') {
            return Ok(false);
        }
        self.out.push('{');
        self.advance();
        self.parse_whitespace_and_skip_comments(true);

        // tolerate a leading comma like {, "a": 1}
        if self.skip_character(',') {
            self.parse_whitespace_and_skip_comments(true);
        }

        let mut initial = true;
        while self.peek().is_some_and(|c| c != '}') {
            if !initial {
                let processed_comma = self.parse_character(',');
                if !processed_comma {
                    // missing comma between entries
                    self.out.insert_before_last_whitespace(",");
                }
                self.parse_whitespace_and_skip_comments(true);
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            let processed_key =
                self.parse_string(false, None)? || self.parse_unquoted_string(true)?;
            if !processed_key {
                match self.peek() {
                    Some('}' | '{' | ']' | '[') | None => {
                        // trailing comma before the close
                        self.out.strip_last_occurrence(",", false);
                    }
                    _ => return Err(self.err_object_key_expected()),
                }
                break;
            }

            self.parse_whitespace_and_skip_comments(true);
            let processed_colon = self.parse_character(':');
            let truncated_text = self.pos >= self.text.len();
            if !processed_colon {
                if self.peek().is_some_and(is_start_of_value) || truncated_text {
                    // missing colon before a value
                    self.out.insert_before_last_whitespace(":");
                } else {
                    return Err(self.err_colon_expected());
                }
            }

            let processed_value = self.parse_value()?;
            if !processed_value {
                if processed_colon || truncated_text {
                    // missing value after the colon
                    self.out.push_str("null");
                } else {
                    return Err(self.err_colon_expected());
                }
            }
        }

        if self.peek() == Some('}') {
            self.out.push('}');
            self.advance();
        } else {
            // missing end brace
            self.out.insert_before_last_whitespace("}");
        }
        Ok(true)
    }
}
