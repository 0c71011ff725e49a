//! Array production.

use super::{ParseResult, Parser};

impl<'a> Parser<'a> {
    /// Parse an array like `["item1", "item2"]`, repairing missing
    /// commas, trailing commas, and the closing bracket.
    pub(super) fn parse_array(&mut self) -> ParseResult<bool> {
        if self.peek() != Some('[') {
            return Ok(false);
        }
        self.out.push('[');
        self.advance();
        self.parse_whitespace_and_skip_comments(true);

        // tolerate a leading comma like [, 1, 2]
        if self.skip_character(',') {
            self.parse_whitespace_and_skip_comments(true);
        }

        let mut initial = true;
        while self.peek().is_some_and(|c| c != ']') {
            if !initial {
                let processed_comma = self.parse_character(',');
                if !processed_comma {
                    // missing comma between items
                    self.out.insert_before_last_whitespace(",");
                }
            } else {
                initial = false;
            }

            self.skip_ellipsis();

            let processed_value = self.parse_value()?;
            if !processed_value {
                // trailing comma before the close
                self.out.strip_last_occurrence(",", false);
                break;
            }
        }

        if self.peek() == Some(']') {
            self.out.push(']');
            self.advance();
        } else {
            // missing end bracket
            self.out.insert_before_last_whitespace("]");
        }
        Ok(true)
    }
}
