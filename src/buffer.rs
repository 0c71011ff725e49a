//! Append-biased output buffer with the two suffix edits the repair
//! parser needs: insert-before-trailing-whitespace and
//! strip-last-occurrence. A plain `String` underneath; every edited
//! character is ASCII, so byte offsets stay on char boundaries.

use crate::classify::is_whitespace;

#[derive(Debug, Default)]
pub(crate) struct Output {
    buf: String,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub(crate) fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    #[inline]
    pub(crate) fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Roll the buffer back to a checkpointed length.
    #[inline]
    pub(crate) fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }

    /// Insert `text` before the run of trailing whitespace, so repairs
    /// like a late comma keep the original formatting intact.
    pub(crate) fn insert_before_last_whitespace(&mut self, text: &str) {
        self.buf
            .insert_str(index_before_last_whitespace(&self.buf), text);
    }

    /// Remove the last occurrence of `pat`. With `strip_remaining` set,
    /// everything after it goes too.
    pub(crate) fn strip_last_occurrence(&mut self, pat: &str, strip_remaining: bool) {
        if let Some(idx) = self.buf.rfind(pat) {
            if strip_remaining {
                self.buf.truncate(idx);
            } else {
                self.buf.replace_range(idx..idx + pat.len(), "");
            }
        }
    }

    /// Remove `count` bytes starting at `start`.
    pub(crate) fn remove_at(&mut self, start: usize, count: usize) {
        self.buf.replace_range(start..start + count, "");
    }

    /// Enclose the whole buffer, e.g. in array brackets for NDJSON.
    pub(crate) fn wrap(&mut self, prefix: &str, suffix: &str) {
        self.buf.insert_str(0, prefix);
        self.buf.push_str(suffix);
    }

    /// True when the buffer ends with a comma or newline, optionally
    /// followed by spaces, tabs or carriage returns. The trigger for
    /// newline-delimited JSON detection.
    pub(crate) fn ends_with_comma_or_newline(&self) -> bool {
        let trimmed = self.buf.trim_end_matches([' ', '\t', '\r']);
        trimmed.ends_with(',') || trimmed.ends_with('\n')
    }
}

/// Byte index where trailing whitespace starts (or the end of the text
/// when there is none). Whitespace here is the plain ASCII set.
fn index_before_last_whitespace(text: &str) -> usize {
    let mut index = text.len();
    for (i, c) in text.char_indices().rev() {
        if !is_whitespace(c) {
            break;
        }
        index = i;
    }
    index
}

/// Insert `text` into an owned scratch string before its trailing
/// whitespace. Used by the string parser, which builds candidate strings
/// outside the main buffer until they are accepted.
pub(crate) fn insert_before_last_whitespace(s: &str, text: &str) -> String {
    let idx = index_before_last_whitespace(s);
    let mut out = String::with_capacity(s.len() + text.len());
    out.push_str(&s[..idx]);
    out.push_str(text);
    out.push_str(&s[idx..]);
    out
}
