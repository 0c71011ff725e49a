//! Tolerant JSON repair.
//!
//! [`repair`] consumes text that is almost JSON — the kind produced by
//! humans, LLMs and JavaScript-flavored sources — and returns a valid
//! JSON document that preserves the apparent intent, or a
//! position-tagged [`RepairError`] when no reasonable repair exists.
//!
//! Repairs include, among others: single-quoted and unquoted strings,
//! unquoted keys, missing or trailing commas and colons, comments,
//! Markdown code fences, Python literals (`True`/`False`/`None`),
//! `undefined`, MongoDB/JSONP function wrappers, concatenated strings,
//! newline-delimited JSON, truncated documents, and Unicode
//! quote/space look-alikes.
//!
//! ```
//! let out = jsonmend::repair("{name: 'John', age: 30}").unwrap();
//! assert_eq!(out, r#"{"name": "John", "age": 30}"#);
//! ```

mod buffer;
mod classify;
pub mod error;
mod parser;

pub use error::{RepairError, RepairErrorKind};

/// Repair a string containing an invalid JSON document.
///
/// The result is valid JSON with the original formatting kept where
/// possible. Already-valid input (without comments, code fences or
/// special whitespace) passes through unchanged.
pub fn repair(input: &str) -> Result<String, RepairError> {
    parser::repair(input)
}

/// Repair a string and parse the result into a [`serde_json::Value`].
#[cfg(feature = "serde")]
pub fn repair_to_value(input: &str) -> Result<serde_json::Value, RepairError> {
    let repaired = repair(input)?;
    serde_json::from_str(&repaired).map_err(RepairError::from_serde)
}

#[cfg(test)]
mod tests;
