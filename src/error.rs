use std::fmt;

/// The reason a repair attempt was given up.
///
/// The `Display` output of each kind is the user-facing message; the
/// wording is part of the API surface and is asserted by tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairErrorKind {
    /// The input ended before any value could be produced.
    UnexpectedEnd,
    /// Leftover input after the document that no repair branch accepts.
    UnexpectedCharacter(char),
    /// An object entry started with something that cannot become a key.
    ObjectKeyExpected,
    /// No colon after an object key, and what follows is not a value.
    ColonExpected,
    /// A raw code point below U+0020 without a JSON escape inside a string.
    InvalidCharacter(char),
    /// A malformed `\u` escape that is not simply truncated at the end.
    InvalidUnicodeCharacter(String),
    /// The repaired output failed to parse (only reachable through
    /// [`repair_to_value`](crate::repair_to_value)).
    #[cfg(feature = "serde")]
    Parse(String),
}

impl fmt::Display for RepairErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepairErrorKind::UnexpectedEnd => write!(f, "Unexpected end of json string"),
            RepairErrorKind::UnexpectedCharacter(c) => write!(f, "Unexpected character \"{}\"", c),
            RepairErrorKind::ObjectKeyExpected => write!(f, "Object key expected"),
            RepairErrorKind::ColonExpected => write!(f, "Colon expected"),
            RepairErrorKind::InvalidCharacter(c) => write!(f, "Invalid character \"{}\"", c),
            RepairErrorKind::InvalidUnicodeCharacter(s) => {
                write!(f, "Invalid unicode character \"{}\"", s)
            }
            #[cfg(feature = "serde")]
            RepairErrorKind::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

/// A position-tagged repair failure.
///
/// `position` is a byte offset into the input: the cursor index at the
/// moment the parser gave up. It always lies within `0..=input.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairError {
    pub kind: RepairErrorKind,
    pub position: usize,
}

impl RepairError {
    pub fn new(kind: RepairErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The message text alone, without the position suffix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    #[cfg(feature = "serde")]
    pub(crate) fn from_serde(err: serde_json::Error) -> Self {
        Self {
            kind: RepairErrorKind::Parse(format!("serde_json parse error: {}", err)),
            position: 0,
        }
    }
}

impl fmt::Display for RepairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)
    }
}

impl std::error::Error for RepairError {}
