//! Error codes for shorthand diagnostics.

use std::fmt;

/// Error codes for categorizing shorthand diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Invalid tag name.
    ///
    /// The text before the first marker is not a valid element name.
    E001,

    /// Marker without a name.
    ///
    /// A `#` or `.` is not followed by a word character.
    E002,

    /// Ignored id.
    ///
    /// An `#id` marker that is not the first marker, either a repeated id or
    /// one written after the class.
    E003,

    /// Ignored class.
    ///
    /// A `.class` marker that is neither the first marker nor directly after
    /// the id.
    E004,

    /// Stray text.
    ///
    /// Text appears after a marker without being part of an id or class.
    E005,

    /// Whitespace in a shorthand.
    ///
    /// Expressions containing whitespace are not shorthands.
    E006,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E006 => "E006",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E006.to_string(), "E006");
    }
}
