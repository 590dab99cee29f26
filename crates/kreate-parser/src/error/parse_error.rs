//! The error returned when a shorthand is rejected.

use std::fmt;

use crate::error::Diagnostic;

/// One or more diagnostics explaining why a shorthand was rejected.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_single() {
        let err = ParseError::from(Diagnostic::error("repeated id `b`"));
        assert_eq!(err.to_string(), "error: repeated id `b`");
    }

    #[test]
    fn test_display_multiple() {
        let err = ParseError::from(vec![
            Diagnostic::error("invalid tag name `1x`"),
            Diagnostic::error("repeated id `b`"),
            Diagnostic::error("stray text"),
        ]);
        assert_eq!(err.to_string(), "error: invalid tag name `1x` (+2 more)");
    }
}
