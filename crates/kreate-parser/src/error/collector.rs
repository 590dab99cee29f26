//! Accumulates diagnostics while a shorthand is checked.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Gathers every problem in a shorthand so they can be reported together.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic. Any error makes [`finish`](Self::finish) fail.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `Err` with every diagnostic if any error was recorded.
    ///
    /// Warnings alone are logged and dropped.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }

        for diagnostic in &self.diagnostics {
            warn!(diagnostic:% = diagnostic; "Shorthand warning");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_empty_collector_is_ok() {
        assert!(DiagnosticCollector::new().finish().is_ok());
    }

    #[test]
    fn test_warnings_only_is_ok() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("first"));
        collector.emit(Diagnostic::warning("second"));

        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_errors_keep_every_diagnostic() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(
            Diagnostic::error("invalid tag name `1x`")
                .with_code(ErrorCode::E001)
                .with_label(Span::new(0..2), "not a tag name"),
        );
        collector.emit(Diagnostic::warning("ignored"));

        let err = collector.finish().expect_err("errors must fail");
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].message(), "invalid tag name `1x`");
    }
}
