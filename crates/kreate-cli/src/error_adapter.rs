//! Conversion of [`KreateError`] into miette diagnostics for rendering.
//!
//! A [`kreate_parser::error::ParseError`] becomes one report per diagnostic,
//! each rendered against the rejected shorthand.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use kreate::KreateError;
use kreate_parser::error::Diagnostic;

/// A shorthand diagnostic paired with the shorthand it points into.
#[derive(Debug)]
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A [`KreateError`] without source spans, given a code and optional help.
#[derive(Debug)]
pub struct ErrorAdapter<'a>(pub &'a KreateError);

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            KreateError::Io(_) => "kreate::io",
            KreateError::Parse { .. } => return None,
            KreateError::InvalidLength(_) | KreateError::NonPositiveLength(_) => "kreate::length",
            KreateError::InvalidStartId(_) => "kreate::start_id",
            KreateError::InvalidUniqueId(_) => "kreate::unique_id",
            KreateError::UnknownOutput(_) => "kreate::output",
            KreateError::InvalidAttributeValue { .. } => "kreate::attribute",
            KreateError::InvalidName(_) => "kreate::name",
            KreateError::ConflictingContent => "kreate::content",
            KreateError::Config(_) => "kreate::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            KreateError::NonPositiveLength(_) => "use a length of 1 or more",
            KreateError::UnknownOutput(_) => "pass `--format jquery`, `html` or `array`",
            KreateError::ConflictingContent => "set either `content` (raw markup) or `text`",
            KreateError::InvalidUniqueId(_) => "use `true` or `false`",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// Convert a [`KreateError`] into the reports miette renders.
///
/// [`KreateError::Parse`] yields one report per diagnostic; every other
/// variant yields a single one.
pub fn to_reportables(err: &KreateError) -> Vec<Box<dyn MietteDiagnostic + '_>> {
    match err {
        KreateError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Box::new(DiagnosticAdapter::new(d, src)) as Box<dyn MietteDiagnostic + '_>)
            .collect(),
        _ => vec![Box::new(ErrorAdapter(err)) as Box<dyn MietteDiagnostic + '_>],
    }
}
