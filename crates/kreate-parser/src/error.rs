//! Error and diagnostic system for the Kreate shorthand parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! when a shorthand is rejected.
//!
//! # Example
//!
//! ```
//! # use kreate_parser::error::{Diagnostic, ErrorCode};
//! # use kreate_parser::Span;
//!
//! let span = Span::new(5..7);
//! let original_span = Span::new(3..5);
//!
//! let diag = Diagnostic::error("repeated id `b`")
//!     .with_code(ErrorCode::E003)
//!     .with_label(span, "second id")
//!     .with_secondary_label(original_span, "first id here")
//!     .with_help("an element has a single id; remove one of them");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
