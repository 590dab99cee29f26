//! Error types for Kreate operations.
//!
//! This module provides the main error type [`KreateError`]. A factory in
//! lenient mode never produces one; strict mode reports every input it would
//! otherwise have normalized away.

use std::io;

use thiserror::Error;

use kreate_core::NameError;
use kreate_parser::error::ParseError;

use crate::options::Scalar;

/// The main error type for Kreate operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the rejected shorthand alongside the parser
/// diagnostics, so the labelled spans can be rendered against the source.
#[derive(Debug, Error)]
pub enum KreateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("`length` must be a finite number, got {0}")]
    InvalidLength(Scalar),

    #[error("`length` must be at least 1, got {0}")]
    NonPositiveLength(i64),

    #[error("`startId` must be a finite number, got {0}")]
    InvalidStartId(Scalar),

    #[error("`uniqueId` must be a boolean, got {0}")]
    InvalidUniqueId(Scalar),

    #[error("unknown output kind {0}, expected one of: jquery, html, array")]
    UnknownOutput(Scalar),

    #[error("attribute `{name}` has an unsupported value")]
    InvalidAttributeValue { name: String },

    #[error(transparent)]
    InvalidName(#[from] NameError),

    #[error("`content` and `text` are mutually exclusive")]
    ConflictingContent,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl KreateError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
