//! Token types produced by the shorthand [`lexer`](super::lexer).

use std::fmt;

use crate::span::Span;

/// A shorthand token borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// `#name`, carrying the name without the marker.
    Id(&'src str),
    /// `.name`, carrying the name without the marker.
    Class(&'src str),
    /// Any run of text that is not a marker. At the start of the source
    /// this is the tag name.
    Text(&'src str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Id(name) => write!(f, "#{name}"),
            Token::Class(name) => write!(f, ".{name}"),
            Token::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A token together with its location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}
