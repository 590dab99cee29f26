//! Interpretation of shorthand tokens.
//!
//! The token stream from the [`lexer`](super::lexer) is turned into a
//! [`Shorthand`]. Text at the very start is the tag. Only the first marker
//! can be the id; the class is the first marker, or the second one when the
//! first is the id. The public entry points are [`parse`] and
//! [`parse_strict`], which share one interpretation and differ only in the
//! severity of what they report.

use log::{debug, trace};

use kreate_core::name;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Severity},
    lexer::tokenize,
    shorthand::Shorthand,
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Parse a shorthand, ignoring anything that does not fit `tag#id.class`.
///
/// Never fails. Every ignored part is logged as a warning.
///
/// # Example
///
/// ```
/// # use kreate_parser::parse;
/// let shorthand = parse(".box#item");
/// assert_eq!(shorthand.tag(), None);
/// assert_eq!(shorthand.id(), None);
/// assert_eq!(shorthand.class(), Some("box"));
/// ```
pub fn parse(source: &str) -> Shorthand {
    let mut collector = DiagnosticCollector::new();
    let shorthand = interpret(&tokenize(source), Severity::Warning, &mut collector);

    if let Err(err) = collector.finish() {
        debug!(err:% = err; "Ignoring shorthand errors");
    }

    trace!(source = source, shorthand:? = shorthand; "Parsed shorthand");
    shorthand
}

/// Parse a shorthand, reporting every part that does not fit `tag#id.class`.
///
/// Accepts exactly what [`parse`] reads without dropping anything.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per problem:
/// whitespace ([`ErrorCode::E006`]), an invalid tag name ([`ErrorCode::E001`]),
/// a sigil without a name ([`ErrorCode::E002`]), an id
/// ([`ErrorCode::E003`]) or class ([`ErrorCode::E004`]) that would be
/// ignored, and stray text ([`ErrorCode::E005`]).
pub fn parse_strict(source: &str) -> Result<Shorthand, ParseError> {
    if let Some((offset, ch)) = source.char_indices().find(|(_, c)| c.is_whitespace()) {
        return Err(Diagnostic::error("shorthand contains whitespace")
            .with_code(ErrorCode::E006)
            .with_label(Span::new(offset..offset + ch.len_utf8()), "whitespace here")
            .with_help("expressions containing whitespace are passed to the host untouched")
            .into());
    }

    let mut collector = DiagnosticCollector::new();
    let shorthand = interpret(&tokenize(source), Severity::Error, &mut collector);
    collector.finish()?;

    Ok(shorthand)
}

/// Build the shorthand from its tokens, reporting every ignored part at
/// `severity`.
fn interpret(
    tokens: &[PositionedToken<'_>],
    severity: Severity,
    collector: &mut DiagnosticCollector,
) -> Shorthand {
    let report = |message: String| match severity {
        Severity::Error => Diagnostic::error(message),
        Severity::Warning => Diagnostic::warning(message),
    };

    let mut tag = None;
    let mut id: Option<&PositionedToken<'_>> = None;
    let mut class: Option<&PositionedToken<'_>> = None;
    let mut markers = 0usize;

    for (index, positioned) in tokens.iter().enumerate() {
        let marker = markers;
        match positioned.token {
            Token::Text(text) => {
                if index == 0 {
                    tag = Some(text.to_string());
                }
                check_text(collector, &report, text, positioned.span, index == 0);
                continue;
            }
            Token::Id(_) if marker == 0 => id = Some(positioned),
            Token::Class(_) if marker == 0 || (marker == 1 && id.is_some()) => {
                class = Some(positioned)
            }
            Token::Id(name) => collector.emit(match id {
                Some(first) => report(format!("repeated id `{name}`"))
                    .with_code(ErrorCode::E003)
                    .with_label(positioned.span, "second id")
                    .with_secondary_label(first.span, "first id here")
                    .with_help("an element has a single id; remove one of them"),
                None => {
                    let diagnostic = report(format!("id `{name}` after a class is ignored"))
                        .with_code(ErrorCode::E003)
                        .with_label(positioned.span, "ignored id")
                        .with_help("write the id before the class, as in `tag#id.class`");
                    match class {
                        Some(first) => diagnostic.with_secondary_label(first.span, "class here"),
                        None => diagnostic,
                    }
                }
            }),
            Token::Class(name) => collector.emit(match class {
                Some(first) => report(format!("repeated class `{name}`"))
                    .with_code(ErrorCode::E004)
                    .with_label(positioned.span, "second class")
                    .with_secondary_label(first.span, "first class here")
                    .with_help(
                        "a shorthand holds one class; use the `class` field of a \
                         configuration for several",
                    ),
                None => report(format!("class `{name}` is ignored"))
                    .with_code(ErrorCode::E004)
                    .with_label(positioned.span, "ignored class")
                    .with_help("the class must be the first marker or directly follow the id"),
            }),
        }
        markers += 1;
    }

    Shorthand::new(
        tag,
        id.and_then(|positioned| marker_name(positioned.token)),
        class.and_then(|positioned| marker_name(positioned.token)),
    )
}

fn marker_name(token: Token<'_>) -> Option<String> {
    match token {
        Token::Id(name) | Token::Class(name) => Some(name.to_string()),
        Token::Text(_) => None,
    }
}

/// Report problems inside a text token
///
/// Leading text must be a valid tag name; any later text is stray. A `#` or
/// `.` inside text is a sigil the lexer could not attach a name to.
fn check_text(
    collector: &mut DiagnosticCollector,
    report: &impl Fn(String) -> Diagnostic,
    text: &str,
    span: Span,
    leading: bool,
) {
    for (offset, ch) in text.char_indices().filter(|(_, c)| matches!(c, '#' | '.')) {
        let start = span.start() + offset;
        collector.emit(
            report(format!("expected a name after `{ch}`"))
                .with_code(ErrorCode::E002)
                .with_label(Span::new(start..start + 1), "missing name")
                .with_help("names start with a letter, a digit or `_`"),
        );
    }

    if leading {
        let tag_end = text.find(['#', '.']).unwrap_or(text.len());
        let tag = &text[..tag_end];
        if !tag.is_empty() && !name::is_valid_name(tag) {
            collector.emit(
                report(format!("invalid tag name `{tag}`"))
                    .with_code(ErrorCode::E001)
                    .with_label(Span::new(span.start()..span.start() + tag_end), "not a tag name")
                    .with_help(
                        "tag names start with a letter and contain letters, digits, \
                         `-`, `_`, `.` or `:`",
                    ),
            );
        }
    } else if text.chars().any(|c| !matches!(c, '#' | '.')) {
        collector.emit(
            report(format!("unexpected text `{text}` in shorthand"))
                .with_code(ErrorCode::E005)
                .with_label(span, "not part of an id or class")
                .with_help("a shorthand only holds a tag, one `#id` and one `.class`"),
        );
    }
}
