//! Lexical analyzer for shorthand selectors.
//!
//! The lexer splits a shorthand into `#id` and `.class` markers and the text
//! between them. A marker is only recognized when its sigil is directly
//! followed by a word character (`[A-Za-z0-9_]`); a lone `#` or `.` stays part
//! of the surrounding text. Tokenizing never fails: every byte of the source
//! ends up in exactly one token.

use winnow::{
    Parser as _,
    combinator::{alt, preceded},
    error::{ContextError, ErrMode},
    stream::Stream,
    token::{any, one_of, take_while},
};

use crate::{
    span::Span,
    tokens::{PositionedToken, Token},
};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_name_char(c: char) -> bool {
    is_word_char(c) || c == '-'
}

/// Parse a marker name: a word character followed by word characters or `-`
fn name<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    (one_of(is_word_char), take_while(0.., is_name_char))
        .take()
        .parse_next(input)
}

/// Parse `#name` or `.name`
fn marker<'src>(input: &mut Input<'src>) -> IResult<Token<'src>> {
    alt((
        preceded('#', name).map(Token::Id),
        preceded('.', name).map(Token::Class),
    ))
    .parse_next(input)
}

/// Parse text up to the next marker
///
/// Fails without consuming anything when the input starts with a marker.
fn text<'src>(input: &mut Input<'src>) -> IResult<Token<'src>> {
    let start = *input;

    while !input.is_empty() {
        let checkpoint = input.checkpoint();
        let at_marker = marker.parse_next(input).is_ok();
        input.reset(&checkpoint);

        if at_marker {
            break;
        }
        any::<_, ErrMode<ContextError>>.parse_next(input)?;
    }

    let consumed = start.len() - input.len();
    if consumed == 0 {
        return Err(ErrMode::Backtrack(ContextError::new()));
    }

    Ok(Token::Text(&start[..consumed]))
}

/// Split a shorthand into positioned tokens.
///
/// # Example
///
/// ```
/// # use kreate_parser::{tokenize, Token};
/// let tokens = tokenize("div#item.box");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.token).collect();
/// assert_eq!(
///     kinds,
///     vec![Token::Text("div"), Token::Id("item"), Token::Class("box")]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<PositionedToken<'_>> {
    let mut input = source;
    let mut tokens = Vec::new();

    while !input.is_empty() {
        let start = source.len() - input.len();

        match alt((marker, text)).parse_next(&mut input) {
            Ok(token) => {
                let end = source.len() - input.len();
                tokens.push(PositionedToken::new(token, Span::new(start..end)));
            }
            Err(_) => {
                // `text` only refuses input that starts with a marker, which
                // `marker` accepts, so this keeps the remainder as text.
                tokens.push(PositionedToken::new(
                    Token::Text(input),
                    Span::new(start..source.len()),
                ));
                break;
            }
        }
    }

    tokens
}
