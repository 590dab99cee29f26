//! # Kreate Parser
//!
//! Parser for Kreate shorthand selectors. A shorthand names one element in
//! the form `tag#id.class`: an optional leading tag name, followed by any mix
//! of `#id` and `.class` markers. Marker names match `\w[\w-]*`.
//!
//! Two entry points are provided:
//!
//! - [`parse`] never fails. The id comes from the first marker and the
//!   class from the first or second one; anything else is logged as a
//!   warning and ignored.
//! - [`parse_strict`] reports every problem in the shorthand as a
//!   [`Diagnostic`](error::Diagnostic).
//!
//! ## Usage
//!
//! ```
//! # use kreate_parser::{parse, parse_strict, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let shorthand = parse("li#row.item");
//!     assert_eq!(shorthand.tag(), Some("li"));
//!     assert_eq!(shorthand.id(), Some("row"));
//!     assert_eq!(shorthand.class(), Some("item"));
//!
//!     let strict = parse_strict("span.label")?;
//!     assert_eq!(strict.class(), Some("label"));
//!     Ok(())
//! }
//! ```

pub mod error;

mod lexer;
mod parser;
mod shorthand;
mod span;
mod tokens;

pub use lexer::tokenize;
pub use parser::{parse, parse_strict};
pub use shorthand::Shorthand;
pub use span::Span;
pub use tokens::{PositionedToken, Token};
