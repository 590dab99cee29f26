//! Request types accepted by the factory.
//!
//! A [`Request`] is either nothing at all, a shorthand selector such as
//! `"li#row.item"`, or a structured [`Options`] value. The numeric and flag
//! fields of [`Options`] hold a loosely typed [`Scalar`] so a configuration
//! read from a file can carry the wrong kind of value and still be
//! normalized.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, de::IgnoredAny};

/// A loosely typed configuration value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawScalar")]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    /// Any other shape, such as an array or a table.
    Unsupported,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Unsupported(IgnoredAny),
}

impl From<RawScalar> for Scalar {
    fn from(raw: RawScalar) -> Self {
        match raw {
            RawScalar::Bool(value) => Self::Bool(value),
            RawScalar::Integer(value) => Self::Integer(value),
            RawScalar::Float(value) => Self::Float(value),
            RawScalar::Text(value) => Self::Text(value),
            RawScalar::Unsupported(_) => Self::Unsupported,
        }
    }
}

impl Scalar {
    /// Returns how many items a numeric value counts, rounding a fraction up.
    ///
    /// Strings are never converted, so `"3"` is not a number here. Neither
    /// are NaN and the infinities.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Float(value) if value.is_finite() => Some(value.ceil() as i64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the string an attribute holding this value would carry.
    ///
    /// [`Scalar::Unsupported`] has no such form.
    pub fn to_attribute_value(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Integer(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            Self::Text(value) => Some(value.clone()),
            Self::Unsupported => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "`{value}`"),
            Self::Unsupported => write!(f, "an unsupported value"),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A structured creation request.
///
/// Every field is optional; unset fields take the factory defaults. Field
/// names match the external configuration keys, with `unique_id` and
/// `start_id` accepted as aliases.
///
/// # Example
///
/// ```
/// # use kreate::Options;
/// let options: Options = toml::from_str(r#"
///     tag = "li"
///     id = "row"
///     length = 3
///     startId = 0
///     output = "html"
///
///     [attr]
///     data-kind = "row"
/// "#).unwrap();
///
/// assert_eq!(options, Options::new()
///     .tag("li")
///     .id("row")
///     .length(3)
///     .start_id(0)
///     .output("html")
///     .attr("data-kind", "row"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    pub attr: IndexMap<String, Scalar>,
    /// Inner markup, injected without escaping.
    pub content: Option<String>,
    /// Inner text, escaped on serialization.
    pub text: Option<String>,
    pub length: Option<Scalar>,
    #[serde(rename = "uniqueId", alias = "unique_id")]
    pub unique_id: Option<Scalar>,
    #[serde(rename = "startId", alias = "start_id")]
    pub start_id: Option<Scalar>,
    pub output: Option<Scalar>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Adds an attribute, keeping the order attributes were added in.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.attr.insert(name.into(), value.into());
        self
    }

    pub fn content(mut self, markup: impl Into<String>) -> Self {
        self.content = Some(markup.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn length(mut self, length: impl Into<Scalar>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn unique_id(mut self, unique_id: impl Into<Scalar>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    pub fn start_id(mut self, start_id: impl Into<Scalar>) -> Self {
        self.start_id = Some(start_id.into());
        self
    }

    pub fn output(mut self, output: impl Into<Scalar>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// What a caller asks the factory to build.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Request {
    /// No description at all: one default element.
    #[default]
    Empty,
    /// A shorthand selector, or an expression handed to the host when it
    /// contains whitespace.
    Shorthand(String),
    /// A structured configuration.
    Config(Options),
}

impl Request {
    /// Returns a short name for the request shape, used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Shorthand(_) => "shorthand",
            Self::Config(_) => "config",
        }
    }

    /// Returns the expression if this request is handed to the host untouched.
    ///
    /// That is any shorthand containing whitespace.
    pub fn pass_through(&self) -> Option<&str> {
        match self {
            Self::Shorthand(expression) if expression.contains(char::is_whitespace) => {
                Some(expression.as_str())
            }
            _ => None,
        }
    }
}

impl From<&str> for Request {
    fn from(shorthand: &str) -> Self {
        Self::Shorthand(shorthand.to_string())
    }
}

impl From<String> for Request {
    fn from(shorthand: String) -> Self {
        Self::Shorthand(shorthand)
    }
}

impl From<Options> for Request {
    fn from(options: Options) -> Self {
        Self::Config(options)
    }
}

impl<T: Into<Request>> From<Option<T>> for Request {
    fn from(request: Option<T>) -> Self {
        request.map_or(Self::Empty, Into::into)
    }
}
