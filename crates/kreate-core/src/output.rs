//! Output representations.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// The shape a factory hands its generated elements back in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputKind {
    /// A wrapped [`Collection`](crate::Collection). Named `jquery` externally.
    #[default]
    Collection,
    /// One markup string, the concatenated outer HTML of every element.
    Html,
    /// The plain ordered list of elements.
    Array,
}

impl OutputKind {
    /// Returns the external name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collection => "jquery",
            Self::Html => "html",
            Self::Array => "array",
        }
    }

    /// Parses a kind case-insensitively, returning `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "jquery" | "collection" => Some(Self::Collection),
            "html" => Some(Self::Html),
            "array" => Some(Self::Array),
            _ => None,
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("unknown output kind `{value}`, expected one of: jquery, html, array")
        })
    }
}

impl TryFrom<String> for OutputKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
