//! Tag and attribute name validation.
//!
//! Names follow the rule a browser applies in `createElement` and
//! `setAttribute`: the first character is an ASCII letter, `_`, `:` or any
//! non-ASCII character; the rest may additionally contain ASCII digits, `-`
//! and `.`. Validated names are lowercased, matching how an HTML document
//! stores them.

use thiserror::Error;

/// Tag used when a request does not name one, or names an invalid one.
pub const DEFAULT_TAG: &str = "div";

/// Elements that never carry content or an end tag when serialized.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Errors raised when a tag or attribute name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("tag name must not be empty")]
    EmptyTag,

    #[error("invalid tag name `{0}`")]
    InvalidTag(String),

    #[error("attribute name must not be empty")]
    EmptyAttribute,

    #[error("invalid attribute name `{0}`")]
    InvalidAttribute(String),
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == ':' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-' || c == '.'
}

/// Returns `true` if `name` is acceptable as a tag or attribute name.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

/// Validates a tag name and returns its lowercased form.
///
/// # Errors
///
/// Returns [`NameError::EmptyTag`] or [`NameError::InvalidTag`].
pub fn normalize_tag(tag: &str) -> Result<String, NameError> {
    if tag.is_empty() {
        return Err(NameError::EmptyTag);
    }
    if !is_valid_name(tag) {
        return Err(NameError::InvalidTag(tag.to_string()));
    }
    Ok(tag.to_ascii_lowercase())
}

/// Validates an attribute name and returns its lowercased form.
///
/// # Errors
///
/// Returns [`NameError::EmptyAttribute`] or [`NameError::InvalidAttribute`].
pub fn normalize_attribute(name: &str) -> Result<String, NameError> {
    if name.is_empty() {
        return Err(NameError::EmptyAttribute);
    }
    if !is_valid_name(name) {
        return Err(NameError::InvalidAttribute(name.to_string()));
    }
    Ok(name.to_ascii_lowercase())
}

/// Returns `true` for elements serialized without content or an end tag.
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
