//! Detached markup elements.
//!
//! An [`Element`] is a standalone node: a tag name, an ordered attribute map
//! and optional inner content. It is never attached to a document, so every
//! instance is owned outright by whoever holds it.
//!
//! The `id` and `class` of an element live in the attribute map just like any
//! other attribute, so a later `set_attribute("id", ..)` overwrites an earlier
//! [`Element::set_id`] and keeps its original position in the output.
//!
//! # Example
//!
//! ```
//! # use kreate_core::Element;
//! let mut item = Element::new("li");
//! item.set_id("row-1");
//! item.set_class("item");
//! item.set_attribute("data-index", "1");
//! item.set_text("First & foremost");
//!
//! assert_eq!(
//!     item.outer_html(),
//!     r#"<li id="row-1" class="item" data-index="1">First &amp; foremost</li>"#
//! );
//! ```

use std::fmt::{self, Write as _};

use indexmap::IndexMap;
use log::warn;

use crate::name::{self, DEFAULT_TAG, NameError};

/// Inner content of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Markup injected verbatim. The caller is responsible for sanitizing it.
    Html(String),
    /// Plain text, escaped on serialization.
    Text(String),
}

impl Content {
    /// Returns the content as it appears inside the element's markup.
    pub fn to_html(&self) -> String {
        match self {
            Self::Html(markup) => markup.clone(),
            Self::Text(text) => html_escape::encode_text(text).into_owned(),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            Self::Html(value) | Self::Text(value) => value.is_empty(),
        }
    }
}

/// A detached markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    content: Option<Content>,
}

impl Element {
    /// Creates an element, falling back to `div` when `tag` is not a valid name.
    ///
    /// The tag name is lowercased.
    pub fn new(tag: &str) -> Self {
        Self::try_new(tag).unwrap_or_else(|err| {
            warn!(tag = tag, err:% = err; "Invalid tag name, using default");
            Self::with_normalized_tag(DEFAULT_TAG.to_string())
        })
    }

    /// Creates an element, rejecting invalid tag names.
    ///
    /// # Errors
    ///
    /// Returns a [`NameError`] when `tag` is empty or not a valid name.
    pub fn try_new(tag: &str) -> Result<Self, NameError> {
        name::normalize_tag(tag).map(Self::with_normalized_tag)
    }

    fn with_normalized_tag(tag: String) -> Self {
        Self {
            tag,
            attributes: IndexMap::new(),
            content: None,
        }
    }

    /// Returns the lowercased tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns `true` for void elements such as `br` or `img`.
    pub fn is_void(&self) -> bool {
        name::is_void(&self.tag)
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.attributes.insert("id".to_string(), id.into());
    }

    pub fn class(&self) -> Option<&str> {
        self.attribute("class")
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.attributes.insert("class".to_string(), class.into());
    }

    /// Appends every class in `classes` that the element does not carry yet.
    pub fn add_class(&mut self, classes: &str) {
        let mut current: Vec<String> = self
            .class()
            .map(|existing| existing.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        for class in classes.split_whitespace() {
            if !current.iter().any(|existing| existing == class) {
                current.push(class.to_string());
            }
        }

        self.set_class(current.join(" "));
    }

    /// Returns `true` if the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class()
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Returns the value of an attribute. Lookup ignores ASCII case.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name.to_ascii_lowercase().as_str())
            .map(String::as_str)
    }

    /// Iterates over attributes in the order they were first set.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Sets an attribute, ignoring (and logging) invalid names.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        if let Err(err) = self.try_set_attribute(name, value) {
            warn!(attribute = name, err:% = err; "Skipping invalid attribute");
        }
    }

    /// Sets an attribute, rejecting invalid names.
    ///
    /// Setting an existing attribute replaces its value in place.
    ///
    /// # Errors
    ///
    /// Returns a [`NameError`] when `name` is empty or not a valid name.
    pub fn try_set_attribute(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), NameError> {
        let name = name::normalize_attribute(name)?;
        self.attributes.insert(name, value.into());
        Ok(())
    }

    /// Removes an attribute and returns its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes
            .shift_remove(name.to_ascii_lowercase().as_str())
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Replaces the inner content with raw markup. No escaping is performed.
    pub fn set_inner_html(&mut self, markup: impl Into<String>) {
        self.content = Some(Content::Html(markup.into()));
    }

    /// Replaces the inner content with text that is escaped on serialization.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Some(Content::Text(text.into()));
    }

    pub fn set_content(&mut self, content: Content) {
        self.content = Some(content);
    }

    pub fn clear_content(&mut self) {
        self.content = None;
    }

    /// Returns the serialized inner content. Void elements have none.
    pub fn inner_html(&self) -> String {
        match &self.content {
            Some(content) if !self.is_void() => content.to_html(),
            _ => String::new(),
        }
    }

    /// Returns the serialized element including its own tags.
    pub fn outer_html(&self) -> String {
        let mut html = String::new();
        // Writing to a String cannot fail
        let _ = self.write_html(&mut html);
        html
    }

    /// Writes the serialized element to `f`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_html(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(
                f,
                " {name}=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            )?;
        }
        f.write_char('>')?;

        if self.is_void() {
            return Ok(());
        }

        if let Some(content) = self.content.as_ref().filter(|c| !c.is_empty()) {
            f.write_str(&content.to_html())?;
        }
        write!(f, "</{}>", self.tag)
    }

    /// Builder form of [`Element::set_id`].
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Builder form of [`Element::set_class`].
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.set_class(class);
        self
    }

    /// Builder form of [`Element::set_attribute`].
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`Element::set_inner_html`].
    pub fn with_inner_html(mut self, markup: impl Into<String>) -> Self {
        self.set_inner_html(markup);
        self
    }

    /// Builder form of [`Element::set_text`].
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::with_normalized_tag(DEFAULT_TAG.to_string())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}
