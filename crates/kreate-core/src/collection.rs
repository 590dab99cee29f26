//! The wrapped collection handed back by a factory.
//!
//! A [`Collection`] is an ordered list of [`Node`]s with a small chainable API
//! for touching every element at once. Most nodes are [`Element`]s; a host
//! that cannot build elements from a markup expression may hand back the
//! expression itself as an opaque [`Node::Fragment`].
//!
//! # Example
//!
//! ```
//! # use kreate_core::{Collection, Element};
//! let items = Collection::from_elements(vec![Element::new("li"), Element::new("li")])
//!     .add_class("item")
//!     .attr("role", "listitem");
//!
//! assert_eq!(items.len(), 2);
//! assert_eq!(
//!     items.to_html(),
//!     r#"<li class="item" role="listitem"></li><li class="item" role="listitem"></li>"#
//! );
//! ```

use std::{fmt, slice, vec};

use crate::element::Element;

/// A single entry of a [`Collection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A detached element.
    Element(Element),
    /// Markup that was not turned into elements. Serialized verbatim.
    Fragment(String),
}

impl Node {
    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Fragment(_) => None,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Element(element) => element.outer_html(),
            Self::Fragment(markup) => markup.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An ordered, chainable collection of nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    nodes: Vec<Node>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a list of elements, keeping their order.
    pub fn from_elements(elements: Vec<Element>) -> Self {
        Self {
            nodes: elements.into_iter().map(Node::Element).collect(),
        }
    }

    /// Wraps a markup expression as a single opaque fragment.
    pub fn from_fragment(markup: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::Fragment(markup.into())],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Iterates over the element nodes, skipping fragments.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    /// Appends a node to the end of the collection.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Adds `classes` to every element.
    pub fn add_class(mut self, classes: &str) -> Self {
        self.each_element_mut(|element| element.add_class(classes));
        self
    }

    /// Sets an attribute on every element.
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.each_element_mut(|element| element.set_attribute(name, value));
        self
    }

    /// Runs `f` on every element, in order.
    pub fn each_element_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        for node in &mut self.nodes {
            if let Node::Element(element) = node {
                f(element);
            }
        }
    }

    /// Concatenates the serialized nodes in order.
    pub fn to_html(&self) -> String {
        self.nodes.iter().map(Node::to_html).collect()
    }

    /// Unwraps the collection into its element nodes, dropping fragments.
    pub fn into_elements(self) -> Vec<Element> {
        self.nodes
            .into_iter()
            .filter_map(|node| match node {
                Node::Element(element) => Some(element),
                Node::Fragment(_) => None,
            })
            .collect()
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            match node {
                Node::Element(element) => element.write_html(f)?,
                Node::Fragment(markup) => f.write_str(markup)?,
            }
        }
        Ok(())
    }
}

impl FromIterator<Element> for Collection {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().map(Node::Element).collect(),
        }
    }
}

impl IntoIterator for Collection {
    type Item = Node;
    type IntoIter = vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Node;
    type IntoIter = slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
