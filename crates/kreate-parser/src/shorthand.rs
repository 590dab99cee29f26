//! The parsed form of a shorthand selector.

/// Tag, id and class extracted from a shorthand such as `li#row.item`.
///
/// Every part is optional; an empty shorthand yields an empty `Shorthand`
/// and the caller decides which defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shorthand {
    tag: Option<String>,
    id: Option<String>,
    class: Option<String>,
}

impl Shorthand {
    pub fn new(tag: Option<String>, id: Option<String>, class: Option<String>) -> Self {
        Self { tag, id, class }
    }

    /// The text before the first marker, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Splits the shorthand into its parts.
    pub fn into_parts(self) -> (Option<String>, Option<String>, Option<String>) {
        (self.tag, self.id, self.class)
    }
}
