//! The generation loop and output serialization.

use log::{debug, warn};

use kreate_core::{Collection, Element, OutputKind};

use crate::{Created, resolve::Resolved};

/// Builds every element `resolved` describes and wraps them in its output kind.
///
/// A non-positive count yields an empty collection whatever kind was asked for.
pub(crate) fn generate(resolved: &Resolved) -> Created {
    if resolved.count() <= 0 {
        warn!(count = resolved.count(); "Nothing to generate, returning empty collection");
        return Created::Collection(Collection::new());
    }

    let elements: Vec<Element> = (0..resolved.count())
        .map(|index| build_element(resolved, index))
        .collect();

    debug!(
        count = elements.len(),
        output:% = resolved.output_kind();
        "Elements generated"
    );

    match resolved.output_kind() {
        OutputKind::Collection => Created::Collection(Collection::from_elements(elements)),
        OutputKind::Html => Created::Html(elements.iter().map(Element::outer_html).collect()),
        OutputKind::Array => Created::Elements(elements),
    }
}

fn build_element(resolved: &Resolved, index: i64) -> Element {
    let mut element = Element::new(resolved.tag_name());

    if let Some(class) = resolved.css_class() {
        element.set_class(class);
    }

    if let Some(id) = resolved.id_for(index) {
        element.set_id(id);
    }

    // Explicit attributes apply last and may overwrite `id` and `class`.
    for (name, value) in resolved.attributes() {
        element.set_attribute(name, value.as_str());
    }

    if let Some(content) = resolved.content() {
        element.set_content(content.clone());
    }

    element
}
