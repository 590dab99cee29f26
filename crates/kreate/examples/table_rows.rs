//! Example: Stamping out table rows
//!
//! This example builds a small table body from a structured request, then
//! decorates the wrapped collection before serializing it.

use kreate::{Created, ElementFactory, Options};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let factory = ElementFactory::default();

    // Three numbered rows, starting at zero
    let rows = Options::new()
        .tag("tr")
        .id("row")
        .class("data")
        .length(3)
        .start_id(0)
        .attr("data-kind", "row")
        .content("<td>…</td>");

    let Created::Collection(collection) = factory.create(rows, None, None)? else {
        return Err("expected a collection".into());
    };

    let collection = collection.add_class("striped").attr("role", "row");
    println!("<tbody>{}</tbody>", collection);

    // The same shape from a shorthand, as one markup string
    let cells = factory.create("td.cell", Some(4), Some("html"))?;
    println!("{}", cells.to_html());

    Ok(())
}
