//! The host a factory hands non-shorthand expressions to.
//!
//! A request string containing whitespace is not a shorthand; the factory
//! passes it untouched to [`Host::query`] and wraps whatever comes back.
//! Closures of the form `Fn(&str) -> Collection` are hosts too.

use log::debug;

use kreate_core::Collection;

/// Resolves expressions the factory does not interpret itself.
pub trait Host {
    /// Builds a collection from `expression`, which may be markup or a query.
    fn query(&self, expression: &str) -> Collection;
}

impl<F> Host for F
where
    F: Fn(&str) -> Collection,
{
    fn query(&self, expression: &str) -> Collection {
        self(expression)
    }
}

/// A host with no document behind it.
///
/// Markup (an expression starting with `<`) comes back as one opaque
/// fragment node. Anything else would be a query against a document, so the
/// result is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedHost;

impl Host for DetachedHost {
    fn query(&self, expression: &str) -> Collection {
        if expression.trim_start().starts_with('<') {
            Collection::from_fragment(expression)
        } else {
            debug!(expression = expression; "No document to query, returning empty collection");
            Collection::new()
        }
    }
}
