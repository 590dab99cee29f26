//! Kreate - Stamp out markup elements from a shorthand or a configuration.
//!
//! A request is either a compact selector such as `"li#row.item"` or a
//! structured [`Options`] value. The factory normalizes it, builds the
//! requested number of detached elements and hands them back as a wrapped
//! [`Collection`], one markup string, or a plain list of [`Element`]s.
//!
//! ```
//! use kreate::{Created, Options};
//!
//! let html = kreate::create("li#row.item", Some(2), Some("html"));
//! assert_eq!(
//!     html.to_html(),
//!     r#"<li class="item" id="row-1"></li><li class="item" id="row-2"></li>"#
//! );
//!
//! let Created::Elements(rows) = kreate::create(
//!     Options::new().tag("tr").id("r").length(3).start_id(0).output("array"),
//!     None,
//!     None,
//! ) else {
//!     unreachable!()
//! };
//! assert_eq!(rows[2].id(), Some("r-2"));
//! ```

pub mod config;

mod error;
mod generate;
mod host;
mod options;
mod resolve;

pub use kreate_core::{Collection, Content, Element, Node, OutputKind};

pub use error::KreateError;
pub use host::{DetachedHost, Host};
pub use options::{Options, Request, Scalar};
pub use resolve::{Resolved, StartIndex};

use log::{debug, error, info};

use config::{AppConfig, Mode};
use resolve::Resolver;

/// The result of a creation request, shaped by its output kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Created {
    /// A wrapped collection (`jquery` output, and every pass-through).
    Collection(Collection),
    /// The concatenated outer HTML of every element (`html` output).
    Html(String),
    /// The ordered raw elements (`array` output).
    Elements(Vec<Element>),
}

impl Created {
    /// Returns the output kind this result was shaped as.
    pub fn kind(&self) -> OutputKind {
        match self {
            Self::Collection(_) => OutputKind::Collection,
            Self::Html(_) => OutputKind::Html,
            Self::Elements(_) => OutputKind::Array,
        }
    }

    /// Serializes the result whatever its shape.
    pub fn to_html(&self) -> String {
        match self {
            Self::Collection(collection) => collection.to_html(),
            Self::Html(html) => html.clone(),
            Self::Elements(elements) => elements.iter().map(Element::outer_html).collect(),
        }
    }

    /// Returns the wrapped collection, or `None` for the other shapes.
    pub fn into_collection(self) -> Option<Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// Returns the markup of an `html` result.
    ///
    /// Use [`to_html`](Self::to_html) to serialize any shape instead.
    pub fn into_html(self) -> Option<String> {
        match self {
            Self::Html(html) => Some(html),
            _ => None,
        }
    }

    /// Returns the raw elements of an `array` result, in generation order.
    pub fn into_elements(self) -> Option<Vec<Element>> {
        match self {
            Self::Elements(elements) => Some(elements),
            _ => None,
        }
    }
}

/// Factory that turns creation requests into elements.
///
/// The factory holds no state besides its configuration and host, so one
/// value can serve any number of calls, from any number of threads when the
/// host allows it.
///
/// # Examples
///
/// ```rust
/// use kreate::{Created, ElementFactory, Options, config::AppConfig};
///
/// // With custom config
/// let factory = ElementFactory::new(AppConfig::default());
/// let created = factory
///     .create(Options::new().tag("li").id("row").length(3), None, None)
///     .expect("lenient factories never fail");
/// assert_eq!(created.into_collection().map(|c| c.len()), Some(3));
///
/// // Strict factories reject what lenient ones normalize
/// let strict = ElementFactory::default().strict();
/// assert!(strict.create(Options::new().length("three"), None, None).is_err());
/// ```
#[derive(Debug)]
pub struct ElementFactory<H = DetachedHost> {
    config: AppConfig,
    host: H,
}

impl ElementFactory {
    /// Create a new factory with the given configuration and a [`DetachedHost`].
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including mode and defaults
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            host: DetachedHost,
        }
    }
}

impl Default for ElementFactory {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl<H: Host> ElementFactory<H> {
    /// Replaces the host that receives non-shorthand expressions.
    pub fn with_host<T: Host>(self, host: T) -> ElementFactory<T> {
        ElementFactory {
            config: self.config,
            host,
        }
    }

    /// Switches the factory to strict mode.
    pub fn strict(mut self) -> Self {
        self.config = self.config.with_mode(Mode::Strict);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.config.factory().mode()
    }

    /// Build the elements a request describes.
    ///
    /// `count` and `output` only apply to shorthand requests; a structured
    /// configuration carries its own `length` and `output`, and an empty
    /// request always yields one element built from the defaults alone.
    ///
    /// # Arguments
    ///
    /// * `request` - A shorthand string, an [`Options`] value or [`Request::Empty`]
    /// * `count` - Number of elements for a shorthand; absent or `0` means one
    /// * `output` - Output kind name for a shorthand (`jquery`, `html`, `array`)
    ///
    /// # Errors
    ///
    /// Lenient factories never fail. Strict factories return a
    /// [`KreateError`] for malformed shorthands and for every configuration
    /// value a lenient factory would replace with a default.
    pub fn create(
        &self,
        request: impl Into<Request>,
        count: Option<i64>,
        output: Option<&str>,
    ) -> Result<Created, KreateError> {
        let request = request.into();
        info!(request_kind = request.kind(), mode:? = self.mode(); "Creating elements");

        if let Some(expression) = request.pass_through() {
            debug!(expression = expression; "Passing expression to host");
            return Ok(Created::Collection(self.host.query(expression)));
        }

        let resolved = self.resolve_request(&request, count, output)?;
        let created = generate::generate(&resolved);

        info!(output:% = created.kind(); "Elements created");
        Ok(created)
    }

    /// Normalize a request without generating anything.
    ///
    /// Returns `None` for expressions that would be handed to the host.
    ///
    /// # Errors
    ///
    /// The same errors as [`create`](Self::create).
    pub fn resolve(
        &self,
        request: &Request,
        count: Option<i64>,
        output: Option<&str>,
    ) -> Result<Option<Resolved>, KreateError> {
        if request.pass_through().is_some() {
            return Ok(None);
        }
        self.resolve_request(request, count, output).map(Some)
    }

    fn resolve_request(
        &self,
        request: &Request,
        count: Option<i64>,
        output: Option<&str>,
    ) -> Result<Resolved, KreateError> {
        let resolver = Resolver::new(self.config.defaults(), self.mode());

        match request {
            Request::Empty => resolver.options(&Options::default()),
            Request::Shorthand(expression) => {
                let shorthand = if self.mode().is_strict() {
                    kreate_parser::parse_strict(expression)
                        .map_err(|err| KreateError::new_parse_error(err, expression.as_str()))?
                } else {
                    kreate_parser::parse(expression)
                };
                resolver.shorthand(shorthand, count, output)
            }
            Request::Config(options) => resolver.options(options),
        }
    }
}

/// Build elements with a default lenient factory.
///
/// This never fails: every malformed input is normalized to a default.
///
/// # Examples
///
/// ```rust
/// let created = kreate::create("p.note", None, None);
/// assert_eq!(created.to_html(), r#"<p class="note"></p>"#);
/// ```
pub fn create(request: impl Into<Request>, count: Option<i64>, output: Option<&str>) -> Created {
    match ElementFactory::new(AppConfig::default()).create(request, count, output) {
        Ok(created) => created,
        Err(err) => {
            error!(err:% = err; "Lenient creation failed");
            Created::Collection(Collection::new())
        }
    }
}
