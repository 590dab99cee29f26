//! Normalization of requests into a [`Resolved`] configuration.
//!
//! Every field is resolved independently: absent fields take the configured
//! default, present fields override it. In lenient mode a malformed field is
//! replaced by its default and logged; in strict mode it is an error.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, trace, warn};

use kreate_core::{Content, OutputKind, name};
use kreate_parser::Shorthand;

use crate::{
    KreateError,
    config::{DefaultsConfig, Mode},
    options::{Options, Scalar},
};

/// The number appended to the first generated id.
///
/// A fractional start is kept as given, so ids count `row-1.5`, `row-2.5`
/// and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartIndex {
    Integer(i64),
    Float(f64),
}

impl StartIndex {
    /// Reads a numeric value, keeping whole floats as integers.
    ///
    /// Returns `None` for anything that is not a finite number.
    pub fn from_scalar(value: &Scalar) -> Option<Self> {
        match *value {
            Scalar::Integer(start) => Some(Self::Integer(start)),
            Scalar::Float(start)
                if start.fract() == 0.0
                    && start >= i64::MIN as f64
                    && start <= i64::MAX as f64 =>
            {
                Some(Self::Integer(start as i64))
            }
            Scalar::Float(start) if start.is_finite() => Some(Self::Float(start)),
            _ => None,
        }
    }

    /// Returns the number `index` steps past this one.
    pub fn offset(self, index: i64) -> Self {
        match self {
            Self::Integer(start) => Self::Integer(start.saturating_add(index)),
            Self::Float(start) => Self::Float(start + index as f64),
        }
    }
}

impl From<i64> for StartIndex {
    fn from(start: i64) -> Self {
        Self::Integer(start)
    }
}

impl fmt::Display for StartIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            // Whole floats print without a trailing `.0`
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// A fully normalized creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    tag_name: String,
    element_id: Option<String>,
    css_class: Option<String>,
    attributes: IndexMap<String, String>,
    content: Option<Content>,
    count: i64,
    unique_ids: bool,
    start_index: StartIndex,
    output_kind: OutputKind,
}

impl Resolved {
    /// Returns the lowercased tag name.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn element_id(&self) -> Option<&str> {
        self.element_id.as_deref()
    }

    pub fn css_class(&self) -> Option<&str> {
        self.css_class.as_deref()
    }

    /// Returns the validated attributes in the order they were given.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    /// Returns the number of elements to generate.
    ///
    /// Only reachable as zero or negative in lenient mode, where it yields
    /// no elements.
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn unique_ids(&self) -> bool {
        self.unique_ids
    }

    pub fn start_index(&self) -> StartIndex {
        self.start_index
    }

    pub fn output_kind(&self) -> OutputKind {
        self.output_kind
    }

    /// Returns the id the element at `index` receives, if any.
    ///
    /// Ids are suffixed with `-N` only when more than one element is
    /// generated and numbering is enabled; otherwise every element shares
    /// the id verbatim.
    pub fn id_for(&self, index: i64) -> Option<String> {
        let id = self.element_id.as_deref()?;
        if self.count > 1 && self.unique_ids {
            Some(format!("{id}-{}", self.start_index.offset(index)))
        } else {
            Some(id.to_string())
        }
    }
}

/// Normalizes requests against a set of defaults.
pub(crate) struct Resolver<'a> {
    defaults: &'a DefaultsConfig,
    mode: Mode,
}

impl<'a> Resolver<'a> {
    pub fn new(defaults: &'a DefaultsConfig, mode: Mode) -> Self {
        Self { defaults, mode }
    }

    /// Merges a parsed shorthand with the call's count and output arguments.
    pub fn shorthand(
        &self,
        shorthand: Shorthand,
        count: Option<i64>,
        output: Option<&str>,
    ) -> Result<Resolved, KreateError> {
        let (tag, id, class) = shorthand.into_parts();
        let length = match count {
            None | Some(0) => 1,
            Some(count) => count,
        };

        let options = Options {
            tag,
            id,
            class,
            length: Some(Scalar::Integer(length)),
            output: output.map(Scalar::from),
            ..Options::default()
        };
        self.options(&options)
    }

    /// Normalizes a structured configuration.
    pub fn options(&self, options: &Options) -> Result<Resolved, KreateError> {
        let resolved = Resolved {
            tag_name: self.tag(options.tag.as_deref())?,
            element_id: non_empty(options.id.as_deref()),
            css_class: non_empty(options.class.as_deref()),
            attributes: self.attributes(&options.attr)?,
            content: self.content(options.content.as_deref(), options.text.as_deref())?,
            count: self.count(options.length.as_ref())?,
            unique_ids: self.unique_ids(options.unique_id.as_ref())?,
            start_index: self.start_index(options.start_id.as_ref())?,
            output_kind: self.output_kind(options.output.as_ref())?,
        };

        trace!(resolved:?; "Resolved request");
        Ok(resolved)
    }

    fn tag(&self, tag: Option<&str>) -> Result<String, KreateError> {
        let tag = non_empty(tag).unwrap_or_else(|| self.defaults.tag().to_string());
        match name::normalize_tag(&tag) {
            Ok(tag) => Ok(tag),
            Err(err) if self.mode.is_strict() => Err(err.into()),
            Err(err) => {
                warn!(tag = tag.as_str(), err:% = err; "Invalid tag name, using default");
                Ok(name::DEFAULT_TAG.to_string())
            }
        }
    }

    fn attributes(
        &self,
        attr: &IndexMap<String, Scalar>,
    ) -> Result<IndexMap<String, String>, KreateError> {
        let mut attributes = IndexMap::with_capacity(attr.len());
        for (raw_name, value) in attr {
            let attribute = match name::normalize_attribute(raw_name) {
                Ok(attribute) => attribute,
                Err(err) if self.mode.is_strict() => return Err(err.into()),
                Err(err) => {
                    warn!(name = raw_name.as_str(), err:% = err; "Skipping invalid attribute");
                    continue;
                }
            };

            let Some(value) = value.to_attribute_value() else {
                if self.mode.is_strict() {
                    return Err(KreateError::InvalidAttributeValue { name: attribute });
                }
                warn!(name = attribute.as_str(); "Skipping attribute with unsupported value");
                continue;
            };

            attributes.insert(attribute, value);
        }
        Ok(attributes)
    }

    fn content(
        &self,
        content: Option<&str>,
        text: Option<&str>,
    ) -> Result<Option<Content>, KreateError> {
        match (non_empty(content), non_empty(text)) {
            (Some(_), Some(_)) if self.mode.is_strict() => Err(KreateError::ConflictingContent),
            (Some(markup), text) => {
                if text.is_some() {
                    debug!("Both content and text given, using content");
                }
                Ok(Some(Content::Html(markup)))
            }
            (None, Some(text)) => Ok(Some(Content::Text(text))),
            (None, None) => Ok(None),
        }
    }

    fn count(&self, length: Option<&Scalar>) -> Result<i64, KreateError> {
        let Some(length) = length else {
            return Ok(1);
        };

        match length.as_count() {
            Some(count) if count > 0 => Ok(count),
            Some(count) if self.mode.is_strict() => Err(KreateError::NonPositiveLength(count)),
            Some(count) => {
                debug!(count = count; "Non-positive length, nothing will be generated");
                Ok(count)
            }
            None if self.mode.is_strict() => Err(KreateError::InvalidLength(length.clone())),
            None => {
                warn!(length:% = length; "Length is not a number, using 1");
                Ok(1)
            }
        }
    }

    fn unique_ids(&self, unique_id: Option<&Scalar>) -> Result<bool, KreateError> {
        match unique_id {
            None => Ok(self.defaults.unique_id()),
            Some(value) => match value.as_bool() {
                Some(enabled) => Ok(enabled),
                None if self.mode.is_strict() => Err(KreateError::InvalidUniqueId(value.clone())),
                None => {
                    debug!(unique_id:% = value; "uniqueId is not `true`, ids are not numbered");
                    Ok(false)
                }
            },
        }
    }

    fn start_index(&self, start_id: Option<&Scalar>) -> Result<StartIndex, KreateError> {
        let Some(start_id) = start_id else {
            return Ok(self.defaults.start_id().into());
        };

        match StartIndex::from_scalar(start_id) {
            Some(start) => Ok(start),
            None if self.mode.is_strict() => Err(KreateError::InvalidStartId(start_id.clone())),
            None => {
                warn!(start_id:% = start_id; "startId is not a number, using 1");
                Ok(StartIndex::Integer(1))
            }
        }
    }

    fn output_kind(&self, output: Option<&Scalar>) -> Result<OutputKind, KreateError> {
        let Some(output) = output else {
            return Ok(self.defaults.output());
        };

        match output.as_str().and_then(OutputKind::parse) {
            Some(kind) => Ok(kind),
            None if self.mode.is_strict() => Err(KreateError::UnknownOutput(output.clone())),
            None => {
                let fallback = self.defaults.output();
                warn!(output:% = output, fallback:% = fallback; "Unknown output kind, using default");
                Ok(fallback)
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|value| !value.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(options: &Options) -> Resolved {
        let defaults = DefaultsConfig::default();
        Resolver::new(&defaults, Mode::Lenient)
            .options(options)
            .expect("lenient resolution never fails")
    }

    fn strict(options: &Options) -> Result<Resolved, KreateError> {
        let defaults = DefaultsConfig::default();
        Resolver::new(&defaults, Mode::Strict).options(options)
    }

    #[test]
    fn test_defaults() {
        let resolved = lenient(&Options::new());

        assert_eq!(resolved.tag_name(), "div");
        assert_eq!(resolved.element_id(), None);
        assert_eq!(resolved.css_class(), None);
        assert!(resolved.attributes().is_empty());
        assert_eq!(resolved.content(), None);
        assert_eq!(resolved.count(), 1);
        assert!(resolved.unique_ids());
        assert_eq!(resolved.start_index(), StartIndex::Integer(1));
        assert_eq!(resolved.output_kind(), OutputKind::Collection);
    }

    #[test]
    fn test_non_numeric_values_fall_back() {
        let resolved = lenient(
            &Options::new()
                .length("abc")
                .start_id("5")
                .output("xml"),
        );

        assert_eq!(resolved.count(), 1);
        assert_eq!(resolved.start_index(), StartIndex::Integer(1));
        assert_eq!(resolved.output_kind(), OutputKind::Collection);
    }

    #[test]
    fn test_fractional_numbers_are_numbers() {
        let resolved = lenient(&Options::new().id("row").length(2.5).start_id(1.5));

        assert_eq!(resolved.count(), 3);
        assert_eq!(resolved.start_index(), StartIndex::Float(1.5));
        assert_eq!(resolved.id_for(0).as_deref(), Some("row-1.5"));
        assert_eq!(resolved.id_for(2).as_deref(), Some("row-3.5"));

        let whole = lenient(&Options::new().id("row").length(2).start_id(3.0));
        assert_eq!(whole.start_index(), StartIndex::Integer(3));
        assert_eq!(whole.id_for(1).as_deref(), Some("row-4"));

        let resolved = strict(&Options::new().length(0.5).start_id(-0.5)).expect("numbers");
        assert_eq!(resolved.count(), 1);
        assert_eq!(resolved.start_index(), StartIndex::Float(-0.5));
    }

    #[test]
    fn test_start_index_display() {
        assert_eq!(StartIndex::Integer(-2).to_string(), "-2");
        assert_eq!(StartIndex::Float(0.5).offset(2).to_string(), "2.5");
        assert_eq!(StartIndex::Float(3.0).to_string(), "3");
    }

    #[test]
    fn test_unique_id_requires_literal_true() {
        assert!(lenient(&Options::new().unique_id(true)).unique_ids());
        assert!(!lenient(&Options::new().unique_id(false)).unique_ids());
        assert!(!lenient(&Options::new().unique_id("true")).unique_ids());
        assert!(!lenient(&Options::new().unique_id(1)).unique_ids());
    }

    #[test]
    fn test_id_numbering() {
        let resolved = lenient(&Options::new().id("row").length(3).start_id(5));
        assert_eq!(resolved.id_for(0).as_deref(), Some("row-5"));
        assert_eq!(resolved.id_for(2).as_deref(), Some("row-7"));

        let single = lenient(&Options::new().id("row"));
        assert_eq!(single.id_for(0).as_deref(), Some("row"));

        let shared = lenient(&Options::new().id("row").length(2).unique_id(false));
        assert_eq!(shared.id_for(1).as_deref(), Some("row"));
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let resolved = lenient(&Options::new().tag("").id("").class("").content(""));

        assert_eq!(resolved.tag_name(), "div");
        assert_eq!(resolved.element_id(), None);
        assert_eq!(resolved.css_class(), None);
        assert_eq!(resolved.content(), None);
    }

    #[test]
    fn test_invalid_names() {
        let resolved = lenient(&Options::new().tag("1x").attr("bad name", "v").attr("ok", "v"));
        assert_eq!(resolved.tag_name(), "div");
        assert_eq!(resolved.attributes().len(), 1);
        assert_eq!(resolved.attributes()["ok"], "v");

        assert!(matches!(
            strict(&Options::new().tag("1x")),
            Err(KreateError::InvalidName(_))
        ));
        assert!(matches!(
            strict(&Options::new().attr("bad name", "v")),
            Err(KreateError::InvalidName(_))
        ));
    }

    #[test]
    fn test_content_precedence() {
        let resolved = lenient(&Options::new().content("<b>x</b>").text("y"));
        assert_eq!(resolved.content(), Some(&Content::Html("<b>x</b>".to_string())));

        let resolved = lenient(&Options::new().text("a < b"));
        assert_eq!(resolved.content(), Some(&Content::Text("a < b".to_string())));

        assert!(matches!(
            strict(&Options::new().content("x").text("y")),
            Err(KreateError::ConflictingContent)
        ));
    }

    #[test]
    fn test_strict_rejections() {
        assert!(matches!(
            strict(&Options::new().length("3")),
            Err(KreateError::InvalidLength(_))
        ));
        assert!(matches!(
            strict(&Options::new().length(0)),
            Err(KreateError::NonPositiveLength(0))
        ));
        assert!(matches!(
            strict(&Options::new().start_id("a")),
            Err(KreateError::InvalidStartId(_))
        ));
        assert!(matches!(
            strict(&Options::new().length(f64::NAN)),
            Err(KreateError::InvalidLength(_))
        ));
        assert!(matches!(
            strict(&Options::new().unique_id("yes")),
            Err(KreateError::InvalidUniqueId(_))
        ));
        assert!(matches!(
            strict(&Options::new().output("xml")),
            Err(KreateError::UnknownOutput(_))
        ));
        assert!(matches!(
            strict(&Options::new().attr("data-x", Scalar::Unsupported)),
            Err(KreateError::InvalidAttributeValue { .. })
        ));
    }

    #[test]
    fn test_configured_defaults() {
        let defaults = DefaultsConfig::new("section", OutputKind::Html, false, 0);
        let resolved = Resolver::new(&defaults, Mode::Lenient)
            .options(&Options::new().output("nope"))
            .expect("lenient");

        assert_eq!(resolved.tag_name(), "section");
        assert_eq!(resolved.output_kind(), OutputKind::Html);
        assert!(!resolved.unique_ids());
        assert_eq!(resolved.start_index(), StartIndex::Integer(0));
    }

    #[test]
    fn test_shorthand_count_zero_means_one() {
        let defaults = DefaultsConfig::default();
        let resolver = Resolver::new(&defaults, Mode::Lenient);

        let resolved = resolver
            .shorthand(kreate_parser::parse("p"), Some(0), None)
            .expect("lenient");
        assert_eq!(resolved.count(), 1);

        let resolved = resolver
            .shorthand(kreate_parser::parse("p"), Some(4), Some("ARRAY"))
            .expect("lenient");
        assert_eq!(resolved.count(), 4);
        assert_eq!(resolved.output_kind(), OutputKind::Array);
    }
}
