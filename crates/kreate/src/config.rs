//! Configuration types for the element factory.
//!
//! This module provides the structures that control how an
//! [`ElementFactory`](crate::ElementFactory) normalizes requests. All types
//! implement [`serde::Deserialize`] for loading from external sources, and
//! every section falls back to its defaults when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining factory and default settings.
//! - [`FactoryConfig`] - Selects lenient or strict [`Mode`].
//! - [`DefaultsConfig`] - Values used for fields a request leaves out.
//!
//! # Example
//!
//! ```
//! # use kreate::config::{AppConfig, Mode};
//! let config = AppConfig::default();
//! assert_eq!(config.factory().mode(), Mode::Lenient);
//! assert_eq!(config.defaults().tag(), "div");
//! ```

use serde::Deserialize;

use kreate_core::{OutputKind, name::DEFAULT_TAG};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Factory behavior section.
    #[serde(default)]
    factory: FactoryConfig,

    /// Request defaults section.
    #[serde(default)]
    defaults: DefaultsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `factory` - Factory behavior settings.
    /// * `defaults` - Values applied to fields a request omits.
    pub fn new(factory: FactoryConfig, defaults: DefaultsConfig) -> Self {
        Self { factory, defaults }
    }

    /// Returns the factory configuration.
    pub fn factory(&self) -> &FactoryConfig {
        &self.factory
    }

    /// Returns the request defaults.
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.defaults
    }

    /// Switches the factory to `mode`.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.factory.mode = mode;
        self
    }
}

/// How the factory treats malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Normalize every malformed input to a default and log it.
    #[default]
    Lenient,
    /// Reject malformed input with a [`KreateError`](crate::KreateError).
    Strict,
}

impl Mode {
    pub fn is_strict(&self) -> bool {
        matches!(self, Mode::Strict)
    }
}

/// Factory behavior configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FactoryConfig {
    #[serde(default)]
    mode: Mode,
}

impl FactoryConfig {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Returns the configured [`Mode`].
    pub fn mode(&self) -> Mode {
        self.mode
    }
}

/// Values used for fields a request does not set.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Tag name for elements whose request names none.
    #[serde(default = "default_tag")]
    tag: String,

    /// Output shape when a request names none, or an unknown one.
    #[serde(default)]
    output: OutputKind,

    /// Whether ids are numbered when more than one element is generated.
    #[serde(default = "default_unique_id")]
    unique_id: bool,

    /// First suffix used when numbering ids.
    #[serde(default = "default_start_id")]
    start_id: i64,
}

fn default_tag() -> String {
    DEFAULT_TAG.to_string()
}

fn default_unique_id() -> bool {
    true
}

fn default_start_id() -> i64 {
    1
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            tag: default_tag(),
            output: OutputKind::default(),
            unique_id: default_unique_id(),
            start_id: default_start_id(),
        }
    }
}

impl DefaultsConfig {
    /// Creates a new [`DefaultsConfig`].
    ///
    /// # Arguments
    ///
    /// * `tag` - Default tag name.
    /// * `output` - Default output shape.
    /// * `unique_id` - Whether ids are numbered by default.
    /// * `start_id` - First numbering suffix.
    pub fn new(tag: impl Into<String>, output: OutputKind, unique_id: bool, start_id: i64) -> Self {
        Self {
            tag: tag.into(),
            output,
            unique_id,
            start_id,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn output(&self) -> OutputKind {
        self.output
    }

    pub fn unique_id(&self) -> bool {
        self.unique_id
    }

    pub fn start_id(&self) -> i64 {
        self.start_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config");

        assert_eq!(config.factory().mode(), Mode::Lenient);
        assert_eq!(config.defaults().tag(), "div");
        assert_eq!(config.defaults().output(), OutputKind::Collection);
        assert!(config.defaults().unique_id());
        assert_eq!(config.defaults().start_id(), 1);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [factory]
            mode = "strict"

            [defaults]
            tag = "span"
            output = "HTML"
            start_id = 0
            "#,
        )
        .expect("valid config");

        assert!(config.factory().mode().is_strict());
        assert_eq!(config.defaults().tag(), "span");
        assert_eq!(config.defaults().output(), OutputKind::Html);
        assert!(config.defaults().unique_id());
        assert_eq!(config.defaults().start_id(), 0);
    }

    #[test]
    fn test_unknown_output_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[defaults]\noutput = \"xml\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_with_mode() {
        let config = AppConfig::default().with_mode(Mode::Strict);
        assert_eq!(config.factory().mode(), Mode::Strict);
    }
}
