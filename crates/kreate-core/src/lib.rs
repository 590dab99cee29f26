//! Kreate Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Kreate crates.
//! It includes:
//!
//! - **Elements**: Detached markup nodes with ordered attributes ([`element::Element`])
//! - **Names**: Tag and attribute name validation ([`name`] module)
//! - **Collections**: The chainable wrapped collection ([`collection::Collection`])
//! - **Output**: The representations a factory can hand back ([`output::OutputKind`])

pub mod collection;
pub mod element;
pub mod name;
pub mod output;

pub use collection::{Collection, Node};
pub use element::{Content, Element};
pub use name::NameError;
pub use output::OutputKind;
