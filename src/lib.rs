//! JSX Element Type
//!
//! Resolves the effective element type of JSX elements the way accessibility
//! lint rules need it: written tag name, overridden by a polymorphic prop or
//! a components mapping from the lint settings. Sources are parsed with
//! Tree-sitter.

pub mod cli;
pub mod discovery;
pub mod element;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod settings;
mod utils;

pub use element::{Attribute, AttributeValue, OpeningElement};
pub use resolver::{
    resolve_element_type, resolve_with_source, ElementTypeResolver, Resolution, ResolutionSource,
};
pub use scanner::{ElementScanner, ResolvedElement, ScanResult};
pub use settings::{LintSettings, Settings};
