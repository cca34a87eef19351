//! Tree-sitter adapter for JSX sources.
//!
//! Turns JavaScript/JSX and TSX text into tree-sitter trees, and JSX
//! opening-element nodes into [`crate::element::OpeningElement`] values for
//! the resolver.

mod jsx;

pub use jsx::{is_opening_element, opening_element_from_node};

use tracing::trace;
use tree_sitter::{Language as Grammar, Parser, Tree};

use crate::cli::Language;
use crate::error::ParserError;

impl Language {
    pub fn grammar(&self) -> Grammar {
        match self {
            Language::Javascript => tree_sitter_javascript::LANGUAGE.into(),
            Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

pub fn parse_source(source: &str, language: Language) -> Result<Tree, ParserError> {
    trace!(language = language.as_str(), bytes = source.len(), "parsing source");

    let mut parser = Parser::new();
    parser
        .set_language(&language.grammar())
        .map_err(|_| ParserError::language_setup_failed(language.as_str()))?;

    parser
        .parse(source, None)
        .ok_or_else(|| ParserError::parse_failed(language.as_str()))
}
