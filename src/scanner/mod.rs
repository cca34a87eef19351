use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};
use tree_sitter::{Node, Tree};

use crate::cli::{detect_language, Language};
use crate::error::{IoError, ParserError, Result};
use crate::parser::{opening_element_from_node, parse_source};
use crate::resolver::{ElementTypeResolver, ResolutionSource};

/// One JSX opening element together with its resolved element type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedElement {
    pub file: String,
    pub line: usize,
    pub column: usize,
    pub name: String,
    pub element_type: String,
    pub source: ResolutionSource,
    pub raw_text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub file_path: String,
    pub elements: Vec<ResolvedElement>,
    pub errors: Vec<String>,
}

impl ScanResult {
    pub fn new(file_path: String) -> Self {
        Self {
            file_path,
            elements: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn add_element(&mut self, element: ResolvedElement) {
        self.elements.push(element);
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Resolved types in source order.
    pub fn element_types(&self) -> Vec<&str> {
        self.elements
            .iter()
            .map(|e| e.element_type.as_str())
            .collect()
    }
}

/// Walks parsed JSX sources and resolves every named opening element.
#[derive(Debug, Clone, Default)]
pub struct ElementScanner {
    resolver: ElementTypeResolver,
}

impl ElementScanner {
    pub fn new(resolver: ElementTypeResolver) -> Self {
        Self { resolver }
    }

    /// Read and scan a file. The language is detected from the extension
    /// unless given.
    pub fn scan_file(&self, path: &Path, language: Option<Language>) -> Result<ScanResult> {
        let language = match language.or_else(|| detect_language(path)) {
            Some(language) => language,
            None => {
                let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                return Err(ParserError::unsupported_language(extension).into());
            }
        };

        if !path.is_file() {
            return Err(IoError::file_not_found(path).into());
        }
        let source = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;

        Ok(self.scan_source(&source, &path.display().to_string(), language))
    }

    pub fn scan_source(&self, source: &str, file_path: &str, language: Language) -> ScanResult {
        match parse_source(source, language) {
            Ok(tree) => self.scan_tree(&tree, source.as_bytes(), file_path),
            Err(e) => {
                warn!(file_path, error = %e, "failed to parse source");
                let mut result = ScanResult::new(file_path.to_string());
                result.add_error(e.to_string());
                result
            }
        }
    }

    pub fn scan_tree(&self, tree: &Tree, source: &[u8], file_path: &str) -> ScanResult {
        trace!(file_path, "scanning tree");

        let mut result = ScanResult::new(file_path.to_string());
        let root = tree.root_node();
        if root.has_error() {
            warn!(file_path, "source contains syntax errors");
            result.add_error(format!("{file_path}: source contains syntax errors"));
        }

        self.traverse_node(root, source, &mut result);

        debug!(
            file_path,
            elements = result.element_count(),
            errors = result.errors.len(),
            "scan complete"
        );
        result
    }

    fn traverse_node(&self, node: Node, source: &[u8], result: &mut ScanResult) {
        if let Some(element) = opening_element_from_node(&node, source) {
            let resolution = self.resolver.resolve_with_source(&element);
            let position = node.start_position();
            let line_start = node.start_byte() - position.column;

            result.add_element(ResolvedElement {
                file: result.file_path.clone(),
                line: position.row + 1,
                column: char_column(source, line_start, node.start_byte()),
                name: element.name.clone(),
                element_type: resolution.element_type.to_string(),
                source: resolution.source,
                raw_text: String::from_utf8_lossy(&source[node.start_byte()..node.end_byte()])
                    .to_string(),
            });
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse_node(child, source, result);
        }
    }
}

/// 1-based column in characters; tree-sitter columns count bytes.
fn char_column(source: &[u8], line_start: usize, offset: usize) -> usize {
    String::from_utf8_lossy(&source[line_start..offset])
        .chars()
        .count()
        + 1
}
