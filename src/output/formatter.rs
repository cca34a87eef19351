use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::scanner::{ResolvedElement, ScanResult};

#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub files_scanned: usize,
    pub total_elements: usize,
    pub elements: Vec<&'a ResolvedElement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<&'a str>,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn format(results: &[ScanResult], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let output = Self::build_output(results);
                Ok(serde_json::to_string_pretty(&output)?)
            }
            OutputFormat::Text => Ok(Self::format_text(results)),
        }
    }

    pub fn build_output(results: &[ScanResult]) -> JsonOutput<'_> {
        let elements: Vec<&ResolvedElement> =
            results.iter().flat_map(|r| r.elements.iter()).collect();
        let errors: Vec<&str> = results
            .iter()
            .flat_map(|r| r.errors.iter().map(String::as_str))
            .collect();

        JsonOutput {
            files_scanned: results.len(),
            total_elements: elements.len(),
            elements,
            errors,
        }
    }

    /// One `file:line:column name -> type` line per element.
    pub fn format_text(results: &[ScanResult]) -> String {
        let mut out = String::new();
        for element in results.iter().flat_map(|r| r.elements.iter()) {
            out.push_str(&format!(
                "{}:{}:{} {} -> {} ({})\n",
                element.file,
                element.line,
                element.column,
                element.name,
                element.element_type,
                element.source.as_str()
            ));
        }
        out
    }
}
