//! Shared test utilities for element type resolution tests

use jsx_element_type::cli::Language;
use jsx_element_type::{
    Attribute, ElementScanner, ElementTypeResolver, OpeningElement, ScanResult, Settings,
};

/// Opening element with the given literal attributes, in order.
pub fn element(name: &str, attributes: &[(&str, &str)]) -> OpeningElement {
    attributes
        .iter()
        .fold(OpeningElement::new(name), |element, (attr, value)| {
            element.with_attribute(Attribute::literal(*attr, *value))
        })
}

/// Resolve `element` and return an owned copy of the result.
pub fn resolve(settings: &Settings, element: &OpeningElement) -> String {
    ElementTypeResolver::new(settings.clone())
        .resolve(element)
        .to_string()
}

/// Settings used by the allow-list scenarios.
pub fn allow_list_settings() -> Settings {
    Settings::new()
        .with_polymorphic_prop_name("asChild")
        .allow("Box")
        .allow("Icon")
        .with_component("Box", "div")
        .with_component("Icon", "svg")
}

/// Scan JSX source with the given settings
pub fn scan_jsx(source: &str, settings: Settings) -> ScanResult {
    ElementScanner::new(ElementTypeResolver::new(settings)).scan_source(
        source,
        "test.jsx",
        Language::Javascript,
    )
}

/// Scan TSX source with the given settings
pub fn scan_tsx(source: &str, settings: Settings) -> ScanResult {
    ElementScanner::new(ElementTypeResolver::new(settings)).scan_source(
        source,
        "test.tsx",
        Language::Tsx,
    )
}
