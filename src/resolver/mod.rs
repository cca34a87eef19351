//! Effective element type resolution.
//!
//! Given the lint settings and a JSX opening element, decide which element
//! type the element renders as. Resolution is evaluated in a fixed order:
//!
//! 1. Names outside `polymorphicAllowList` (when one is configured) resolve
//!    to the written tag name.
//! 2. A non-empty literal value of the `polymorphicPropName` attribute.
//! 3. The `components` mapping for the tag name.
//! 4. The written tag name.

use serde::Serialize;
use tracing::trace;

use crate::element::OpeningElement;
use crate::settings::{LintSettings, Settings};

/// Which rule decided the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Name is not in the configured allow-list.
    NotAllowed,
    /// Literal value of the polymorphic prop.
    PolymorphicProp,
    /// Entry in the components mapping.
    Component,
    /// No override applied.
    TagName,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAllowed => "not_allowed",
            Self::PolymorphicProp => "polymorphic_prop",
            Self::Component => "component",
            Self::TagName => "tag_name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub element_type: &'a str,
    pub source: ResolutionSource,
}

impl<'a> Resolution<'a> {
    fn new(element_type: &'a str, source: ResolutionSource) -> Self {
        Self {
            element_type,
            source,
        }
    }
}

/// Resolve the element type of `node` under `settings`.
///
/// The returned string borrows from either the node or the settings.
pub fn resolve_element_type<'a>(settings: &'a Settings, node: &'a OpeningElement) -> &'a str {
    resolve_with_source(settings, node).element_type
}

pub fn resolve_with_source<'a>(
    settings: &'a Settings,
    node: &'a OpeningElement,
) -> Resolution<'a> {
    let tag_name = node.name.as_str();

    if !settings.is_allowed(tag_name) {
        trace!(tag_name, "not in polymorphic allow list");
        return Resolution::new(tag_name, ResolutionSource::NotAllowed);
    }

    if let Some(prop_name) = settings.polymorphic_prop_name.as_deref() {
        let value = node
            .literal_attribute(prop_name)
            .filter(|value| !value.is_empty());
        if let Some(value) = value {
            trace!(tag_name, prop_name, value, "resolved from polymorphic prop");
            return Resolution::new(value, ResolutionSource::PolymorphicProp);
        }
    }

    if let Some(mapped) = settings.component(tag_name) {
        trace!(tag_name, mapped, "resolved from components mapping");
        return Resolution::new(mapped, ResolutionSource::Component);
    }

    Resolution::new(tag_name, ResolutionSource::TagName)
}

/// Resolver bound to one settings object, shared by every element a rule
/// visits.
#[derive(Debug, Clone, Default)]
pub struct ElementTypeResolver {
    settings: Settings,
}

impl ElementTypeResolver {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn from_lint_settings(settings: &LintSettings) -> Self {
        Self::new(settings.element_settings())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolve<'a>(&'a self, node: &'a OpeningElement) -> &'a str {
        resolve_element_type(&self.settings, node)
    }

    pub fn resolve_with_source<'a>(&'a self, node: &'a OpeningElement) -> Resolution<'a> {
        resolve_with_source(&self.settings, node)
    }
}
