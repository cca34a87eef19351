mod loader;

pub use loader::{load_settings, parse_settings, SettingsFormat};

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Key of the resolver's section inside the host lint settings.
pub const SETTINGS_KEY: &str = "jsx-a11y";

/// Element-type resolution settings.
///
/// Every field is optional; a missing field disables the matching feature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Attribute whose literal value replaces the element type, e.g. `as` or `asChild`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polymorphic_prop_name: Option<String>,

    /// When set, only these element names take part in polymorphic or
    /// component resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polymorphic_allow_list: Option<HashSet<String>>,

    /// Custom component name to the element type it renders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<HashMap<String, String>>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_polymorphic_prop_name(mut self, name: impl Into<String>) -> Self {
        self.polymorphic_prop_name = Some(name.into());
        self
    }

    pub fn allow(mut self, name: impl Into<String>) -> Self {
        self.polymorphic_allow_list
            .get_or_insert_with(HashSet::new)
            .insert(name.into());
        self
    }

    pub fn with_component(
        mut self,
        name: impl Into<String>,
        element_type: impl Into<String>,
    ) -> Self {
        self.components
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), element_type.into());
        self
    }

    /// Layers `other` on top of `self`.
    ///
    /// The prop name is replaced when `other` sets one; allow-list entries
    /// are added and component entries are added or replaced.
    pub fn merge(mut self, other: Settings) -> Self {
        if other.polymorphic_prop_name.is_some() {
            self.polymorphic_prop_name = other.polymorphic_prop_name;
        }
        if let Some(names) = other.polymorphic_allow_list {
            self.polymorphic_allow_list
                .get_or_insert_with(HashSet::new)
                .extend(names);
        }
        if let Some(components) = other.components {
            self.components
                .get_or_insert_with(HashMap::new)
                .extend(components);
        }
        self
    }

    pub fn is_allowed(&self, name: &str) -> bool {
        self.polymorphic_allow_list
            .as_ref()
            .is_none_or(|names| names.contains(name))
    }

    pub fn component(&self, name: &str) -> Option<&str> {
        self.components
            .as_ref()
            .and_then(|components| components.get(name))
            .map(String::as_str)
    }
}

/// Settings object of the host lint engine. Only the `jsx-a11y` section is
/// read; sections belonging to other plugins are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintSettings {
    #[serde(rename = "jsx-a11y", default, skip_serializing_if = "Option::is_none")]
    pub jsx_a11y: Option<Settings>,
}

impl LintSettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            jsx_a11y: Some(settings),
        }
    }

    pub fn element_settings(&self) -> Settings {
        self.jsx_a11y.clone().unwrap_or_default()
    }
}
