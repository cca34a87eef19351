use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::{Settings, SETTINGS_KEY};
use crate::error::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match extension {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(SettingsError::unsupported_format(extension)),
        }
    }
}

/// Load resolver settings from a JSON or YAML file.
///
/// The file may hold the whole host settings object (`{"jsx-a11y": {...}}`)
/// or just the `jsx-a11y` section.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading settings");

    let format = SettingsFormat::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| SettingsError::read_error(path, e.to_string()))?;

    let settings = parse_settings(&content, format)
        .map_err(|message| SettingsError::parse_error(path, message))?;

    debug!(
        polymorphic_prop = settings.polymorphic_prop_name.as_deref().unwrap_or(""),
        allow_list = settings.polymorphic_allow_list.as_ref().map_or(0, |l| l.len()),
        components = settings.components.as_ref().map_or(0, |c| c.len()),
        "settings loaded"
    );
    Ok(settings)
}

/// Parse settings text. Errors are returned as plain messages so callers can
/// attach the source location.
pub fn parse_settings(content: &str, format: SettingsFormat) -> Result<Settings, String> {
    if content.trim().is_empty() {
        trace!("empty settings document");
        return Ok(Settings::default());
    }

    let document: serde_json::Value = match format {
        SettingsFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
        SettingsFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
    };

    let section = match document.get(SETTINGS_KEY) {
        Some(section) => {
            trace!(key = SETTINGS_KEY, "reading nested settings section");
            section.clone()
        }
        None => document,
    };

    if section.is_null() {
        return Ok(Settings::default());
    }

    serde_json::from_value(section).map_err(|e| e.to_string())
}
