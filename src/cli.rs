use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::settings::{load_settings, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    Javascript,
    Tsx,
}

#[derive(Parser, Debug)]
#[command(name = "jsx-element-type")]
#[command(about = "Resolve the effective element type of JSX elements", long_about = None)]
pub struct Args {
    /// Path to file or directory to analyze
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Settings file (JSON or YAML), either the full lint settings or the jsx-a11y section
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Attribute whose literal value overrides the element type (e.g. as, asChild)
    #[arg(long, value_name = "NAME")]
    pub polymorphic_prop_name: Option<String>,

    /// Element name allowed to use the polymorphic prop. Can be specified multiple times.
    #[arg(long = "allow", value_name = "NAME")]
    pub allow: Vec<String>,

    /// Component mapping NAME=TYPE. Can be specified multiple times.
    #[arg(long = "component", value_name = "NAME=TYPE", value_parser = parse_component)]
    pub components: Vec<(String, String)>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Language (auto-detected from the file extension if not specified)
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Also scan files inside node_modules/
    #[arg(long)]
    pub include_node_modules: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if let Some(ref settings_path) = self.settings {
            if !settings_path.exists() {
                anyhow::bail!("Settings file does not exist: {}", settings_path.display());
            }
        }
        Ok(())
    }

    /// Settings from `--settings`, with command-line values layered on top.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let base = match &self.settings {
            Some(path) => load_settings(path)
                .with_context(|| format!("Cannot load settings: {}", path.display()))?,
            None => Settings::default(),
        };

        let mut overrides = Settings::new();
        if let Some(ref name) = self.polymorphic_prop_name {
            overrides = overrides.with_polymorphic_prop_name(name);
        }
        for name in &self.allow {
            overrides = overrides.allow(name);
        }
        for (name, element_type) in &self.components {
            overrides = overrides.with_component(name, element_type);
        }

        Ok(base.merge(overrides))
    }
}

fn parse_component(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, element_type)) if !name.is_empty() && !element_type.is_empty() => {
            Ok((name.to_string(), element_type.to_string()))
        }
        _ => Err(format!("expected NAME=TYPE, got '{value}'")),
    }
}

pub fn detect_language(file_path: &Path) -> Option<Language> {
    file_path.extension()?.to_str().and_then(|ext| match ext {
        "js" | "jsx" | "mjs" | "cjs" => Some(Language::Javascript),
        "tsx" => Some(Language::Tsx),
        _ => None,
    })
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Tsx => "tsx",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}
