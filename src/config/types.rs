//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/planweave/) and project (.planweave/) level configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::StaticTranslations;
use crate::types::{PlanError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// How the CLI renders results
    pub output: OutputConfig,

    /// Localized special-section titles keyed by catalog title key
    /// (e.g. `editor.section.metadata`)
    pub translations: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            output: OutputConfig::default(),
            translations: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `PlanError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(PlanError::Config("version must not be empty".to_string()));
        }

        if let Some((key, _)) = self
            .translations
            .iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(PlanError::Config(format!(
                "translation for '{}' must not be empty",
                key
            )));
        }

        Ok(())
    }

    /// Translator backed by the `[translations]` table
    pub fn translator(&self) -> StaticTranslations {
        StaticTranslations::new(self.translations.clone())
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default rendering for structure commands
    pub format: OutputFormat,

    /// Pretty-print JSON
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Outline,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Outline => write!(f, "outline"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "outline" | "text" => Ok(OutputFormat::Outline),
            _ => Err(format!(
                "Unknown output format: {}. Valid values: json, yaml, outline",
                s
            )),
        }
    }
}
