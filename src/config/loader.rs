//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/planweave/config.toml)
//! 3. Project config (.planweave/config.toml)
//! 4. Environment variables (PLANWEAVE_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{PlanError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Merge global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        // Merge project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // Merge environment variables (e.g., PLANWEAVE_OUTPUT_FORMAT -> output.format)
        figment = figment.merge(Env::prefixed("PLANWEAVE_").split('_').lowercase(true));

        Self::extract(figment)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(PlanError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        debug!("Loading config from: {}", path.display());

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| PlanError::Config(format!("Configuration error: {}", e)))?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/planweave/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("planweave"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join("config.toml")
    }

    /// Get project data directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(".planweave")
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render a configuration as JSON or TOML
    pub fn render(config: &Config, as_json: bool) -> Result<String> {
        if as_json {
            Ok(serde_json::to_string_pretty(config)?)
        } else {
            toml::to_string_pretty(config).map_err(|e| PlanError::Config(e.to_string()))
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Write the default project config. Existing files are kept unless `force`.
    ///
    /// Returns the config file path and whether it was written.
    pub fn init_project(force: bool) -> Result<(PathBuf, bool)> {
        Self::init_project_in(Path::new("."), force)
    }

    /// [`ConfigLoader::init_project`] rooted at `root`
    pub fn init_project_in(root: &Path, force: bool) -> Result<(PathBuf, bool)> {
        let project_dir = root.join(Self::project_dir());
        fs::create_dir_all(&project_dir)?;

        let config_path = project_dir.join("config.toml");
        if config_path.exists() && !force {
            info!("Project config exists: {}", config_path.display());
            return Ok((config_path, false));
        }

        fs::write(&config_path, Self::default_project_config())?;
        info!("Created project config: {}", config_path.display());
        Ok((config_path, true))
    }

    /// Generate default project config content (TOML)
    fn default_project_config() -> String {
        r#"# PlanWeave Project Configuration
# Project settings override ~/.config/planweave/config.toml.
# Environment variables (PLANWEAVE_OUTPUT_FORMAT, ...) override both.

version = "1.0"

[output]
# json | yaml | outline
format = "json"
pretty = true

# Localized titles for synthesized special sections.
# Missing keys fall back to the built-in English titles.
[translations]
# "editor.section.metadata" = "Deckblatt"
# "editor.section.ancillary" = "Inhaltsverzeichnis"
# "editor.section.references" = "Quellen"
# "editor.section.tablesData" = "Tabellen und Daten"
# "editor.section.figuresImages" = "Abbildungen"
# "editor.section.appendices" = "Anhang"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use figment::Jail;
    use tempfile::TempDir;

    #[test]
    fn test_load_default_config() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());
            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_project_overrides_global() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());
            jail.create_dir("xdg")?;
            jail.create_dir("xdg/planweave")?;
            jail.create_file(
                "xdg/planweave/config.toml",
                r#"
                [output]
                format = "yaml"
                pretty = false
                "#,
            )?;
            jail.create_dir(".planweave")?;
            jail.create_file(
                ".planweave/config.toml",
                r#"
                [output]
                format = "outline"

                [translations]
                "editor.section.metadata" = "Deckblatt"
                "#,
            )?;

            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.output.format, OutputFormat::Outline);
            assert!(!config.output.pretty);
            assert_eq!(
                config.translations.get("editor.section.metadata").map(String::as_str),
                Some("Deckblatt")
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_override() {
        Jail::expect_with(|jail| {
            let xdg = jail.directory().join("xdg");
            jail.set_env("XDG_CONFIG_HOME", xdg.display());
            jail.set_env("PLANWEAVE_OUTPUT_FORMAT", "yaml");
            let config = ConfigLoader::load().map_err(|e| e.to_string())?;
            assert_eq!(config.output.format, OutputFormat::Yaml);
            Ok(())
        });
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert!(config.output.pretty);

        let missing = ConfigLoader::load_from_file(&temp_dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(PlanError::Config(_))));
    }

    #[test]
    fn test_load_from_file_validates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[translations]\n\"editor.section.metadata\" = \"\"\n").unwrap();
        assert!(ConfigLoader::load_from_file(&path).is_err());
    }

    #[test]
    fn test_init_project() {
        let temp_dir = TempDir::new().unwrap();

        let (path, written) = ConfigLoader::init_project_in(temp_dir.path(), false).unwrap();
        assert!(written);
        assert!(path.ends_with(".planweave/config.toml"));

        // Generated file parses back to the defaults
        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config, Config::default());

        let (_, rewritten) = ConfigLoader::init_project_in(temp_dir.path(), false).unwrap();
        assert!(!rewritten);
        let (_, forced) = ConfigLoader::init_project_in(temp_dir.path(), true).unwrap();
        assert!(forced);
    }

    #[test]
    fn test_render() {
        let config = Config::default();
        let json = ConfigLoader::render(&config, true).unwrap();
        assert!(json.contains("\"format\": \"json\""));
        let toml = ConfigLoader::render(&config, false).unwrap();
        assert!(toml.contains("version = \"1.0\""));
    }
}
