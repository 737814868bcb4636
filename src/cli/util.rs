//! CLI Common Utilities
//!
//! Shared initialization and input handling for CLI commands.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::catalog::StaticTranslations;
use crate::config::{Config, ConfigLoader, OutputFormat};
use crate::ingest::ingest_structure;
use crate::types::{DocumentStructure, PlanError, Result, ResultExt};

/// Input path that means "read standard input"
pub const STDIN_PATH: &str = "-";

/// Command execution context
///
/// Configuration resolved once per invocation, with the CLI format override
/// already applied.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Loaded configuration
    pub config: Config,
    /// Effective output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load configuration from `config_path`, or through the full resolution
    /// chain when no explicit file was given.
    pub fn load(config_path: Option<&Path>, format: Option<OutputFormat>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self::with_config(config, format))
    }

    pub fn with_config(config: Config, format: Option<OutputFormat>) -> Self {
        let format = format.unwrap_or(config.output.format);
        Self { config, format }
    }

    pub fn translator(&self) -> StaticTranslations {
        self.config.translator()
    }

    pub fn pretty(&self) -> bool {
        self.config.output.pretty
    }
}

/// Read a JSON document from a file, or from stdin for `-`
pub fn read_json(path: &Path) -> Result<Value> {
    let text = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .with_path("<stdin>")?;
        buf
    } else {
        fs::read_to_string(path).with_path(path)?
    };
    debug!("Read {} bytes from {}", text.len(), path.display());

    serde_json::from_str(&text).with_path(display_path(path))
}

/// Read and ingest a structure. A `null` document is an input error here.
pub fn read_structure(path: &Path) -> Result<DocumentStructure> {
    let value = read_json(path)?;
    ingest_structure(&value)?
        .ok_or_else(|| PlanError::input(display_path(path), "document is null"))
}

fn display_path(path: &Path) -> PathBuf {
    if path == Path::new(STDIN_PATH) {
        PathBuf::from("<stdin>")
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_structure_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.json");
        fs::write(
            &path,
            r#"{"documents": [{"id": "main"}], "sections": [{"id": "a", "title": "A"}]}"#,
        )
        .unwrap();

        let structure = read_structure(&path).unwrap();
        assert_eq!(structure.section_ids(), vec!["a"]);
    }

    #[test]
    fn test_read_structure_errors() {
        let temp_dir = TempDir::new().unwrap();

        let missing = read_structure(&temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, PlanError::Input { .. }));

        let null = temp_dir.path().join("null.json");
        fs::write(&null, "null").unwrap();
        let err = read_structure(&null).unwrap_err();
        assert!(err.to_string().contains("document is null"));

        let garbage = temp_dir.path().join("garbage.json");
        fs::write(&garbage, "{not json").unwrap();
        assert!(matches!(
            read_structure(&garbage).unwrap_err(),
            PlanError::Input { .. }
        ));

        let array = temp_dir.path().join("array.json");
        fs::write(&array, "[]").unwrap();
        assert!(read_structure(&array).unwrap_err().is_data_error());
    }

    #[test]
    fn test_context_format_override() {
        let context = CommandContext::with_config(Config::default(), Some(OutputFormat::Yaml));
        assert_eq!(context.format, OutputFormat::Yaml);

        let context = CommandContext::with_config(Config::default(), None);
        assert_eq!(context.format, OutputFormat::Json);
        assert!(context.pretty());
    }
}
