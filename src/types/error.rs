//! Unified Error Type System
//!
//! Centralized error types for the crate.
//!
//! The structure engine itself is total and never fails. Errors only arise at
//! the edges: ingesting loosely-shaped JSON, loading configuration, and the
//! CLI reading or writing files.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structured ingestion-boundary error with context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What validation failed
    pub kind: ValidationErrorKind,
    /// Field or element that failed validation
    pub field: Option<String>,
    /// Detailed message
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Validation failed for '{}': {}", field, self.message)
        } else {
            write!(f, "Validation failed: {}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            field: None,
            message: message.into(),
        }
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::General, message)
    }
}

/// Validation error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Required field missing (e.g. a section without an id)
    MissingField,
    /// Value has the wrong JSON type
    Format,
    /// Identity collides with an earlier element
    Duplicate,
    /// General validation error
    General,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField => write!(f, "MISSING_FIELD"),
            Self::Format => write!(f, "FORMAT"),
            Self::Duplicate => write!(f, "DUPLICATE"),
            Self::General => write!(f, "GENERAL"),
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum PlanError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Ingest error: {0}")]
    Ingest(ValidationError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Cannot read {path}: {message}")]
    Input { path: PathBuf, message: String },
}

impl From<ValidationError> for PlanError {
    fn from(err: ValidationError) -> Self {
        PlanError::Ingest(err)
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the error was caused by the shape of the caller's data rather
    /// than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::Ingest(_) | Self::Json(_) | Self::Yaml(_))
    }
}

/// Context extension trait for attaching a source path to errors
pub trait ResultExt<T> {
    /// Attach the path that was being processed
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| PlanError::input(path, e.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ValidationErrorKind::MissingField, "section has no id")
            .with_field("sections[2]");
        assert_eq!(
            err.to_string(),
            "Validation failed for 'sections[2]': section has no id"
        );

        let bare = ValidationError::from_message("not an object");
        assert_eq!(bare.to_string(), "Validation failed: not an object");
        assert_eq!(bare.kind, ValidationErrorKind::General);
    }

    #[test]
    fn test_validation_error_converts() {
        let err: PlanError = ValidationError::new(ValidationErrorKind::Format, "bad").into();
        assert!(matches!(err, PlanError::Ingest(_)));
        assert!(err.is_data_error());
    }

    #[test]
    fn test_with_path_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = io.with_path("plan.json").unwrap_err();
        assert_eq!(err.to_string(), "Cannot read plan.json: no such file");
        assert!(!err.is_data_error());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValidationErrorKind::Duplicate.to_string(), "DUPLICATE");
        assert_eq!(ValidationErrorKind::MissingField.to_string(), "MISSING_FIELD");
    }
}
