//! PlanWeave - Document Structure Assembly & Canonical Ordering
//!
//! Takes the loosely-shaped structure of a business-plan document (one main
//! document, optional appendix documents, and their sections) and turns it
//! into a display-ready structure: the special sections every plan needs
//! (title page, table of contents, references, tables, figures, appendices)
//! are injected without duplicates, and sections are put into a
//! deterministic reading order.
//!
//! ## Quick Start
//!
//! ```
//! use planweave::catalog::NoTranslations;
//! use planweave::ingest::ingest_structure;
//! use planweave::structure::prepare_for_display;
//!
//! let raw = serde_json::json!({
//!     "documents": [{"id": "main", "name": "Business Plan"}],
//!     "sections": [{"id": "executive_summary", "title": "Executive Summary"}]
//! });
//! let structure = ingest_structure(&raw)?.unwrap_or_default();
//! let ready = prepare_for_display(Some(&structure), &NoTranslations).unwrap_or_default();
//! assert_eq!(ready.sections[0].id, "metadata");
//! # Ok::<(), planweave::PlanError>(())
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Special-section catalog, icons, translation lookup
//! - [`structure`]: Enhancer, canonical and hierarchical order, display view
//! - [`ingest`]: JSON ingestion boundary and upload merge
//! - [`config`]: Layered configuration
//! - [`cli`]: Command-line adapter

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod ingest;
pub mod structure;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, OutputFormat};

// Error Types
pub use types::error::{PlanError, Result, ResultExt, ValidationError, ValidationErrorKind};

// Structure Types
pub use types::{Document, DocumentStructure, Section, SectionKind, Subsection};

// Engine
pub use catalog::{SpecialSectionType, Translator, create_special_section, get_section_icon};
pub use ingest::{ingest_structure, merge_uploaded_content};
pub use structure::{
    enhance_structure, normalize_structure, organize_for_display, prepare_for_display,
    sort_canonical, sort_hierarchical,
};
