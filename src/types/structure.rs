//! Document structure types
//!
//! The normalized shapes the engine operates on. Loosely-shaped input is
//! converted into these at the ingestion boundary (see [`crate::ingest`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::get_section_icon;
use crate::constants::document;

/// Section requirement kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Required,
    #[default]
    Optional,
    Conditional,
}

impl SectionKind {
    /// Kind implied by a bare `required` flag
    pub fn from_required(required: bool) -> Self {
        if required {
            Self::Required
        } else {
            Self::Optional
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Conditional => "conditional",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One document of a structure. `documents[0]` is the main document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default = "default_true")]
    pub required: bool,
}

fn default_true() -> bool {
    true
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            purpose: String::new(),
            required: true,
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    /// The document used when a structure declares none
    pub fn default_main() -> Self {
        Self::new(document::DEFAULT_MAIN_ID, document::DEFAULT_MAIN_NAME)
            .with_purpose(document::DEFAULT_MAIN_PURPOSE)
    }
}

/// Subsection owned by exactly one section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subsection {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl Subsection {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: String::new(),
        }
    }
}

/// A normalized section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub document_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub required: bool,
    pub program_critical: bool,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_subsections: Option<Vec<Subsection>>,
    /// Body text carried over from an uploaded document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Producer-specific section type, e.g. the heading kind of an upload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<String>,
}

impl Section {
    /// Optional, non-critical section with the catalog icon for its id
    pub fn new(
        id: impl Into<String>,
        document_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let id = id.into();
        let icon = get_section_icon(&id).to_string();
        Self {
            id,
            document_id: document_id.into(),
            title: title.into(),
            kind: SectionKind::Optional,
            required: false,
            program_critical: false,
            icon,
            ai_prompt: None,
            checklist: Vec::new(),
            raw_subsections: None,
            content: None,
            section_type: None,
        }
    }

    /// Set the kind; `required` follows it
    pub fn with_kind(mut self, kind: SectionKind) -> Self {
        self.kind = kind;
        self.required = kind == SectionKind::Required;
        self
    }

    pub fn with_subsections(mut self, subsections: Vec<Subsection>) -> Self {
        self.raw_subsections = Some(subsections);
        self
    }

    pub fn subsections(&self) -> &[Subsection] {
        self.raw_subsections.as_deref().unwrap_or_default()
    }
}

/// Documents plus sections, with opaque caller-owned metadata carried along
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DocumentStructure {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Caller metadata (warnings, confidence score, ...) the engine never reads
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocumentStructure {
    pub fn new(documents: Vec<Document>, sections: Vec<Section>) -> Self {
        Self {
            documents,
            sections,
            extra: Map::new(),
        }
    }

    /// Id of `documents[0]`, or the default main id for an empty list
    pub fn main_document_id(&self) -> &str {
        self.documents
            .first()
            .map(|d| d.id.as_str())
            .unwrap_or(document::DEFAULT_MAIN_ID)
    }

    pub fn is_multi_document(&self) -> bool {
        self.documents.len() > 1
    }

    /// Same documents and metadata, different sections
    pub fn with_sections(&self, sections: Vec<Section>) -> Self {
        Self {
            documents: self.documents.clone(),
            sections,
            extra: self.extra.clone(),
        }
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Caller-visible warnings recorded under the `warnings` key
    pub fn warnings(&self) -> Vec<&str> {
        self.extra
            .get("warnings")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}
