//! Ingestion Boundary
//!
//! Converts loosely-shaped JSON (editor state, templates, upload analysis)
//! into the normalized [`DocumentStructure`] the engine works on.
//!
//! Input problems never abort ingestion. Unusable elements are dropped, a
//! `warn!` is logged, and a human-readable note is appended to the
//! structure's `warnings` metadata so callers can surface it. Only input that
//! is not an object at all is rejected.

mod upload;

pub use upload::{UploadedContent, UploadedSection, canonical_section_id, merge_uploaded_content};

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::warn;

use crate::catalog::get_section_icon;
use crate::constants::document;
use crate::types::{
    Document, DocumentStructure, Result, Section, SectionKind, Subsection, ValidationError,
    ValidationErrorKind, json_array, json_bool, json_non_empty_string, json_string,
    json_string_array, json_string_or,
};

const WARNINGS_KEY: &str = "warnings";

/// Ingest a raw structure. `null` yields `Ok(None)`.
pub fn ingest_structure(value: &Value) -> Result<Option<DocumentStructure>> {
    let object = match value {
        Value::Null => return Ok(None),
        Value::Object(object) => object,
        other => {
            return Err(ValidationError::new(
                ValidationErrorKind::Format,
                format!("expected a JSON object, got {}", json_type_name(other)),
            )
            .with_field("structure")
            .into());
        }
    };

    let mut ingest = Ingest::new(object);
    let documents = ingest.documents(value);
    let main_id = documents
        .first()
        .map(|d| d.id.clone())
        .unwrap_or_else(|| document::DEFAULT_MAIN_ID.to_string());
    let sections = ingest.sections(value, &main_id);

    Ok(Some(DocumentStructure {
        documents,
        sections,
        extra: ingest.into_extra(object),
    }))
}

/// Collects warnings while walking one input object
struct Ingest {
    warnings: Vec<Value>,
}

impl Ingest {
    fn new(object: &Map<String, Value>) -> Self {
        let warnings = object
            .get(WARNINGS_KEY)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        Self { warnings }
    }

    fn warn(&mut self, err: ValidationError) {
        warn!("{}", err);
        self.warnings.push(Value::String(err.to_string()));
    }

    fn documents(&mut self, value: &Value) -> Vec<Document> {
        let mut documents = Vec::new();
        for (index, raw) in json_array(value, "documents").iter().enumerate() {
            let Some(id) = json_non_empty_string(raw, "id") else {
                self.warn(
                    ValidationError::new(ValidationErrorKind::MissingField, "document has no id; dropped")
                        .with_field(format!("documents[{index}]")),
                );
                continue;
            };
            documents.push(Document {
                name: json_non_empty_string(raw, "name").unwrap_or_else(|| id.clone()),
                purpose: json_string_or(raw, "purpose", ""),
                required: json_bool(raw, "required", true),
                id,
            });
        }
        documents
    }

    fn sections(&mut self, value: &Value, main_id: &str) -> Vec<Section> {
        let mut seen = HashSet::new();
        let mut sections = Vec::new();

        for (index, raw) in json_array(value, "sections").iter().enumerate() {
            let field = format!("sections[{index}]");
            let Some(id) = json_non_empty_string(raw, "id") else {
                self.warn(
                    ValidationError::new(ValidationErrorKind::MissingField, "section has no id; dropped")
                        .with_field(field),
                );
                continue;
            };
            if !seen.insert(id.clone()) {
                self.warn(
                    ValidationError::new(
                        ValidationErrorKind::Duplicate,
                        format!("duplicate section id '{id}'; later occurrence dropped"),
                    )
                    .with_field(field),
                );
                continue;
            }

            let section = if json_string(raw, "title").is_some() {
                read_section(raw, id, main_id)
            } else {
                convert_section_template(raw, id, main_id)
            };
            sections.push(section);
        }
        sections
    }

    fn into_extra(self, object: &Map<String, Value>) -> Map<String, Value> {
        let mut extra: Map<String, Value> = object
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "documents" | "sections" | WARNINGS_KEY))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        if !self.warnings.is_empty() || object.contains_key(WARNINGS_KEY) {
            extra.insert(WARNINGS_KEY.to_string(), Value::Array(self.warnings));
        }
        extra
    }
}

/// A section that already carries the normalized shape
fn read_section(raw: &Value, id: String, main_id: &str) -> Section {
    let required_flag = raw.get("required").and_then(Value::as_bool);
    let kind = raw
        .get("type")
        .and_then(|v| serde_json::from_value::<SectionKind>(v.clone()).ok())
        .unwrap_or_else(|| SectionKind::from_required(required_flag.unwrap_or(false)));

    Section {
        document_id: json_non_empty_string(raw, "documentId")
            .unwrap_or_else(|| main_id.to_string()),
        title: json_string(raw, "title").unwrap_or_default(),
        kind,
        required: required_flag.unwrap_or(kind == SectionKind::Required),
        program_critical: json_bool(raw, "programCritical", false),
        icon: json_non_empty_string(raw, "icon")
            .unwrap_or_else(|| get_section_icon(&id).to_string()),
        ai_prompt: json_non_empty_string(raw, "aiPrompt"),
        checklist: json_string_array(raw, "checklist"),
        raw_subsections: read_subsections(raw),
        content: json_string(raw, "content"),
        section_type: json_non_empty_string(raw, "sectionType"),
        id,
    }
}

/// A program-template section: no title, possibly a `name`, prompts optional
fn convert_section_template(raw: &Value, id: String, main_id: &str) -> Section {
    let title = json_non_empty_string(raw, "title")
        .or_else(|| json_non_empty_string(raw, "name"))
        .unwrap_or_default();
    let required = json_bool(raw, "required", true);

    let checklist = if raw.get("checklist").is_some_and(Value::is_array) {
        json_string_array(raw, "checklist")
    } else {
        vec![format!("Address {title} requirements")]
    };

    Section {
        document_id: json_non_empty_string(raw, "documentId")
            .unwrap_or_else(|| main_id.to_string()),
        kind: SectionKind::from_required(required),
        required,
        program_critical: false,
        icon: get_section_icon(&id).to_string(),
        ai_prompt: Some(
            json_non_empty_string(raw, "aiPrompt")
                .unwrap_or_else(|| format!("Write detailed content for {title}")),
        ),
        checklist,
        raw_subsections: read_subsections(raw),
        content: json_string(raw, "content"),
        section_type: json_non_empty_string(raw, "sectionType"),
        title,
        id,
    }
}

fn read_subsections(raw: &Value) -> Option<Vec<Subsection>> {
    raw.get("rawSubsections")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| serde_json::from_value::<Subsection>(item.clone()).ok())
                .collect()
        })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlanError;
    use serde_json::json;

    #[test]
    fn test_null_is_none() {
        assert!(ingest_structure(&Value::Null).unwrap().is_none());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = ingest_structure(&json!([1, 2])).unwrap_err();
        match err {
            PlanError::Ingest(e) => {
                assert_eq!(e.kind, ValidationErrorKind::Format);
                assert!(e.message.contains("array"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_arrays_are_empty() {
        let structure = ingest_structure(&json!({"sections": "nope"})).unwrap().unwrap();
        assert!(structure.documents.is_empty());
        assert!(structure.sections.is_empty());
        assert!(structure.warnings().is_empty());
    }

    #[test]
    fn test_fully_shaped_section() {
        let structure = ingest_structure(&json!({
            "documents": [{"id": "main", "name": "Plan"}],
            "sections": [{
                "id": "market_analysis",
                "documentId": "main",
                "title": "Market Analysis",
                "type": "conditional",
                "required": false,
                "programCritical": true,
                "content": "Market is large.",
                "sectionType": "heading",
                "rawSubsections": [{"id": "m1", "title": "Size"}, {"title": "no id"}]
            }]
        }))
        .unwrap()
        .unwrap();

        let section = &structure.sections[0];
        assert_eq!(section.kind, SectionKind::Conditional);
        assert!(!section.required);
        assert!(section.program_critical);
        assert_eq!(section.icon, "🧾");
        assert_eq!(section.subsections().len(), 1);
        assert!(section.ai_prompt.is_none());
        assert_eq!(section.content.as_deref(), Some("Market is large."));
        assert_eq!(section.section_type.as_deref(), Some("heading"));
    }

    #[test]
    fn test_section_defaults_to_main_document() {
        let structure = ingest_structure(&json!({
            "documents": [{"id": "plan"}],
            "sections": [{"id": "references", "title": "Refs", "required": true}]
        }))
        .unwrap()
        .unwrap();

        assert_eq!(structure.documents[0].name, "plan");
        assert!(structure.documents[0].required);
        let section = &structure.sections[0];
        assert_eq!(section.document_id, "plan");
        assert_eq!(section.kind, SectionKind::Required);
        assert_eq!(section.icon, "📚");

        let bare = ingest_structure(&json!({"sections": [{"id": "a", "title": "A"}]}))
            .unwrap()
            .unwrap();
        assert_eq!(bare.sections[0].document_id, "main_document");
        assert_eq!(bare.sections[0].kind, SectionKind::Optional);
    }

    #[test]
    fn test_template_section_conversion() {
        let structure = ingest_structure(&json!({
            "sections": [
                {"id": "team", "name": "Team"},
                {"id": "risks", "name": "Risks", "required": false, "checklist": []}
            ]
        }))
        .unwrap()
        .unwrap();

        let team = &structure.sections[0];
        assert_eq!(team.title, "Team");
        assert!(team.required);
        assert_eq!(team.kind, SectionKind::Required);
        assert!(!team.program_critical);
        assert_eq!(team.ai_prompt.as_deref(), Some("Write detailed content for Team"));
        assert_eq!(team.checklist, vec!["Address Team requirements"]);

        let risks = &structure.sections[1];
        assert!(!risks.required);
        assert_eq!(risks.kind, SectionKind::Optional);
        assert!(risks.checklist.is_empty());
    }

    #[test]
    fn test_drops_and_warns() {
        let structure = ingest_structure(&json!({
            "documents": [{"name": "no id"}, {"id": "main"}],
            "sections": [
                {"title": "No id"},
                {"id": "a", "title": "First"},
                {"id": "a", "title": "Second"}
            ],
            "warnings": ["low confidence"]
        }))
        .unwrap()
        .unwrap();

        assert_eq!(structure.documents.len(), 1);
        assert_eq!(structure.section_ids(), vec!["a"]);
        assert_eq!(structure.sections[0].title, "First");

        let warnings = structure.warnings();
        assert_eq!(warnings.len(), 4);
        assert_eq!(warnings[0], "low confidence");
        assert!(warnings[1].contains("documents[0]"));
        assert!(warnings[2].contains("sections[0]"));
        assert!(warnings[3].contains("duplicate section id 'a'"));
    }

    #[test]
    fn test_preserves_caller_metadata() {
        let structure = ingest_structure(&json!({
            "structureId": "s-42",
            "confidenceScore": 80,
            "sections": []
        }))
        .unwrap()
        .unwrap();

        assert_eq!(structure.extra["structureId"], "s-42");
        assert_eq!(structure.extra["confidenceScore"], 80);
        assert!(!structure.extra.contains_key("warnings"));
    }
}
