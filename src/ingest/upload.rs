//! Upload merge
//!
//! Turns the section list extracted from an uploaded document into a
//! display-ready single-document structure: uploaded headings keep their
//! order relative to each other, well-known headings are mapped onto the
//! special ids, and missing specials are synthesized.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::catalog::Translator;
use crate::constants::{document, special, upload};
use crate::structure::{dedupe_sections, enhance, order_structure};
use crate::types::{Document, DocumentStructure, Section, SectionKind, Subsection};

/// Content extracted from an uploaded document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sections: Vec<UploadedSection>,
    #[serde(default)]
    pub has_title_page: Option<bool>,
    #[serde(default, rename = "hasTOC")]
    pub has_toc: Option<bool>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub word_count: Option<u64>,
}

/// One heading found in the upload
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadedSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, rename = "type")]
    pub section_type: Option<String>,
    #[serde(default)]
    pub raw_subsections: Option<Vec<Subsection>>,
}

/// Map a free-form heading to a section id.
///
/// English and German headings for the special sections map onto their ids;
/// anything else becomes `section_` plus the lowercased title with every
/// character outside `[a-z0-9]` replaced by `_`.
pub fn canonical_section_id(title: &str) -> String {
    let lower = title.trim().to_lowercase();
    let has = |needle: &str| lower.contains(needle);
    let has_word = |word: &str| lower.split(|c: char| !c.is_alphanumeric()).any(|w| w == word);

    let special_id = if has("title") && has("page") {
        Some(special::METADATA)
    } else if (has("table") && has("content")) || has_word("toc") || has("inhaltsverzeichnis") {
        Some(special::ANCILLARY)
    } else if has("reference") || has("quellen") || has("literatur") {
        Some(special::REFERENCES)
    } else if has("appendix") || has("appendices") || has("anhang") || has("annex") {
        Some(special::APPENDICES)
    } else if (has("table") && !has("content")) || has("data") || has("tabellen") {
        Some(special::TABLES_DATA)
    } else if has("figure") || has("image") || has("grafik") || has("abbildung") {
        Some(special::FIGURES_IMAGES)
    } else {
        None
    };

    match special_id {
        Some(id) => id.to_string(),
        None => {
            let sanitized: String = lower
                .chars()
                .map(|c| {
                    if c.is_ascii_lowercase() || c.is_ascii_digit() {
                        c
                    } else {
                        '_'
                    }
                })
                .collect();
            format!("{}{}", upload::GENERATED_ID_PREFIX, sanitized)
        }
    }
}

/// Build an ordered, enhanced structure from uploaded content
pub fn merge_uploaded_content(
    content: &UploadedContent,
    translator: &dyn Translator,
) -> DocumentStructure {
    let main_id = document::DEFAULT_MAIN_ID;
    let name = content
        .title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(document::DEFAULT_UPLOAD_NAME);

    let sections: Vec<Section> = content
        .sections
        .iter()
        .filter(|s| !s.title.trim().is_empty())
        .enumerate()
        .map(|(index, uploaded)| {
            let kind = if index < upload::REQUIRED_LEADING_SECTIONS {
                SectionKind::Required
            } else {
                SectionKind::Optional
            };
            Section {
                raw_subsections: uploaded.raw_subsections.clone(),
                content: uploaded.content.clone(),
                section_type: uploaded.section_type.clone(),
                ..Section::new(canonical_section_id(&uploaded.title), main_id, &uploaded.title)
                    .with_kind(kind)
            }
        })
        .collect();

    debug!(
        "Upload '{}': {} of {} sections kept",
        name,
        sections.len(),
        content.sections.len()
    );

    let mut extra = Map::new();
    extra.insert("source".into(), Value::String("upload".into()));
    extra.insert("createdBy".into(), Value::String("upload-merger".into()));
    extra.insert("confidenceScore".into(), Value::from(75));
    extra.insert("warnings".into(), Value::Array(Vec::new()));
    let stats = [
        ("hasTitlePage", content.has_title_page.map(Value::from)),
        ("hasTOC", content.has_toc.map(Value::from)),
        ("totalPages", content.total_pages.map(Value::from)),
        ("wordCount", content.word_count.map(Value::from)),
    ];
    for (key, value) in stats {
        if let Some(value) = value {
            extra.insert(key.into(), value);
        }
    }

    let base = DocumentStructure {
        documents: vec![Document::new(main_id, name).with_purpose(document::UPLOAD_PURPOSE)],
        sections,
        extra,
    };

    let enhanced = enhance(&base, translator);
    let deduped = enhanced.with_sections(dedupe_sections(&enhanced.sections));
    let merged = order_structure(&deduped);

    info!("Merged upload into {} sections", merged.sections.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NoTranslations;

    fn uploaded(titles: &[&str]) -> UploadedContent {
        UploadedContent {
            title: Some("Grant Proposal".into()),
            sections: titles
                .iter()
                .map(|t| UploadedSection {
                    title: t.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_canonical_section_id_specials() {
        assert_eq!(canonical_section_id("Title Page"), "metadata");
        assert_eq!(canonical_section_id("Table of Contents"), "ancillary");
        assert_eq!(canonical_section_id("TOC"), "ancillary");
        assert_eq!(canonical_section_id("Inhaltsverzeichnis"), "ancillary");
        assert_eq!(canonical_section_id("Literaturverzeichnis"), "references");
        assert_eq!(canonical_section_id("Anhang"), "appendices");
        assert_eq!(canonical_section_id("Data Tables"), "tables_data");
        assert_eq!(canonical_section_id("Abbildungen"), "figures_images");
    }

    #[test]
    fn test_canonical_section_id_generated() {
        assert_eq!(canonical_section_id("Market Analysis"), "section_market_analysis");
        assert_eq!(canonical_section_id("  Team & Co. "), "section_team___co_");
        assert_eq!(canonical_section_id("Stock Options"), "section_stock_options");
    }

    #[test]
    fn test_merge_upload() {
        let content = uploaded(&["Executive Summary", "", "Market", "Team", "Budget"]);
        let merged = merge_uploaded_content(&content, &NoTranslations);

        assert_eq!(merged.documents[0].name, "Grant Proposal");
        assert_eq!(merged.documents[0].purpose, "Primary document from upload");
        assert_eq!(
            merged.section_ids(),
            vec![
                "metadata",
                "ancillary",
                "section_executive_summary",
                "section_market",
                "section_team",
                "section_budget",
                "references",
                "tables_data",
                "figures_images",
                "appendices",
            ]
        );
        let required: Vec<bool> = merged.sections[2..6].iter().map(|s| s.required).collect();
        assert_eq!(required, vec![true, true, true, false]);
        assert_eq!(merged.extra["source"], "upload");
    }

    #[test]
    fn test_merge_upload_keeps_uploaded_specials() {
        let content = uploaded(&["Title Page", "Overview", "Overview", "Anhang"]);
        let merged = merge_uploaded_content(&content, &NoTranslations);

        let metadata = merged.find_section("metadata").unwrap();
        assert_eq!(metadata.title, "Title Page");
        assert!(metadata.required);

        let ids = merged.section_ids();
        assert_eq!(ids.iter().filter(|id| **id == "section_overview").count(), 1);
        assert_eq!(merged.find_section("appendices").unwrap().title, "Anhang");
        assert_eq!(ids.last(), Some(&"appendices"));
    }

    #[test]
    fn test_merge_upload_default_name() {
        let content = UploadedContent::default();
        let merged = merge_uploaded_content(&content, &NoTranslations);
        assert_eq!(merged.documents[0].name, "Uploaded Document");
        assert_eq!(merged.sections.len(), 6);
    }

    #[test]
    fn test_merge_upload_carries_content_and_stats() {
        let content: UploadedContent = serde_json::from_value(serde_json::json!({
            "title": "Plan",
            "hasTitlePage": false,
            "totalPages": 12,
            "sections": [
                {"title": "Summary", "content": "We build bridges.", "type": "heading"},
                {"title": "Team", "rawSubsections": [{"id": "t1", "title": "Founders"}]}
            ]
        }))
        .unwrap();
        let merged = merge_uploaded_content(&content, &NoTranslations);

        let summary = merged.find_section("section_summary").unwrap();
        assert_eq!(summary.content.as_deref(), Some("We build bridges."));
        assert_eq!(summary.section_type.as_deref(), Some("heading"));
        assert_eq!(
            merged.find_section("section_team").unwrap().subsections()[0].title,
            "Founders"
        );

        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["content"], "We build bridges.");
        assert_eq!(json["sectionType"], "heading");

        assert_eq!(merged.extra["hasTitlePage"], false);
        assert_eq!(merged.extra["totalPages"], 12);
        assert!(!merged.extra.contains_key("wordCount"));
        assert!(merged.find_section("metadata").unwrap().content.is_none());
    }

    #[test]
    fn test_deserialize_upload() {
        let content: UploadedContent = serde_json::from_value(serde_json::json!({
            "title": "Plan",
            "hasTOC": true,
            "sections": [{"title": "Intro", "type": "heading", "rawSubsections": [{"id": "s1"}]}]
        }))
        .unwrap();
        assert_eq!(content.has_toc, Some(true));
        assert_eq!(content.sections[0].section_type.as_deref(), Some("heading"));
        assert_eq!(content.sections[0].raw_subsections.as_ref().unwrap().len(), 1);
    }
}
