//! Structure Enhancer
//!
//! Injects missing special sections into a normalized structure without
//! duplicating anything already present. Enhancement is idempotent: a second
//! pass finds every special it would add already in place.
//!
//! - Single document: every missing special is synthesized; `appendices` is
//!   skipped when the user already has an appendix of their own.
//! - Multiple documents: the main document gets `metadata`/`ancillary`, the
//!   appendix documents keep their own sections, the shared specials are
//!   attached to the main document, and no generic `appendices` section
//!   survives.
//!
//! The output order is a candidate; callers still run the canonical or
//! hierarchical resolver before display.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::appendix::{appendix_title, has_existing_appendix};
use crate::catalog::{SpecialSectionType, Translator, create_special_section};
use crate::constants::special;
use crate::types::{DocumentStructure, Section};

/// Enhance an optional structure; `None` passes through.
pub fn enhance_structure(
    structure: Option<&DocumentStructure>,
    translator: &dyn Translator,
) -> Option<DocumentStructure> {
    structure.map(|s| enhance(s, translator))
}

/// Return a copy of `structure` with missing special sections injected
pub fn enhance(structure: &DocumentStructure, translator: &dyn Translator) -> DocumentStructure {
    let sections = if structure.is_multi_document() {
        enhance_multi_document(structure, translator)
    } else {
        enhance_single_document(structure, translator)
    };

    debug!(
        "Enhanced structure: {} documents, {} -> {} sections",
        structure.documents.len(),
        structure.sections.len(),
        sections.len()
    );

    structure.with_sections(sections)
}

fn enhance_single_document(
    structure: &DocumentStructure,
    translator: &dyn Translator,
) -> Vec<Section> {
    let main_id = structure.main_document_id();
    let existing: HashSet<&str> = structure.sections.iter().map(|s| s.id.as_str()).collect();
    let user_appendix = has_existing_appendix(&structure.sections);

    let mut leading = Vec::new();
    let mut trailing = Vec::new();

    for section_type in SpecialSectionType::ALL {
        if existing.contains(section_type.as_id()) {
            continue;
        }
        if section_type == SpecialSectionType::Appendices && user_appendix {
            debug!("Existing appendix detected, not adding generic appendices section");
            continue;
        }

        let section = create_special_section(section_type, main_id, translator, None);
        if section_type.is_leading() {
            leading.push(section);
        } else {
            trailing.push(section);
        }
    }

    leading
        .into_iter()
        .chain(structure.sections.iter().cloned())
        .chain(trailing)
        .collect()
}

fn enhance_multi_document(
    structure: &DocumentStructure,
    translator: &dyn Translator,
) -> Vec<Section> {
    let main_id = structure.main_document_id();
    let buckets = bucket_by_document(structure);
    let user_appendix = has_existing_appendix(&structure.sections);

    let main_sections: &[&Section] = buckets.get(main_id).map(Vec::as_slice).unwrap_or_default();
    let main_ids: HashSet<&str> = main_sections.iter().map(|s| s.id.as_str()).collect();

    // 1. Appendix documents, in declaration order. Leading specials found here
    //    belong to the main document: the first copy moves, later copies go.
    let mut appendix_sections: Vec<Section> = Vec::new();
    let mut relocated: Vec<Section> = Vec::new();
    let mut seen_documents: HashSet<&str> = HashSet::from([main_id]);

    for (index, doc) in structure.documents.iter().skip(1).enumerate() {
        if !seen_documents.insert(doc.id.as_str()) {
            continue;
        }
        let Some(doc_sections) = buckets.get(doc.id.as_str()) else {
            continue;
        };

        let wrapper_title = user_appendix.then(|| appendix_title(index, &doc.name));
        for section in doc_sections
            .iter()
            .filter(|s| s.id != special::APPENDICES)
            .filter(|s| wrapper_title.as_deref() != Some(s.title.as_str()))
        {
            if !special::LEADING.contains(&section.id.as_str()) {
                appendix_sections.push((*section).clone());
                continue;
            }
            if main_ids.contains(section.id.as_str())
                || relocated.iter().any(|r| r.id == section.id)
            {
                debug!(
                    "Dropping duplicate '{}' from document '{}'",
                    section.id, doc.id
                );
                continue;
            }
            debug!(
                "Moving '{}' from document '{}' to main document",
                section.id, doc.id
            );
            relocated.push(Section {
                document_id: main_id.to_string(),
                ..(*section).clone()
            });
        }
    }

    // 2. Main document: missing leading specials + its own sections
    let main_specials: Vec<Section> = SpecialSectionType::LEADING
        .into_iter()
        .filter(|t| !main_ids.contains(t.as_id()) && !relocated.iter().any(|r| r.id == t.as_id()))
        .map(|t| create_special_section(t, main_id, translator, None))
        .collect();

    let main_body = main_sections
        .iter()
        .filter(|s| s.id != special::APPENDICES)
        .map(|s| (*s).clone());

    // 3. Shared specials, attached to the main document
    let present: HashSet<&str> = main_ids
        .iter()
        .copied()
        .chain(appendix_sections.iter().map(|s| s.id.as_str()))
        .collect();

    let shared: Vec<Section> = SpecialSectionType::SHARED
        .into_iter()
        .filter(|t| !present.contains(t.as_id()))
        .map(|t| create_special_section(t, main_id, translator, None))
        .collect();

    main_specials
        .into_iter()
        .chain(relocated)
        .chain(main_body)
        .chain(appendix_sections)
        .chain(shared)
        .filter(|s| s.id != special::APPENDICES)
        .collect()
}

/// Group sections by document, sending unresolved document ids to the main document
fn bucket_by_document(structure: &DocumentStructure) -> HashMap<&str, Vec<&Section>> {
    let main_id = structure.main_document_id();
    let known: HashSet<&str> = structure.documents.iter().map(|d| d.id.as_str()).collect();

    let mut buckets: HashMap<&str, Vec<&Section>> = HashMap::new();
    for section in &structure.sections {
        let target = if known.contains(section.document_id.as_str()) {
            section.document_id.as_str()
        } else {
            debug!(
                "Section '{}' references unknown document '{}', assigning to main",
                section.id, section.document_id
            );
            main_id
        };
        buckets.entry(target).or_default().push(section);
    }
    buckets
}
