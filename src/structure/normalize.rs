//! Structure normalization
//!
//! Fills in the pieces the engine assumes (a main document, resolvable
//! document ids, unique section ids) and applies the display order.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::order_structure;
use crate::types::{Document, DocumentStructure, Section};

/// Ensure a main document exists, attach unresolved sections to it, and order.
pub fn normalize_structure(structure: &DocumentStructure) -> DocumentStructure {
    let documents = if structure.documents.is_empty() {
        debug!("Structure has no documents, adding default main document");
        vec![Document::default_main()]
    } else {
        structure.documents.clone()
    };

    let main_id = documents[0].id.clone();
    let known: HashSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();

    let sections = structure
        .sections
        .iter()
        .map(|section| {
            if known.contains(section.document_id.as_str()) {
                section.clone()
            } else {
                Section {
                    document_id: main_id.clone(),
                    ..section.clone()
                }
            }
        })
        .collect();

    let normalized = DocumentStructure {
        documents,
        sections,
        extra: structure.extra.clone(),
    };
    order_structure(&normalized)
}

/// Drop sections whose id repeats an earlier one; the first occurrence wins.
pub fn dedupe_sections(sections: &[Section]) -> Vec<Section> {
    let mut seen = HashSet::new();
    sections
        .iter()
        .filter(|section| {
            let first = seen.insert(section.id.as_str());
            if !first {
                warn!("Dropping duplicate section '{}'", section.id);
            }
            first
        })
        .cloned()
        .collect()
}
