//! Hierarchical display view
//!
//! Groups an already-enhanced structure the way an editor sidebar shows it:
//! the main document, one block per appendix document, then the shared
//! specials. Nothing is synthesized here.

use std::collections::HashSet;

use serde::Serialize;

use super::appendix::appendix_title;
use super::canonical::sort_canonical;
use super::hierarchical::{HierarchyContext, sort_hierarchical};
use crate::types::{DocumentStructure, Section};

/// Sections of the main document
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: String,
    pub name: String,
    pub sections: Vec<Section>,
}

/// Sections of one appendix document
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppendixView {
    pub id: String,
    pub name: String,
    /// `Appendix {Letter}: {name}`
    pub display_name: String,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalView {
    pub main: DocumentView,
    pub appendices: Vec<AppendixView>,
    pub shared: Vec<Section>,
}

impl HierarchicalView {
    pub fn section_count(&self) -> usize {
        self.main.sections.len()
            + self
                .appendices
                .iter()
                .map(|a| a.sections.len())
                .sum::<usize>()
            + self.shared.len()
    }
}

/// Group `structure` for display; `None` passes through.
pub fn organize_for_display(structure: Option<&DocumentStructure>) -> Option<HierarchicalView> {
    structure.map(organize)
}

fn organize(structure: &DocumentStructure) -> HierarchicalView {
    let main_id = structure.main_document_id().to_string();
    let main_name = structure
        .documents
        .first()
        .map(|d| d.name.clone())
        .unwrap_or_else(|| crate::constants::document::DEFAULT_MAIN_NAME.to_string());

    if !structure.is_multi_document() {
        return HierarchicalView {
            main: DocumentView {
                id: main_id,
                name: main_name,
                sections: sort_canonical(&structure.sections),
            },
            appendices: Vec::new(),
            shared: Vec::new(),
        };
    }

    let context = HierarchyContext::new(&structure.documents);
    let ordered = sort_hierarchical(&structure.sections, &structure.documents);

    let mut main_sections = Vec::new();
    let mut shared = Vec::new();
    for section in &ordered {
        if HierarchyContext::is_shared(section) {
            shared.push(section.clone());
        } else if !context.is_appendix(section) {
            main_sections.push(section.clone());
        }
    }

    let mut seen: HashSet<&str> = HashSet::from([main_id.as_str()]);
    let appendices = structure
        .documents
        .iter()
        .skip(1)
        .enumerate()
        .filter(|(_, doc)| seen.insert(doc.id.as_str()))
        .map(|(index, doc)| AppendixView {
            id: doc.id.clone(),
            name: doc.name.clone(),
            display_name: appendix_title(index, &doc.name),
            sections: ordered
                .iter()
                .filter(|s| s.document_id == doc.id && !HierarchyContext::is_shared(s))
                .cloned()
                .collect(),
        })
        .collect();

    HierarchicalView {
        main: DocumentView {
            id: main_id,
            name: main_name,
            sections: main_sections,
        },
        appendices,
        shared,
    }
}
