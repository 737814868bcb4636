//! Hierarchical Order Resolver
//!
//! Deterministic order for multi-document structures (main + appendices):
//! 1. Main document sections
//! 2. Appendix document sections, grouped by declaration order of their document
//! 3. Shared specials (references, tables, figures), regardless of document
//!
//! Within one group the canonical tier decides, then input order.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::canonical::CanonicalTier;
use crate::constants::{document, special};
use crate::types::{Document, Section};

/// Where a section lands in a multi-document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Placement {
    /// Main document, or a document id that resolves to nothing
    Main,
    /// Appendix document at this position in `documents`
    Appendix(usize),
    /// Shared special section
    Shared,
}

/// Document classification for one `documents` list
#[derive(Debug, Clone)]
pub struct HierarchyContext<'a> {
    main_id: &'a str,
    appendix_positions: HashMap<&'a str, usize>,
}

impl<'a> HierarchyContext<'a> {
    pub fn new(documents: &'a [Document]) -> Self {
        let main_id = documents
            .first()
            .map(|d| d.id.as_str())
            .unwrap_or(document::DEFAULT_MAIN_ID);

        let mut appendix_positions = HashMap::new();
        for (position, doc) in documents.iter().enumerate().skip(1) {
            if doc.id != main_id {
                appendix_positions.entry(doc.id.as_str()).or_insert(position);
            }
        }

        Self {
            main_id,
            appendix_positions,
        }
    }

    pub fn main_id(&self) -> &'a str {
        self.main_id
    }

    pub fn is_main(&self, section: &Section) -> bool {
        section.document_id == self.main_id
    }

    pub fn is_appendix(&self, section: &Section) -> bool {
        self.appendix_positions
            .contains_key(section.document_id.as_str())
    }

    pub fn is_shared(section: &Section) -> bool {
        special::SHARED.contains(&section.id.as_str())
    }

    /// Shared-ness wins over document membership; unknown documents count as main.
    pub fn placement(&self, section: &Section) -> Placement {
        if Self::is_shared(section) {
            return Placement::Shared;
        }
        match self.appendix_positions.get(section.document_id.as_str()) {
            Some(position) => Placement::Appendix(*position),
            None => Placement::Main,
        }
    }

    pub fn compare(&self, a: &Section, b: &Section) -> Ordering {
        self.placement(a)
            .cmp(&self.placement(b))
            .then_with(|| CanonicalTier::of(&a.id).cmp(&CanonicalTier::of(&b.id)))
    }
}

/// Stable hierarchical sort. Returns a reordered copy; fields are untouched.
pub fn sort_hierarchical(sections: &[Section], documents: &[Document]) -> Vec<Section> {
    let context = HierarchyContext::new(documents);
    let mut sorted = sections.to_vec();
    sorted.sort_by(|a, b| context.compare(a, b));
    sorted
}
