//! Structure engine
//!
//! Pure transformations over [`DocumentStructure`]: special-section
//! enhancement, the canonical and hierarchical order resolvers, and the
//! display helpers built on them. Nothing here fails or mutates its input.

mod appendix;
mod canonical;
mod edit;
mod enhance;
mod hierarchical;
mod normalize;
mod view;

pub use appendix::{appendix_letter, appendix_title, has_existing_appendix};
pub use canonical::{
    CanonicalTier, canonical_rank, compare_canonical, is_ending_special, sort_canonical,
};
pub use edit::{add_custom_subsection, remove_subsection};
pub use enhance::{enhance, enhance_structure};
pub use hierarchical::{HierarchyContext, Placement, sort_hierarchical};
pub use normalize::{dedupe_sections, normalize_structure};
pub use view::{AppendixView, DocumentView, HierarchicalView, organize_for_display};

use crate::catalog::Translator;
use crate::types::DocumentStructure;

/// Order sections with the resolver selected by document count
pub fn order_structure(structure: &DocumentStructure) -> DocumentStructure {
    let sections = if structure.is_multi_document() {
        sort_hierarchical(&structure.sections, &structure.documents)
    } else {
        sort_canonical(&structure.sections)
    };
    structure.with_sections(sections)
}

/// Raw to display transition: enhance, then order.
pub fn prepare_for_display(
    structure: Option<&DocumentStructure>,
    translator: &dyn Translator,
) -> Option<DocumentStructure> {
    enhance_structure(structure, translator).map(|enhanced| order_structure(&enhanced))
}
