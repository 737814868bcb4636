//! Canonical Order Resolver
//!
//! Deterministic reading order for single-document structures:
//! 1. Ranked "intro" sections (metadata, ancillary, well-known plan sections) by rank
//! 2. Unranked sections in their original relative order
//! 3. Ending specials (references, tables, figures, appendices) by rank
//!
//! The comparator is expressed through [`CanonicalTier`], which makes it a
//! total order and the sort a stable permutation.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::constants::{CANONICAL_ORDER, special};
use crate::types::Section;

static CANONICAL_RANKS: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    CANONICAL_ORDER
        .iter()
        .enumerate()
        .map(|(rank, id)| (*id, rank))
        .collect()
});

/// Rank of a well-known section id
pub fn canonical_rank(section_id: &str) -> Option<usize> {
    CANONICAL_RANKS.get(section_id).copied()
}

/// Whether `section_id` is one of the four specials that close a document
pub fn is_ending_special(section_id: &str) -> bool {
    special::ENDING.contains(&section_id)
}

/// Sort key equivalent to the canonical comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CanonicalTier {
    /// Ranked, not an ending special
    Leading(usize),
    /// Unranked; ties preserve input order
    Regular,
    /// Ending special
    Trailing(usize),
}

impl CanonicalTier {
    pub fn of(section_id: &str) -> Self {
        let rank = canonical_rank(section_id);
        if is_ending_special(section_id) {
            // Ending specials are all ranked; the fallback only keeps them last.
            return Self::Trailing(rank.unwrap_or(usize::MAX));
        }
        match rank {
            Some(rank) => Self::Leading(rank),
            None => Self::Regular,
        }
    }
}

/// Canonical comparator.
///
/// - both ranked: by rank
/// - one ranked: an ending special sorts after the unranked one, any other
///   ranked id sorts before it
/// - neither ranked: equal, so the stable sort keeps input order
pub fn compare_canonical(a: &Section, b: &Section) -> Ordering {
    CanonicalTier::of(&a.id).cmp(&CanonicalTier::of(&b.id))
}

/// Stable canonical sort. Returns a reordered copy; fields are untouched.
pub fn sort_canonical(sections: &[Section]) -> Vec<Section> {
    let mut sorted = sections.to_vec();
    sorted.sort_by(compare_canonical);
    sorted
}
