//! Pure editing helpers
//!
//! Edits return new values; the caller's section is never touched so the same
//! structure can be read from several places at once.

use crate::types::{Section, Subsection};

/// Return a copy of `section` with a custom subsection appended.
///
/// The new subsection id is `{section.id}_custom_{n}` with `n` one past the
/// current subsection count, bumped until it is unique within the section.
pub fn add_custom_subsection(section: &Section, title: &str) -> Section {
    let existing = section.subsections();
    let mut n = existing.len() + 1;
    let mut id = format!("{}_custom_{}", section.id, n);
    while existing.iter().any(|s| s.id == id) {
        n += 1;
        id = format!("{}_custom_{}", section.id, n);
    }

    let mut subsections = existing.to_vec();
    subsections.push(Subsection::new(id, title.trim()));

    Section {
        raw_subsections: Some(subsections),
        ..section.clone()
    }
}

/// Return a copy of `section` without the subsection `subsection_id`
pub fn remove_subsection(section: &Section, subsection_id: &str) -> Section {
    let subsections: Vec<Subsection> = section
        .subsections()
        .iter()
        .filter(|s| s.id != subsection_id)
        .cloned()
        .collect();

    Section {
        raw_subsections: section.raw_subsections.as_ref().map(|_| subsections),
        ..section.clone()
    }
}
