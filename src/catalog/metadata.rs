//! Section Metadata Provider
//!
//! Icon lookup, special-section predicate and default titles keyed by
//! section id.

use super::special::{SpecialSectionType, default_title, get_special_section_config};
use crate::constants::icon;

/// Emoji icon for a section id, with a fallback for regular sections
pub fn get_section_icon(section_id: &str) -> &'static str {
    SpecialSectionType::from_id(section_id)
        .map(|section_type| get_special_section_config(section_type).icon)
        .unwrap_or(icon::DEFAULT)
}

/// Whether `section_id` is one of the six special ids
pub fn is_special_section(section_id: &str) -> bool {
    SpecialSectionType::from_id(section_id).is_some()
}

/// Special section type for an id, if it is special
pub fn special_section_type(section_id: &str) -> Option<SpecialSectionType> {
    SpecialSectionType::from_id(section_id)
}

/// Default English title for a special id
pub fn default_title_for_id(section_id: &str) -> Option<&'static str> {
    SpecialSectionType::from_id(section_id).map(default_title)
}
