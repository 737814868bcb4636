//! Special-section catalog and section metadata.
//!
//! The catalog is static data; every accessor here is a pure lookup that
//! resolves to a default instead of failing.

mod metadata;
mod special;
mod translate;

pub use metadata::{
    default_title_for_id, get_section_icon, is_special_section, special_section_type,
};
pub use special::{
    SpecialSectionConfig, SpecialSectionType, all_special_section_types, create_special_section,
    default_title, get_special_section_config,
};
pub use translate::{NoTranslations, StaticTranslations, Translator, lookup};
