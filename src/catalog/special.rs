//! Special Section Catalog
//!
//! Static table of the six structural sections every business-plan structure
//! is expected to contain, and the factory that synthesizes them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::translate::{Translator, lookup};
use crate::constants::{icon, special};
use crate::types::{Section, SectionKind};

/// The six special section types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpecialSectionType {
    Metadata,
    Ancillary,
    References,
    Appendices,
    TablesData,
    FiguresImages,
}

/// Catalog entry for one special section type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialSectionConfig {
    pub section_type: SpecialSectionType,
    pub id: &'static str,
    pub kind: SectionKind,
    pub icon: &'static str,
    pub title_key: &'static str,
    pub default_title: &'static str,
}

impl SpecialSectionConfig {
    pub fn required(&self) -> bool {
        self.kind == SectionKind::Required
    }
}

/// Catalog order: leading specials, then the ending specials.
static CATALOG: [SpecialSectionConfig; 6] = [
    SpecialSectionConfig {
        section_type: SpecialSectionType::Metadata,
        id: special::METADATA,
        kind: SectionKind::Required,
        icon: icon::METADATA,
        title_key: "editor.section.metadata",
        default_title: "Title Page",
    },
    SpecialSectionConfig {
        section_type: SpecialSectionType::Ancillary,
        id: special::ANCILLARY,
        kind: SectionKind::Required,
        icon: icon::ANCILLARY,
        title_key: "editor.section.ancillary",
        default_title: "Table of Contents",
    },
    SpecialSectionConfig {
        section_type: SpecialSectionType::References,
        id: special::REFERENCES,
        kind: SectionKind::Optional,
        icon: icon::REFERENCES,
        title_key: "editor.section.references",
        default_title: "References",
    },
    SpecialSectionConfig {
        section_type: SpecialSectionType::TablesData,
        id: special::TABLES_DATA,
        kind: SectionKind::Optional,
        icon: icon::TABLES_DATA,
        title_key: "editor.section.tablesData",
        default_title: "Tables and Data",
    },
    SpecialSectionConfig {
        section_type: SpecialSectionType::FiguresImages,
        id: special::FIGURES_IMAGES,
        kind: SectionKind::Optional,
        icon: icon::FIGURES_IMAGES,
        title_key: "editor.section.figuresImages",
        default_title: "Figures and Images",
    },
    SpecialSectionConfig {
        section_type: SpecialSectionType::Appendices,
        id: special::APPENDICES,
        kind: SectionKind::Optional,
        icon: icon::APPENDICES,
        title_key: "editor.section.appendices",
        default_title: "Appendices",
    },
];

impl SpecialSectionType {
    /// All types in catalog order
    pub const ALL: [SpecialSectionType; 6] = [
        Self::Metadata,
        Self::Ancillary,
        Self::References,
        Self::TablesData,
        Self::FiguresImages,
        Self::Appendices,
    ];

    /// Types shared by every document of a multi-document structure
    pub const SHARED: [SpecialSectionType; 3] =
        [Self::References, Self::TablesData, Self::FiguresImages];

    /// Types injected into the main document of a multi-document structure
    pub const LEADING: [SpecialSectionType; 2] = [Self::Metadata, Self::Ancillary];

    fn catalog_index(self) -> usize {
        match self {
            Self::Metadata => 0,
            Self::Ancillary => 1,
            Self::References => 2,
            Self::TablesData => 3,
            Self::FiguresImages => 4,
            Self::Appendices => 5,
        }
    }

    pub fn as_id(self) -> &'static str {
        get_special_section_config(self).id
    }

    pub fn from_id(id: &str) -> Option<Self> {
        CATALOG
            .iter()
            .find(|config| config.id == id)
            .map(|config| config.section_type)
    }

    pub fn is_leading(self) -> bool {
        matches!(self, Self::Metadata | Self::Ancillary)
    }
}

impl std::fmt::Display for SpecialSectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_id())
    }
}

/// Catalog lookup. Total over the six types.
pub fn get_special_section_config(section_type: SpecialSectionType) -> &'static SpecialSectionConfig {
    &CATALOG[section_type.catalog_index()]
}

/// All special section types in catalog order
pub fn all_special_section_types() -> impl Iterator<Item = SpecialSectionType> {
    SpecialSectionType::ALL.into_iter()
}

/// Static English title for a special section type
pub fn default_title(section_type: SpecialSectionType) -> &'static str {
    get_special_section_config(section_type).default_title
}

/// Synthesize a special section.
///
/// Title resolution: `custom_title`, then the translation of the catalog
/// title key, then the static default title.
pub fn create_special_section(
    section_type: SpecialSectionType,
    document_id: &str,
    translator: &dyn Translator,
    custom_title: Option<&str>,
) -> Section {
    let config = get_special_section_config(section_type);

    let title = custom_title
        .filter(|t| !t.trim().is_empty())
        .map(String::from)
        .or_else(|| lookup(translator, config.title_key))
        .unwrap_or_else(|| config.default_title.to_string());

    debug!(
        "Synthesized special section '{}' for document '{}'",
        config.id, document_id
    );

    Section {
        id: config.id.to_string(),
        document_id: document_id.to_string(),
        title,
        kind: config.kind,
        required: config.required(),
        program_critical: false,
        icon: config.icon.to_string(),
        ai_prompt: None,
        checklist: Vec::new(),
        raw_subsections: None,
        content: None,
        section_type: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NoTranslations;

    #[test]
    fn test_catalog_is_consistent() {
        for section_type in all_special_section_types() {
            let config = get_special_section_config(section_type);
            assert_eq!(config.section_type, section_type);
            assert_eq!(SpecialSectionType::from_id(config.id), Some(section_type));
        }
        assert_eq!(SpecialSectionType::from_id("executive_summary"), None);
    }

    #[test]
    fn test_required_flags() {
        assert!(get_special_section_config(SpecialSectionType::Metadata).required());
        assert!(get_special_section_config(SpecialSectionType::Ancillary).required());
        assert!(!get_special_section_config(SpecialSectionType::References).required());
        assert!(!get_special_section_config(SpecialSectionType::Appendices).required());
    }

    #[test]
    fn test_create_uses_default_title() {
        let section =
            create_special_section(SpecialSectionType::TablesData, "main", &NoTranslations, None);
        assert_eq!(section.id, "tables_data");
        assert_eq!(section.document_id, "main");
        assert_eq!(section.title, "Tables and Data");
        assert_eq!(section.icon, "📊");
        assert!(!section.required);
        assert!(!section.program_critical);
    }

    #[test]
    fn test_create_title_precedence() {
        let translator = |key: &str| (key == "editor.section.metadata").then(|| "Deckblatt".to_string());

        let translated =
            create_special_section(SpecialSectionType::Metadata, "main", &translator, None);
        assert_eq!(translated.title, "Deckblatt");
        assert_eq!(translated.kind, SectionKind::Required);
        assert!(translated.required);

        let custom = create_special_section(
            SpecialSectionType::Metadata,
            "main",
            &translator,
            Some("Cover"),
        );
        assert_eq!(custom.title, "Cover");

        let untranslated =
            create_special_section(SpecialSectionType::Ancillary, "main", &translator, None);
        assert_eq!(untranslated.title, "Table of Contents");
    }

    #[test]
    fn test_blank_translation_falls_back() {
        let translator = |_: &str| Some(String::new());
        let section =
            create_special_section(SpecialSectionType::References, "main", &translator, None);
        assert_eq!(section.title, "References");
    }

    #[test]
    fn test_panicking_translator_falls_back() {
        let translator = |_: &str| -> Option<String> { panic!("i18n not loaded") };
        let section =
            create_special_section(SpecialSectionType::Ancillary, "main", &translator, None);
        assert_eq!(section.title, "Table of Contents");
    }

    #[test]
    fn test_serde_names_match_ids() {
        for section_type in all_special_section_types() {
            let json = serde_json::to_string(&section_type).unwrap();
            assert_eq!(json.trim_matches('"'), section_type.as_id());
        }
    }
}
