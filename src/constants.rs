//! Global Constants
//!
//! Immutable tables shared by the catalog, enhancer and order resolvers.
//! Nothing here is configurable at runtime.

/// Special section identifiers
pub mod special {
    pub const METADATA: &str = "metadata";
    pub const ANCILLARY: &str = "ancillary";
    pub const REFERENCES: &str = "references";
    pub const APPENDICES: &str = "appendices";
    pub const TABLES_DATA: &str = "tables_data";
    pub const FIGURES_IMAGES: &str = "figures_images";

    /// Sections that always lead a rendered document
    pub const LEADING: [&str; 2] = [METADATA, ANCILLARY];

    /// Sections that always close a single-document structure, in order
    pub const ENDING: [&str; 4] = [REFERENCES, TABLES_DATA, FIGURES_IMAGES, APPENDICES];

    /// Sections shared by all documents of a multi-document structure
    pub const SHARED: [&str; 3] = [REFERENCES, TABLES_DATA, FIGURES_IMAGES];
}

/// Default main document used when a structure names none
pub mod document {
    pub const DEFAULT_MAIN_ID: &str = "main_document";
    pub const DEFAULT_MAIN_NAME: &str = "Main Document";
    pub const DEFAULT_MAIN_PURPOSE: &str = "Primary document";
    pub const DEFAULT_UPLOAD_NAME: &str = "Uploaded Document";
    pub const UPLOAD_PURPOSE: &str = "Primary document from upload";
}

/// Section icons
pub mod icon {
    pub const METADATA: &str = "📕";
    pub const ANCILLARY: &str = "📑";
    pub const REFERENCES: &str = "📚";
    pub const APPENDICES: &str = "📎";
    pub const TABLES_DATA: &str = "📊";
    pub const FIGURES_IMAGES: &str = "🖼️";

    /// Fallback for regular sections
    pub const DEFAULT: &str = "🧾";
}

/// Canonical single-document reading order.
///
/// Position in this list is the section's rank. Leading specials come first,
/// the well-known business-plan sections follow, and the ending specials
/// close the list with the highest ranks.
pub const CANONICAL_ORDER: [&str; 24] = [
    special::METADATA,
    special::ANCILLARY,
    "executive_summary",
    "project_description",
    "business_concept",
    "problem_solution",
    "product_technology",
    "innovation_technology",
    "market_opportunity",
    "market_analysis",
    "competitive_landscape",
    "competitive_analysis",
    "business_model",
    "go_to_market",
    "team_qualifications",
    "timeline_milestones",
    "financial_plan",
    "financials",
    "risk_assessment",
    "impact_assessment",
    special::REFERENCES,
    special::TABLES_DATA,
    special::FIGURES_IMAGES,
    special::APPENDICES,
];

/// Existing-appendix detection
pub mod appendix {
    /// Lowercased title fragments that mark a user-created appendix
    pub const TITLE_KEYWORDS: [&str; 2] = ["appendix", "appendices"];

    /// Id prefix that marks a user-created appendix
    pub const ID_PREFIX: &str = "appendix_";
}

/// Upload ingestion
pub mod upload {
    /// Leading uploaded sections that are marked required
    pub const REQUIRED_LEADING_SECTIONS: usize = 3;

    /// Prefix for ids derived from free-form titles
    pub const GENERATED_ID_PREFIX: &str = "section_";
}
