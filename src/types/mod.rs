pub mod error;
pub mod structure;
pub mod utils;

pub use error::{PlanError, Result, ResultExt, ValidationError, ValidationErrorKind};
pub use structure::{Document, DocumentStructure, Section, SectionKind, Subsection};
pub use utils::{
    json_array, json_bool, json_non_empty_string, json_string,
    json_string_array, json_string_or,
};
