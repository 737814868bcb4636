//! Enhance Command
//!
//! Ingest a structure, inject missing special sections, and order it.
//!
//! Usage:
//!   planweave enhance <input> [-f json|yaml|outline]

use std::path::Path;

use tracing::info;

use crate::cli::CommandContext;
use crate::cli::ui::{Output, render_structure};
use crate::cli::util::read_structure;
use crate::structure::prepare_for_display;
use crate::types::{DocumentStructure, Result};

pub fn run(input: &Path, context: &CommandContext, output: &Output) -> Result<()> {
    let structure = read_structure(input)?;
    output.warnings(structure.warnings());

    let enhanced = enhance(&structure, context);
    info!(
        "Enhanced {} sections into {}",
        structure.sections.len(),
        enhanced.sections.len()
    );

    println!(
        "{}",
        render_structure(&enhanced, context.format, context.pretty())?
    );
    Ok(())
}

/// Enhance with the configured translations, then order
pub fn enhance(structure: &DocumentStructure, context: &CommandContext) -> DocumentStructure {
    let translator = context.translator();
    prepare_for_display(Some(structure), &translator).unwrap_or_else(|| structure.clone())
}
