//! Outline Command
//!
//! Print the enhanced structure grouped the way an editor shows it: main
//! document, lettered appendices, then shared sections.
//!
//! Usage:
//!   planweave outline <input>

use std::path::Path;

use crate::cli::CommandContext;
use crate::cli::ui::{Output, render_outline};
use crate::cli::util::read_structure;
use crate::structure::organize_for_display;
use crate::types::Result;

use super::enhance::enhance;

pub fn run(input: &Path, context: &CommandContext, output: &Output) -> Result<()> {
    let structure = read_structure(input)?;
    output.warnings(structure.warnings());

    let enhanced = enhance(&structure, context);
    if let Some(view) = organize_for_display(Some(&enhanced)) {
        println!("{}", render_outline(&view));
        output.info(&format!(
            "{} sections, {} appendix documents",
            view.section_count(),
            view.appendices.len()
        ));
    }
    Ok(())
}
