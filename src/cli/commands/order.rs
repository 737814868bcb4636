//! Order Command
//!
//! Ingest a structure and apply the canonical or hierarchical order without
//! synthesizing anything.
//!
//! Usage:
//!   planweave order <input> [-f json|yaml|outline]

use std::path::Path;

use crate::cli::CommandContext;
use crate::cli::ui::{Output, render_structure};
use crate::cli::util::read_structure;
use crate::structure::order_structure;
use crate::types::Result;

pub fn run(input: &Path, context: &CommandContext, output: &Output) -> Result<()> {
    let structure = read_structure(input)?;
    output.warnings(structure.warnings());

    let ordered = order_structure(&structure);
    println!(
        "{}",
        render_structure(&ordered, context.format, context.pretty())?
    );
    Ok(())
}
