//! Upload Command
//!
//! Merge the section list extracted from an uploaded document with the
//! special sections and print the ordered result.
//!
//! Usage:
//!   planweave upload <input> [-f json|yaml|outline]

use std::path::Path;

use crate::cli::CommandContext;
use crate::cli::ui::{Output, render_structure};
use crate::cli::util::read_json;
use crate::ingest::{UploadedContent, merge_uploaded_content};
use crate::types::{Result, ResultExt};

pub fn run(input: &Path, context: &CommandContext, output: &Output) -> Result<()> {
    let value = read_json(input)?;
    let content: UploadedContent = serde_json::from_value(value).with_path(input)?;

    let skipped = content
        .sections
        .iter()
        .filter(|s| s.title.trim().is_empty())
        .count();
    if skipped > 0 {
        output.warning(&format!("Skipped {} untitled sections", skipped));
    }

    let merged = merge_uploaded_content(&content, &context.translator());
    println!(
        "{}",
        render_structure(&merged, context.format, context.pretty())?
    );
    Ok(())
}
