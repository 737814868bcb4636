//! Result rendering
//!
//! Structures render as JSON, YAML, or an indented outline grouped by
//! document. Rendering returns a `String`; commands decide where it goes.

use console::style;

use crate::config::OutputFormat;
use crate::structure::{HierarchicalView, organize_for_display};
use crate::types::{DocumentStructure, Result, Section};

/// Render a structure in `format`
pub fn render_structure(
    structure: &DocumentStructure,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(structure)?),
        OutputFormat::Json => Ok(serde_json::to_string(structure)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(structure)?),
        OutputFormat::Outline => Ok(organize_for_display(Some(structure))
            .map(|view| render_outline(&view))
            .unwrap_or_default()),
    }
}

/// Indented outline of a display view
pub fn render_outline(view: &HierarchicalView) -> String {
    let mut lines = vec![style(&view.main.name).bold().to_string()];
    lines.extend(view.main.sections.iter().map(section_line));

    for appendix in &view.appendices {
        lines.push(String::new());
        lines.push(style(&appendix.display_name).bold().to_string());
        lines.extend(appendix.sections.iter().map(section_line));
    }

    if !view.shared.is_empty() {
        lines.push(String::new());
        lines.push(style("Shared").bold().to_string());
        lines.extend(view.shared.iter().map(section_line));
    }

    lines.join("\n")
}

fn section_line(section: &Section) -> String {
    let marker = if section.required {
        format!(" {}", style("*").red())
    } else {
        String::new()
    };
    let mut line = format!(
        "  {} {}{} {}",
        section.icon,
        section.title,
        marker,
        style(format!("[{}]", section.id)).dim()
    );
    for subsection in section.subsections() {
        line.push_str(&format!("\n      - {}", subsection.title));
    }
    line
}
