//! Appendix detection and labelling

use crate::constants::appendix;
use crate::types::Section;

/// Whether the user already created an appendix of their own.
///
/// True when any section title mentions "appendix"/"appendices"
/// (case-insensitive) or any id starts with `appendix_`.
pub fn has_existing_appendix(sections: &[Section]) -> bool {
    sections.iter().any(is_user_appendix)
}

fn is_user_appendix(section: &Section) -> bool {
    let title = section.title.to_lowercase();
    appendix::TITLE_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
        || section.id.starts_with(appendix::ID_PREFIX)
}

/// Letter for the appendix at `index` (0-based): A..Z, then AA, AB, ...
pub fn appendix_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Display title of an appendix document, e.g. `Appendix A: Annex`
pub fn appendix_title(index: usize, document_name: &str) -> String {
    format!("Appendix {}: {}", appendix_letter(index), document_name)
}
