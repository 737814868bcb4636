//! Translation collaborator
//!
//! The engine asks for localized special-section titles through [`Translator`].
//! A missing or blank translation is a normal answer, not an error: callers
//! fall back to the static English title.

use std::collections::BTreeMap;
use std::panic::{AssertUnwindSafe, catch_unwind};

use tracing::warn;

/// Synchronous, side-effect-free i18n lookup
pub trait Translator {
    /// Localized string for `key`, or `None` when no translation exists
    fn translate(&self, key: &str) -> Option<String>;
}

impl<F> Translator for F
where
    F: Fn(&str) -> Option<String>,
{
    fn translate(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Translator that never has a translation
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Fixed key → string table, typically loaded from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticTranslations {
    entries: BTreeMap<String, String>,
}

impl StaticTranslations {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for StaticTranslations {
    fn translate(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Ask `translator` for `key`, discarding blank answers.
///
/// A translator that panics counts as having no translation.
pub fn lookup(translator: &dyn Translator, key: &str) -> Option<String> {
    match catch_unwind(AssertUnwindSafe(|| translator.translate(key))) {
        Ok(value) => value.filter(|value| !value.trim().is_empty()),
        Err(_) => {
            warn!("Translator panicked for '{}', using default title", key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_translator() {
        let translator = |key: &str| (key == "a").then(|| "Alpha".to_string());
        assert_eq!(lookup(&translator, "a").as_deref(), Some("Alpha"));
        assert_eq!(lookup(&translator, "b"), None);
    }

    #[test]
    fn test_blank_translation_is_missing() {
        let translator = |_: &str| Some("   ".to_string());
        assert_eq!(lookup(&translator, "anything"), None);
    }

    #[test]
    fn test_panicking_translator_is_missing() {
        let translator = |key: &str| -> Option<String> { panic!("no catalog for {key}") };
        assert_eq!(lookup(&translator, "editor.section.references"), None);
    }

    #[test]
    fn test_static_translations() {
        let mut entries = BTreeMap::new();
        entries.insert("editor.section.metadata".to_string(), "Titelseite".to_string());
        let translations = StaticTranslations::new(entries);

        assert_eq!(translations.len(), 1);
        assert_eq!(
            lookup(&translations, "editor.section.metadata").as_deref(),
            Some("Titelseite")
        );
        assert_eq!(lookup(&NoTranslations, "editor.section.metadata"), None);
    }
}
