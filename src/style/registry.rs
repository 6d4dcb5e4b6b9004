//! The lexer style registry
//!
//! Owns one [`ColorTable`] per language with a lexer definition. Instances
//! are plain values: callers that need process-wide defaults keep one
//! around, tests build their own.

use std::collections::HashMap;

use super::color::Rgba;
use super::table::{ColorSlot, ColorTable, SlotKey};
use crate::error::{Result, StyleError};
use crate::language::LanguageId;
use crate::lexers;

/// Color tables for every supported language
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    tables: HashMap<LanguageId, ColorTable>,
}

impl StyleRegistry {
    /// Create a registry holding the built-in default colors
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.reset();
        registry
    }

    /// Create a registry without any tables
    pub fn empty() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Restore the built-in colors for every language
    pub fn reset(&mut self) {
        self.tables.clear();
        for def in lexers::all_definitions() {
            self.tables.insert(
                def.language,
                ColorTable::from_categories(def.language, def.categories),
            );
        }
    }

    /// Restore the built-in colors for one language
    pub fn reset_language(&mut self, language: LanguageId) -> Result<()> {
        let def = lexers::definition(language).ok_or(StyleError::UnsupportedLanguage(language))?;
        self.tables
            .insert(language, ColorTable::from_categories(language, def.categories));
        Ok(())
    }

    /// Languages that have a table
    pub fn languages(&self) -> Vec<LanguageId> {
        let mut languages: Vec<_> = self.tables.keys().copied().collect();
        languages.sort();
        languages
    }

    pub fn table(&self, language: LanguageId) -> Result<&ColorTable> {
        self.tables
            .get(&language)
            .ok_or(StyleError::UnsupportedLanguage(language))
    }

    pub fn table_mut(&mut self, language: LanguageId) -> Result<&mut ColorTable> {
        self.tables
            .get_mut(&language)
            .ok_or(StyleError::UnsupportedLanguage(language))
    }

    /// Slot count of a language's table
    pub fn len(&self, language: LanguageId) -> Result<usize> {
        Ok(self.table(language)?.len())
    }

    pub fn slot(&self, language: LanguageId, index: usize) -> Result<&ColorSlot> {
        self.table(language)?.slot(index)
    }

    pub fn get<'k>(&self, language: LanguageId, key: impl Into<SlotKey<'k>>) -> Result<Rgba> {
        self.table(language)?.get(key)
    }

    pub fn set<'k>(
        &mut self,
        language: LanguageId,
        key: impl Into<SlotKey<'k>>,
        color: Rgba,
    ) -> Result<()> {
        self.table_mut(language)?.set(key, color)
    }

    /// Atomically replace every slot of a language
    pub fn replace_all(&mut self, language: LanguageId, new_slots: Vec<ColorSlot>) -> Result<()> {
        self.table_mut(language)?.replace_all(new_slots)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Role;

    #[test]
    fn test_defaults_loaded() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.languages().len(), LanguageId::ALL.len() - 1);
        assert_eq!(registry.get(LanguageId::Cs, "CommentFore").unwrap(), Rgba::rgb(0, 128, 0));
        assert!(matches!(
            registry.table(LanguageId::Text),
            Err(StyleError::UnsupportedLanguage(LanguageId::Text))
        ));
        assert!(StyleRegistry::empty().table(LanguageId::Cs).is_err());
    }

    #[test]
    fn test_cardinality_survives_mutation() {
        let mut registry = StyleRegistry::new();
        for lang in registry.languages() {
            let len = registry.len(lang).unwrap();
            for i in 0..len {
                registry.set(lang, i, Rgba::rgb(1, 2, 3)).unwrap();
            }
            assert_eq!(registry.len(lang).unwrap(), len);

            let too_short = vec![ColorSlot::new(Rgba::BLACK, "DEFAULT", Role::Foreground)];
            assert!(registry.replace_all(lang, too_short).is_err());
            assert_eq!(registry.len(lang).unwrap(), len);
            assert!(registry.table(lang).unwrap().slots().iter().all(|s| s.color == Rgba::rgb(1, 2, 3)));
        }
    }

    #[test]
    fn test_dual_lookup_for_every_language() {
        let registry = StyleRegistry::new();
        for lang in registry.languages() {
            let table = registry.table(lang).unwrap();
            for (i, name) in table.semantic_names().enumerate() {
                assert_eq!(registry.get(lang, i).unwrap(), registry.get(lang, name).unwrap());
                assert_eq!(registry.slot(lang, i).unwrap().color, registry.get(lang, i).unwrap());
            }
        }
    }

    #[test]
    fn test_reset_language() {
        let mut registry = StyleRegistry::new();
        registry.set(LanguageId::Python, "CommentLineFore", Rgba::rgb(255, 0, 0)).unwrap();
        registry.set(LanguageId::Cs, "CommentFore", Rgba::rgb(255, 0, 0)).unwrap();

        registry.reset_language(LanguageId::Python).unwrap();
        assert_eq!(
            registry.get(LanguageId::Python, "CommentLineFore").unwrap(),
            Rgba::rgb(0, 128, 0)
        );
        assert_eq!(registry.get(LanguageId::Cs, "CommentFore").unwrap(), Rgba::rgb(255, 0, 0));
        assert!(registry.reset_language(LanguageId::Text).is_err());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = StyleRegistry::new();
        let b = StyleRegistry::new();
        a.set(LanguageId::Sql, "WordFore", Rgba::rgb(7, 7, 7)).unwrap();
        assert_ne!(a.get(LanguageId::Sql, "WordFore").unwrap(), b.get(LanguageId::Sql, "WordFore").unwrap());
    }
}
