//! Keyword catalog
//!
//! Per-language keyword lists, keyed by the surface bucket they go into.

use crate::language::LanguageId;
use crate::lexers::{self, KeywordSet};
use crate::surface::TextStylingSurface;

/// Keyword sets of a language, ascending by bucket index
pub fn keyword_sets(language: LanguageId) -> Vec<KeywordSet> {
    let mut sets: Vec<KeywordSet> = lexers::definition(language)
        .map(|def| def.keywords.to_vec())
        .unwrap_or_default();
    sets.sort_by_key(|set| set.index);
    sets
}

/// Push every keyword list of a language to the surface
///
/// Words go through as written; no deduplication or validation.
pub fn apply(language: LanguageId, surface: &mut dyn TextStylingSurface) {
    for set in keyword_sets(language) {
        surface.set_keywords(set.index, set.words);
    }
}

/// Whether `word` is in any keyword set of a language
pub fn is_keyword(language: LanguageId, word: &str) -> bool {
    keyword_sets(language)
        .iter()
        .any(|set| set.words.split_whitespace().any(|w| w == word))
}
