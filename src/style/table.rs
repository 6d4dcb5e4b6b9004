//! Per-language color tables
//!
//! A [`ColorTable`] is a fixed-length sequence of color slots built from a
//! lexer's categories, with two lookup indices layered over it:
//!
//! - semantic names (`CommentFore`, `CommentBack`, ...), 1:1 with slots
//! - external category name plus role, which may repeat; the first slot
//!   in table order wins

use std::collections::HashMap;
use std::fmt;

use super::color::Rgba;
use crate::error::{Result, StyleError};
use crate::language::LanguageId;
use crate::lexers::Category;

/// Whether a slot colors the text or the cell behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Foreground,
    Background,
}

impl Role {
    pub fn is_foreground(&self) -> bool {
        matches!(self, Role::Foreground)
    }
}

impl From<bool> for Role {
    fn from(is_foreground: bool) -> Self {
        if is_foreground {
            Role::Foreground
        } else {
            Role::Background
        }
    }
}

/// One color entry of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSlot {
    pub color: Rgba,
    pub external_name: String,
    pub role: Role,
}

impl ColorSlot {
    pub fn new(color: Rgba, external_name: impl Into<String>, role: Role) -> Self {
        Self {
            color,
            external_name: external_name.into(),
            role,
        }
    }
}

/// Ways of addressing a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKey<'a> {
    /// Position in the table
    Index(usize),
    /// Table-private semantic name, e.g. `CommentFore`
    Semantic(&'a str),
    /// External category name plus role; first match wins
    External(&'a str, Role),
}

impl From<usize> for SlotKey<'_> {
    fn from(index: usize) -> Self {
        SlotKey::Index(index)
    }
}

impl<'a> From<&'a str> for SlotKey<'a> {
    fn from(name: &'a str) -> Self {
        SlotKey::Semantic(name)
    }
}

impl fmt::Display for SlotKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKey::Index(i) => write!(f, "#{}", i),
            SlotKey::Semantic(name) => write!(f, "'{}'", name),
            SlotKey::External(name, role) => write!(f, "'{}' ({:?})", name, role),
        }
    }
}

/// Colors of one language
#[derive(Debug, Clone)]
pub struct ColorTable {
    language: LanguageId,
    slots: Vec<ColorSlot>,
    /// Semantic name per slot index
    semantic_names: Vec<String>,
    semantic_index: HashMap<String, usize>,
    /// First slot index per (external name, role)
    external_index: HashMap<(String, Role), usize>,
}

impl ColorTable {
    /// Build a table from a lexer's categories, foreground/background pairs
    /// in category order
    pub fn from_categories(language: LanguageId, categories: &[Category]) -> Self {
        let mut slots = Vec::with_capacity(categories.len() * 2);
        let mut semantic_names = Vec::with_capacity(categories.len() * 2);

        for cat in categories {
            slots.push(ColorSlot::new(cat.fore, cat.external, Role::Foreground));
            semantic_names.push(cat.fore_name());
            slots.push(ColorSlot::new(cat.back, cat.external, Role::Background));
            semantic_names.push(cat.back_name());
        }

        let semantic_index = semantic_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        let mut table = Self {
            language,
            slots,
            semantic_names,
            semantic_index,
            external_index: HashMap::new(),
        };
        table.rebuild_external_index();
        table
    }

    fn rebuild_external_index(&mut self) {
        self.external_index.clear();
        for (i, slot) in self.slots.iter().enumerate() {
            self.external_index
                .entry((slot.external_name.clone(), slot.role))
                .or_insert(i);
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Number of slots; fixed for the table's lifetime
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[ColorSlot] {
        &self.slots
    }

    /// Semantic names in slot order
    pub fn semantic_names(&self) -> impl Iterator<Item = &str> {
        self.semantic_names.iter().map(String::as_str)
    }

    pub fn semantic_name_of(&self, index: usize) -> Option<&str> {
        self.semantic_names.get(index).map(String::as_str)
    }

    /// Resolve a key to a slot index
    pub fn index_of(&self, key: SlotKey<'_>) -> Result<usize> {
        let found = match key {
            SlotKey::Index(i) => (i < self.slots.len()).then_some(i),
            SlotKey::Semantic(name) => self.semantic_index.get(name).copied(),
            SlotKey::External(name, role) => {
                self.external_index.get(&(name.to_string(), role)).copied()
            }
        };
        found.ok_or_else(|| StyleError::not_found(self.language, key))
    }

    /// Every slot index matching an external name and role, in table order
    pub fn external_matches(&self, external_name: &str, role: Role) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.external_name == external_name && slot.role == role)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn slot(&self, index: usize) -> Result<&ColorSlot> {
        self.slots
            .get(index)
            .ok_or_else(|| StyleError::not_found(self.language, SlotKey::Index(index)))
    }

    pub fn get<'k>(&self, key: impl Into<SlotKey<'k>>) -> Result<Rgba> {
        let index = self.index_of(key.into())?;
        Ok(self.slots[index].color)
    }

    /// Change the color of one slot; name and role stay as they are
    pub fn set<'k>(&mut self, key: impl Into<SlotKey<'k>>, color: Rgba) -> Result<()> {
        let index = self.index_of(key.into())?;
        self.slots[index].color = color;
        Ok(())
    }

    /// Swap in a whole new slot sequence of the same length
    ///
    /// The new slots must keep every slot's role and pair each foreground
    /// with a background of the same external name. Otherwise the table is
    /// left untouched.
    pub fn replace_all(&mut self, new_slots: Vec<ColorSlot>) -> Result<()> {
        if new_slots.len() != self.slots.len() {
            return Err(StyleError::CardinalityMismatch {
                expected: self.slots.len(),
                actual: new_slots.len(),
            });
        }
        if let Some(index) = new_slots
            .iter()
            .zip(&self.slots)
            .position(|(new, old)| new.role != old.role)
        {
            return Err(StyleError::BrokenPairing { index });
        }
        if let Some(pair) = new_slots
            .chunks_exact(2)
            .position(|pair| pair[0].external_name != pair[1].external_name)
        {
            return Err(StyleError::BrokenPairing { index: pair * 2 + 1 });
        }
        self.slots = new_slots;
        self.rebuild_external_index();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexers;

    fn cs_table() -> ColorTable {
        let def = lexers::definition(LanguageId::Cs).unwrap();
        ColorTable::from_categories(LanguageId::Cs, def.categories)
    }

    #[test]
    fn test_pairs_share_external_name() {
        let registry = crate::style::StyleRegistry::new();
        for lang in registry.languages() {
            let table = registry.table(lang).unwrap();
            assert_eq!(table.len() % 2, 0, "{}", lang);
            for pair in table.slots().chunks_exact(2) {
                assert_eq!(pair[0].role, Role::Foreground, "{}", lang);
                assert_eq!(pair[1].role, Role::Background, "{}", lang);
                assert_eq!(pair[0].external_name, pair[1].external_name, "{}", lang);
            }
        }
    }

    #[test]
    fn test_dual_lookup_consistency() {
        let table = cs_table();
        for i in 0..table.len() {
            let name = table.semantic_name_of(i).unwrap();
            assert_eq!(table.get(i).unwrap(), table.get(name).unwrap());
        }
    }

    #[test]
    fn test_lookup_by_semantic_name() {
        let table = cs_table();
        assert_eq!(table.get("CommentFore").unwrap(), Rgba::rgb(0, 128, 0));
        assert_eq!(table.get("CommentBack").unwrap(), Rgba::WHITE);
        assert!(matches!(table.get("NoSuchFore"), Err(StyleError::NotFound { .. })));
    }

    #[test]
    fn test_index_out_of_range() {
        let table = cs_table();
        assert!(matches!(table.get(table.len()), Err(StyleError::NotFound { .. })));
        assert!(table.slot(table.len()).is_err());
    }

    #[test]
    fn test_external_lookup_first_match_wins() {
        let mut table = cs_table();
        // "DEFAULT" covers both the default style and identifiers
        let matches = table.external_matches("DEFAULT", Role::Foreground);
        assert_eq!(matches.len(), 2);
        assert_eq!(table.index_of(SlotKey::External("DEFAULT", Role::Foreground)).unwrap(), matches[0]);

        table.set(matches[1], Rgba::rgb(1, 2, 3)).unwrap();
        assert_eq!(
            table.get(SlotKey::External("DEFAULT", Role::Foreground)).unwrap(),
            Rgba::BLACK
        );
        assert!(table.get(SlotKey::External("DEFAULT", Role::from(false))).is_ok());
        assert!(table.get(SlotKey::External("NOPE", Role::Foreground)).is_err());
    }

    #[test]
    fn test_set_keeps_name_and_role() {
        let mut table = cs_table();
        let before = table.slot(2).unwrap().clone();
        table.set(2, Rgba::rgb(255, 0, 0)).unwrap();
        let after = table.slot(2).unwrap();
        assert_eq!(after.color, Rgba::rgb(255, 0, 0));
        assert_eq!(after.external_name, before.external_name);
        assert_eq!(after.role, before.role);
        assert!(table.set("Missing", Rgba::BLACK).is_err());
    }

    #[test]
    fn test_replace_all_rejects_wrong_length() {
        let mut table = cs_table();
        let original = table.slots().to_vec();

        let mut shorter = original.clone();
        shorter.pop();
        match table.replace_all(shorter) {
            Err(StyleError::CardinalityMismatch { expected, actual }) => {
                assert_eq!(expected, original.len());
                assert_eq!(actual, original.len() - 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(table.slots(), original.as_slice());

        let mut longer = original.clone();
        longer.push(ColorSlot::new(Rgba::BLACK, "EXTRA", Role::Foreground));
        assert!(table.replace_all(longer).is_err());
        assert_eq!(table.len(), original.len());
    }

    #[test]
    fn test_replace_all_rejects_swapped_roles() {
        let mut table = cs_table();
        let original = table.slots().to_vec();

        let mut swapped = original.clone();
        swapped[2] = ColorSlot::new(Rgba::rgb(1, 1, 1), "BOGUS", Role::Background);
        swapped[3] = ColorSlot::new(Rgba::rgb(2, 2, 2), "OTHER", Role::Foreground);
        assert!(matches!(
            table.replace_all(swapped),
            Err(StyleError::BrokenPairing { index: 2 })
        ));
        assert_eq!(table.slots(), original.as_slice());
        assert_eq!(table.get("CommentFore").unwrap(), Rgba::rgb(0, 128, 0));
    }

    #[test]
    fn test_replace_all_rejects_split_pair() {
        let mut table = cs_table();
        let original = table.slots().to_vec();

        let mut split = original.clone();
        split[3].external_name = "OTHER".to_string();
        assert!(matches!(
            table.replace_all(split),
            Err(StyleError::BrokenPairing { index: 3 })
        ));
        assert_eq!(table.slots(), original.as_slice());
    }

    #[test]
    fn test_replace_all_swaps_everything() {
        let mut table = cs_table();
        let replacement: Vec<ColorSlot> = table
            .slots()
            .iter()
            .map(|slot| ColorSlot::new(Rgba::rgb(9, 9, 9), slot.external_name.clone(), slot.role))
            .collect();
        table.replace_all(replacement).unwrap();
        assert!(table.slots().iter().all(|s| s.color == Rgba::rgb(9, 9, 9)));
        assert_eq!(table.get("CommentFore").unwrap(), Rgba::rgb(9, 9, 9));
    }
}
