//! Style application
//!
//! Pushes a language's full lexer configuration onto a surface. The call
//! sequence for a language is fixed:
//!
//! 1. reset styles, clear lexer state and set the default font
//! 2. one style call per category, colors from the registry
//! 3. tokenizer selection
//! 4. keyword lists
//! 5. static lexer properties
//! 6. fold margin and automatic folding; lexers that don't fold get a
//!    zero-width margin, no automatic folding and `fold=0`
//!
//! Because it starts from a reset and every step runs for every language,
//! the surface ends up the same whatever was applied to it before.

use crate::config::Config;
use crate::error::{Result, StyleError};
use crate::keywords;
use crate::language::LanguageId;
use crate::lexers;
use crate::style::StyleRegistry;
use crate::surface::{AutoFold, FoldMargin, TextStylingSurface, BOX_TREE};

/// Margin number reserved for fold symbols
pub const FOLD_MARGIN: u8 = 2;

/// Dispatches lexer configuration to a surface
#[derive(Debug, Clone)]
pub struct StyleApplier {
    font: String,
    font_size: u32,
    fold_margin: FoldMargin,
}

impl StyleApplier {
    pub fn new(config: &Config) -> Self {
        Self {
            font: config.font.clone(),
            font_size: config.font_size,
            fold_margin: FoldMargin {
                margin: FOLD_MARGIN,
                width: config.fold_margin_width,
                glyphs: BOX_TREE,
                fore: config.fold_marker_fore,
                back: config.fold_marker_back,
            },
        }
    }

    /// Configure `surface` for `language`
    ///
    /// Fails only for a language without a lexer definition, in which
    /// case the surface is not touched.
    pub fn try_apply(
        &self,
        registry: &StyleRegistry,
        language: LanguageId,
        surface: &mut dyn TextStylingSurface,
    ) -> Result<()> {
        let def = lexers::definition(language).ok_or(StyleError::UnsupportedLanguage(language))?;
        let table = registry.table(language)?;

        surface.reset_styles();
        surface.clear_lexer_state();
        surface.set_default_font(&self.font, self.font_size);

        for (category, pair) in def.categories.iter().zip(table.slots().chunks_exact(2)) {
            surface.set_style_attributes(category.style, pair[0].color, pair[1].color, category.bold);
        }

        surface.select_tokenizer(def.tokenizer);

        keywords::apply(language, surface);

        for (name, value) in def.properties {
            surface.set_property(name, value);
        }

        if def.folding {
            surface.configure_folding_margin(&self.fold_margin);
            surface.enable_automatic_folding(AutoFold::SHOW | AutoFold::CLICK | AutoFold::CHANGE);
        } else {
            surface.set_property("fold", "0");
            surface.configure_folding_margin(&FoldMargin {
                width: 0,
                ..self.fold_margin.clone()
            });
            surface.enable_automatic_folding(AutoFold::empty());
        }

        log::debug!(
            "Applied {} lexer: {} styles, {} keyword sets, {} properties",
            language,
            def.categories.len(),
            def.keywords.len(),
            def.properties.len()
        );
        Ok(())
    }

    /// [`try_apply`](Self::try_apply), reporting only success
    pub fn apply(
        &self,
        registry: &StyleRegistry,
        language: LanguageId,
        surface: &mut dyn TextStylingSurface,
    ) -> bool {
        self.try_apply(registry, language, surface)
            .map_err(|e| log::warn!("Failed to apply {} lexer: {}", language, e))
            .is_ok()
    }

    /// Resolve a file name and configure the surface for it
    ///
    /// Returns the resolved language, or `None` if it has no lexer.
    pub fn apply_for_file(
        &self,
        registry: &StyleRegistry,
        file_name: &str,
        surface: &mut dyn TextStylingSurface,
    ) -> Option<LanguageId> {
        let language = LanguageId::resolve(file_name);
        self.apply(registry, language, surface).then_some(language)
    }
}

impl Default for StyleApplier {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexers::Tokenizer;
    use crate::style::{ColorSlot, Rgba};
    use crate::surface::{MemorySurface, SurfaceOp};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_cs() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        let mut surface = MemorySurface::new();

        assert!(applier.apply(&registry, LanguageId::Cs, &mut surface));

        let comment = surface.style(1).unwrap();
        assert_eq!(comment.fore, Rgba::rgb(0, 128, 0));
        assert_eq!(comment.back, Rgba::WHITE);
        assert!(!comment.bold);
        assert!(surface.style(5).unwrap().bold);
        assert!(surface.style(10).unwrap().bold);
        assert_eq!(surface.state.tokenizer, Some(Tokenizer::Name("cpp")));
        assert!(surface.keywords(0).unwrap().contains("foreach"));
        assert_eq!(surface.property("fold.at.else"), Some("1"));
        assert_eq!(surface.state.font, Some(("Consolas".to_string(), 10)));

        let margin = surface.state.fold_margin.as_ref().unwrap();
        assert_eq!(margin.margin, FOLD_MARGIN);
        assert_eq!(margin.width, 16);
        assert_eq!(surface.state.auto_fold.bits(), 7);
    }

    fn first(ops: &[SurfaceOp], wanted: impl Fn(&SurfaceOp) -> bool) -> usize {
        ops.iter().position(|op| wanted(op)).unwrap()
    }

    #[test]
    fn test_protocol_order() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        let mut surface = MemorySurface::new();
        applier.apply(&registry, LanguageId::Sql, &mut surface);

        let reset = first(&surface.ops, |op| *op == SurfaceOp::ResetStyles);
        let first_style = first(&surface.ops, |op| matches!(op, SurfaceOp::Style(_)));
        let tokenizer = first(&surface.ops, |op| matches!(op, SurfaceOp::Tokenizer(_)));
        let first_keywords = first(&surface.ops, |op| matches!(op, SurfaceOp::Keywords(_)));
        let first_property = first(&surface.ops, |op| matches!(op, SurfaceOp::Property(_)));
        let fold = first(&surface.ops, |op| *op == SurfaceOp::FoldMargin);

        assert_eq!(reset, 0);
        assert_eq!(surface.ops[1], SurfaceOp::ClearLexerState);
        assert!(first_style < tokenizer);
        assert!(tokenizer < first_keywords);
        assert!(first_keywords < first_property);
        assert!(first_property < fold);
        assert!(matches!(surface.ops.last(), Some(SurfaceOp::AutoFold(_))));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();

        let mut once = MemorySurface::new();
        applier.apply(&registry, LanguageId::Cs, &mut once);

        let mut twice = MemorySurface::new();
        applier.apply(&registry, LanguageId::Cs, &mut twice);
        applier.apply(&registry, LanguageId::Cs, &mut twice);

        assert_eq!(once.state, twice.state);
    }

    #[test]
    fn test_reapply_clears_previous_styles() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        let mut surface = MemorySurface::new();

        applier.apply(&registry, LanguageId::Php, &mut surface);
        assert!(surface.style(127).is_some());
        applier.apply(&registry, LanguageId::Ini, &mut surface);
        assert!(surface.style(127).is_none());
        assert_eq!(surface.state.styles.len(), 6);
    }

    #[test]
    fn test_every_language_dispatches() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        for lang in LanguageId::ALL {
            let mut surface = MemorySurface::new();
            let applied = applier.apply(&registry, lang, &mut surface);
            assert_eq!(applied, lang != LanguageId::Text, "{}", lang);
        }
    }

    #[test]
    fn test_unsupported_language_leaves_surface_alone() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        let mut surface = MemorySurface::new();

        assert!(matches!(
            applier.try_apply(&registry, LanguageId::Text, &mut surface),
            Err(StyleError::UnsupportedLanguage(LanguageId::Text))
        ));
        assert!(surface.ops.is_empty());
        assert!(!applier.apply(&registry, LanguageId::Text, &mut surface));
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_vendor_tokenizer_ids() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        let mut surface = MemorySurface::new();

        applier.apply(&registry, LanguageId::InnoSetup, &mut surface);
        assert_eq!(surface.state.tokenizer, Some(Tokenizer::Id(76)));
    }

    #[test]
    fn test_non_folding_lexer() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        let mut surface = MemorySurface::new();

        applier.apply(&registry, LanguageId::Batch, &mut surface);
        assert_eq!(surface.state.fold_margin.as_ref().unwrap().width, 0);
        assert!(surface.state.auto_fold.is_empty());
        assert_eq!(surface.property("fold"), Some("0"));
        assert!(matches!(surface.ops.last(), Some(SurfaceOp::AutoFold(_))));
    }

    #[test]
    fn test_reused_surface_matches_fresh() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();

        for target in [LanguageId::Batch, LanguageId::ErrorList, LanguageId::Python] {
            let mut fresh = MemorySurface::new();
            applier.apply(&registry, target, &mut fresh);

            for previous in [LanguageId::Cs, LanguageId::Sql, LanguageId::ErrorList] {
                let mut reused = MemorySurface::new();
                applier.apply(&registry, previous, &mut reused);
                applier.apply(&registry, target, &mut reused);
                assert_eq!(fresh.state, reused.state, "{} after {}", target, previous);
            }
        }
    }

    #[test]
    fn test_uses_registry_colors() {
        let mut registry = StyleRegistry::new();
        registry.set(LanguageId::Python, "DecoratorFore", Rgba::rgb(1, 2, 3)).unwrap();
        registry.set(LanguageId::Python, "DecoratorBack", Rgba::rgb(4, 5, 6)).unwrap();

        let mut surface = MemorySurface::new();
        StyleApplier::default().apply(&registry, LanguageId::Python, &mut surface);
        let decorator = surface.style(15).unwrap();
        assert_eq!(decorator.fore, Rgba::rgb(1, 2, 3));
        assert_eq!(decorator.back, Rgba::rgb(4, 5, 6));

        // A bulk replacement keeps per-category bold flags
        let table = registry.table(LanguageId::Python).unwrap();
        let grey: Vec<ColorSlot> = table
            .slots()
            .iter()
            .map(|s| ColorSlot::new(Rgba::hex(0x444444), s.external_name.clone(), s.role))
            .collect();
        registry.replace_all(LanguageId::Python, grey).unwrap();
        StyleApplier::default().apply(&registry, LanguageId::Python, &mut surface);
        assert_eq!(surface.style(5).unwrap().fore, Rgba::hex(0x444444));
        assert!(surface.style(5).unwrap().bold);
    }

    #[test]
    fn test_config_flows_through() {
        let config = Config {
            font: "Iosevka".to_string(),
            font_size: 13,
            fold_margin_width: 20,
            fold_marker_back: Rgba::hex(0x202020),
            ..Config::default()
        };
        let mut surface = MemorySurface::new();
        StyleApplier::new(&config).apply(&StyleRegistry::new(), LanguageId::Json, &mut surface);

        assert_eq!(surface.state.font, Some(("Iosevka".to_string(), 13)));
        let margin = surface.state.fold_margin.unwrap();
        assert_eq!(margin.width, 20);
        assert_eq!(margin.back, Rgba::hex(0x202020));
    }

    #[test]
    fn test_apply_for_file() {
        let registry = StyleRegistry::new();
        let applier = StyleApplier::default();
        let mut surface = MemorySurface::new();

        assert_eq!(applier.apply_for_file(&registry, "build.PS1", &mut surface), Some(LanguageId::PowerShell));
        assert_eq!(surface.state.tokenizer, Some(Tokenizer::Name("powershell")));
        assert_eq!(applier.apply_for_file(&registry, "notes.txt", &mut surface), None);
    }
}
