//! Text styling surface
//!
//! The editing widget that tokenizes and paints text is external. This
//! module defines the calls the dispatcher makes on it, plus an in-memory
//! surface that records them.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::lexers::Tokenizer;
use crate::style::Rgba;

bitflags! {
    /// Automatic folding behavior
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AutoFold: u32 {
        /// Show lines when their fold point is expanded
        const SHOW = 0x1;
        /// Toggle folds on margin click
        const CLICK = 0x2;
        /// Re-fold when fold structure changes
        const CHANGE = 0x4;
    }
}

/// Fold marker numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FoldMarker {
    FolderEnd = 25,
    FolderOpenMid = 26,
    FolderMidTail = 27,
    FolderTail = 28,
    FolderSub = 29,
    Folder = 30,
    FolderOpen = 31,
}

/// Glyphs that can be drawn for a fold marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSymbol {
    BoxPlus,
    BoxMinus,
    BoxPlusConnected,
    BoxMinusConnected,
    TCorner,
    LCorner,
    VLine,
}

/// Box-tree fold glyphs
pub const BOX_TREE: [(FoldMarker, MarkerSymbol); 7] = [
    (FoldMarker::Folder, MarkerSymbol::BoxPlus),
    (FoldMarker::FolderOpen, MarkerSymbol::BoxMinus),
    (FoldMarker::FolderEnd, MarkerSymbol::BoxPlusConnected),
    (FoldMarker::FolderMidTail, MarkerSymbol::TCorner),
    (FoldMarker::FolderOpenMid, MarkerSymbol::BoxMinusConnected),
    (FoldMarker::FolderSub, MarkerSymbol::VLine),
    (FoldMarker::FolderTail, MarkerSymbol::LCorner),
];

/// Fold margin layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldMargin {
    /// Margin number reserved for fold symbols
    pub margin: u8,
    /// Width in pixels
    pub width: u32,
    pub glyphs: [(FoldMarker, MarkerSymbol); 7],
    /// Marker outline color
    pub fore: Rgba,
    /// Marker fill color
    pub back: Rgba,
}

/// Calls the dispatcher makes on an editing widget
pub trait TextStylingSurface {
    /// Clear every style back to the widget default
    fn reset_styles(&mut self);

    /// Drop keyword lists, lexer properties and fold configuration left by
    /// a previous language
    fn clear_lexer_state(&mut self);

    /// Font used by the default style
    fn set_default_font(&mut self, name: &str, size: u32);

    fn set_style_attributes(&mut self, style: u8, fore: Rgba, back: Rgba, bold: bool);

    fn select_tokenizer(&mut self, tokenizer: Tokenizer);

    fn set_keywords(&mut self, set: u8, words: &str);

    fn set_property(&mut self, name: &str, value: &str);

    fn configure_folding_margin(&mut self, margin: &FoldMargin);

    fn enable_automatic_folding(&mut self, flags: AutoFold);
}

/// Attributes pushed for one style number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleAttributes {
    pub fore: Rgba,
    pub back: Rgba,
    pub bold: bool,
}

/// Observable configuration of a [`MemorySurface`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub font: Option<(String, u32)>,
    pub styles: BTreeMap<u8, StyleAttributes>,
    pub tokenizer: Option<Tokenizer>,
    pub keywords: BTreeMap<u8, String>,
    pub properties: BTreeMap<String, String>,
    pub fold_margin: Option<FoldMargin>,
    pub auto_fold: AutoFold,
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    ResetStyles,
    ClearLexerState,
    DefaultFont,
    Style(u8),
    Tokenizer(Tokenizer),
    Keywords(u8),
    Property(String),
    FoldMargin,
    AutoFold(AutoFold),
}

/// A surface that keeps its configuration in memory
///
/// Mirrors widget semantics: a style reset clears style attributes only,
/// keyword lists, properties and folding persist until overwritten or
/// cleared with [`clear_lexer_state`](TextStylingSurface::clear_lexer_state).
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub state: SurfaceState,
    /// Calls in the order they were made
    pub ops: Vec<SurfaceOp>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, style: u8) -> Option<&StyleAttributes> {
        self.state.styles.get(&style)
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.state.properties.get(name).map(String::as_str)
    }

    pub fn keywords(&self, set: u8) -> Option<&str> {
        self.state.keywords.get(&set).map(String::as_str)
    }
}

impl TextStylingSurface for MemorySurface {
    fn reset_styles(&mut self) {
        self.state.styles.clear();
        self.ops.push(SurfaceOp::ResetStyles);
    }

    fn clear_lexer_state(&mut self) {
        self.state.keywords.clear();
        self.state.properties.clear();
        self.state.fold_margin = None;
        self.state.auto_fold = AutoFold::empty();
        self.ops.push(SurfaceOp::ClearLexerState);
    }

    fn set_default_font(&mut self, name: &str, size: u32) {
        self.state.font = Some((name.to_string(), size));
        self.ops.push(SurfaceOp::DefaultFont);
    }

    fn set_style_attributes(&mut self, style: u8, fore: Rgba, back: Rgba, bold: bool) {
        self.state
            .styles
            .insert(style, StyleAttributes { fore, back, bold });
        self.ops.push(SurfaceOp::Style(style));
    }

    fn select_tokenizer(&mut self, tokenizer: Tokenizer) {
        self.state.tokenizer = Some(tokenizer);
        self.ops.push(SurfaceOp::Tokenizer(tokenizer));
    }

    fn set_keywords(&mut self, set: u8, words: &str) {
        self.state.keywords.insert(set, words.to_string());
        self.ops.push(SurfaceOp::Keywords(set));
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.state
            .properties
            .insert(name.to_string(), value.to_string());
        self.ops.push(SurfaceOp::Property(name.to_string()));
    }

    fn configure_folding_margin(&mut self, margin: &FoldMargin) {
        self.state.fold_margin = Some(margin.clone());
        self.ops.push(SurfaceOp::FoldMargin);
    }

    fn enable_automatic_folding(&mut self, flags: AutoFold) {
        self.state.auto_fold = flags;
        self.ops.push(SurfaceOp::AutoFold(flags));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_styles_only() {
        let mut surface = MemorySurface::new();
        surface.set_style_attributes(5, Rgba::BLACK, Rgba::WHITE, true);
        surface.set_keywords(0, "if else");
        surface.set_property("fold", "1");

        surface.reset_styles();
        assert!(surface.style(5).is_none());
        assert_eq!(surface.keywords(0), Some("if else"));
        assert_eq!(surface.property("fold"), Some("1"));
        assert_eq!(surface.ops.last(), Some(&SurfaceOp::ResetStyles));
    }

    #[test]
    fn test_clear_lexer_state() {
        let mut surface = MemorySurface::new();
        surface.set_style_attributes(5, Rgba::BLACK, Rgba::WHITE, true);
        surface.set_keywords(0, "if else");
        surface.set_property("fold", "1");
        surface.enable_automatic_folding(AutoFold::SHOW);

        surface.clear_lexer_state();
        assert!(surface.keywords(0).is_none());
        assert!(surface.property("fold").is_none());
        assert!(surface.state.fold_margin.is_none());
        assert!(surface.state.auto_fold.is_empty());
        assert!(surface.style(5).is_some());
    }

    #[test]
    fn test_auto_fold_flags() {
        let flags = AutoFold::SHOW | AutoFold::CLICK | AutoFold::CHANGE;
        assert_eq!(flags.bits(), 7);
        assert!(AutoFold::default().is_empty());
    }

    #[test]
    fn test_box_tree_covers_every_marker() {
        let mut markers: Vec<_> = BOX_TREE.iter().map(|(m, _)| *m as u8).collect();
        markers.sort_unstable();
        assert_eq!(markers, vec![25, 26, 27, 28, 29, 30, 31]);
    }
}
