//! Built-in lexer definitions
//!
//! One authoritative schema per language. The color table, both of its
//! lookup indices, the keyword catalog and the dispatch entry are all
//! derived from these definitions, so they cannot drift apart.

mod c_family;
mod data;
mod errorlist;
mod markup;
mod pascal;
mod scripting;

use crate::language::LanguageId;
use crate::style::Rgba;

/// Background used by almost every category
pub(crate) const PAPER: u32 = 0xFFFFFF;

/// One style category of a lexer
///
/// A category owns two adjacent color slots, foreground then background,
/// named `{name}Fore` and `{name}Back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Semantic name prefix (e.g. "Comment")
    pub name: &'static str,
    /// Category label shared with external style conventions (e.g. "COMMENT")
    pub external: &'static str,
    /// Style number on the surface
    pub style: u8,
    /// Default foreground
    pub fore: Rgba,
    /// Default background
    pub back: Rgba,
    /// Emphasis categories are drawn bold
    pub bold: bool,
}

impl Category {
    /// Semantic name of the foreground slot
    pub fn fore_name(&self) -> String {
        format!("{}Fore", self.name)
    }

    /// Semantic name of the background slot
    pub fn back_name(&self) -> String {
        format!("{}Back", self.name)
    }
}

/// Plain category on the default background
pub(crate) const fn style(name: &'static str, external: &'static str, style: u8, fore: u32) -> Category {
    Category {
        name,
        external,
        style,
        fore: Rgba::hex(fore),
        back: Rgba::hex(PAPER),
        bold: false,
    }
}

/// Bold category on the default background
pub(crate) const fn bold(name: &'static str, external: &'static str, style: u8, fore: u32) -> Category {
    Category {
        bold: true,
        ..self::style(name, external, style, fore)
    }
}

/// Plain category with its own background
pub(crate) const fn shaded(
    name: &'static str,
    external: &'static str,
    style: u8,
    fore: u32,
    back: u32,
) -> Category {
    Category {
        back: Rgba::hex(back),
        ..self::style(name, external, style, fore)
    }
}

/// A surface keyword bucket and its word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    /// Surface-side bucket index
    pub index: u8,
    /// Space-separated words
    pub words: &'static str,
}

/// How the surface picks its tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tokenizer {
    /// A tokenizer in the surface's built-in registry
    Name(&'static str),
    /// A numeric lexer identifier, used for vendor lexers outside the registry
    Id(i32),
}

/// Complete static configuration for one language
#[derive(Debug)]
pub struct LexerDef {
    pub language: LanguageId,
    pub tokenizer: Tokenizer,
    /// Style categories in slot order
    pub categories: &'static [Category],
    pub keywords: &'static [KeywordSet],
    /// Fixed lexer properties, pushed verbatim
    pub properties: &'static [(&'static str, &'static str)],
    /// Whether the fold margin is configured
    pub folding: bool,
}

static DEFINITIONS: [&LexerDef; 20] = [
    &c_family::CPP,
    &c_family::CS,
    &markup::XML,
    &data::SQL,
    &scripting::BATCH,
    &pascal::PASCAL,
    &markup::PHP,
    &markup::HTML,
    &scripting::POWERSHELL,
    &data::INI,
    &scripting::PYTHON,
    &scripting::NSIS,
    &scripting::INNO_SETUP,
    &data::YAML,
    &c_family::JAVA,
    &c_family::JAVASCRIPT,
    &markup::CSS,
    &scripting::VB_DOTNET,
    &data::JSON,
    &errorlist::ERROR_LIST,
];

/// Lexer definition for a language, if it has one
pub fn definition(language: LanguageId) -> Option<&'static LexerDef> {
    DEFINITIONS.iter().copied().find(|def| def.language == language)
}

/// All built-in definitions
pub fn all_definitions() -> impl Iterator<Item = &'static LexerDef> {
    DEFINITIONS.iter().copied()
}
