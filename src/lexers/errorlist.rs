//! Compiler/tool output lexer

use super::{bold, shaded, style, Category, LexerDef, Tokenizer};
use crate::language::LanguageId;

const ERROR_LIST_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Python", "PYTHON", 1, 0xFF0000),
    style("Gcc", "GCC", 2, 0x800080),
    style("Ms", "MS", 3, 0x808000),
    bold("Cmd", "CMD", 4, 0x0000FF),
    style("Borland", "BORLAND", 5, 0xB06000),
    style("Perl", "PERL", 6, 0xFF0000),
    style("Net", "NET", 7, 0x800000),
    style("Lua", "LUA", 8, 0x3F3F3F),
    style("Ctag", "CTAG", 9, 0xFF00FF),
    style("DiffChanged", "DIFF CHANGED", 10, 0x007F00),
    style("DiffAddition", "DIFF ADDITION", 11, 0x00007F),
    style("DiffDeletion", "DIFF DELETION", 12, 0x007F7F),
    bold("DiffMessage", "DIFF MESSAGE", 13, 0x7F0000),
    style("Php", "PHP", 14, 0xFF0000),
    shaded("Value", "VALUE", 21, 0x000000, 0xFFFF80),
];

pub static ERROR_LIST: LexerDef = LexerDef {
    language: LanguageId::ErrorList,
    tokenizer: Tokenizer::Name("errorlist"),
    categories: ERROR_LIST_STYLES,
    keywords: &[],
    properties: &[("lexer.errorlist.value.separate", "1")],
    folding: false,
};
