//! Pascal / Delphi lexer

use super::{bold, style, Category, KeywordSet, LexerDef, Tokenizer};
use crate::language::LanguageId;

const PASCAL_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Identifier", "IDENTIFIER", 1, 0x000000),
    style("Comment", "COMMENT", 2, 0x008000),
    style("Comment2", "COMMENT", 3, 0x008000),
    style("CommentLine", "COMMENT LINE", 4, 0x008000),
    style("Preprocessor", "PREPROCESSOR", 5, 0x804000),
    style("Preprocessor2", "PREPROCESSOR2", 6, 0x804000),
    style("Number", "NUMBER", 7, 0xFF0000),
    style("HexNumber", "HEX NUMBER", 8, 0xFF0000),
    bold("Word", "INSTRUCTION WORD", 9, 0x0000FF),
    style("String", "STRING", 10, 0x808080),
    style("StringEol", "STRING", 11, 0x808080),
    style("Character", "CHARACTER", 12, 0x808080),
    bold("Operator", "OPERATOR", 13, 0x000080),
    style("Asm", "ASM", 14, 0x8000FF),
];

pub static PASCAL: LexerDef = LexerDef {
    language: LanguageId::Pascal,
    tokenizer: Tokenizer::Name("pascal"),
    categories: PASCAL_STYLES,
    keywords: &[KeywordSet {
        index: 0,
        words: "absolute abstract and array as asm assembler begin case cdecl class const constructor \
                destructor div do downto dynamic else end except exports external file finalization finally for \
                forward function goto if implementation in inherited initialization inline interface is label \
                library message mod nil not object of on or out overload override packed private procedure \
                program property protected public published raise record register reintroduce repeat \
                resourcestring set shl shr stdcall string then threadvar to try type unit until uses var virtual \
                while with xor",
    }],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("fold.comment", "1"),
        ("fold.preprocessor", "1"),
        ("lexer.pascal.smart.highlighting", "1"),
    ],
    folding: true,
};
