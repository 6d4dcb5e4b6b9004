//! Data and query lexers: SQL, INI, YAML and JSON

use super::{bold, shaded, style, Category, KeywordSet, LexerDef, Tokenizer};
use crate::language::LanguageId;

const SQL_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    style("CommentLine", "COMMENT LINE", 2, 0x008000),
    style("CommentDoc", "COMMENT DOC", 3, 0x008080),
    style("Number", "NUMBER", 4, 0xFF8000),
    bold("Word", "KEYWORD", 5, 0x0000FF),
    style("String", "STRING", 6, 0x808080),
    style("Character", "STRING2", 7, 0x808080),
    bold("Operator", "OPERATOR", 10, 0x000080),
    style("Identifier", "DEFAULT", 11, 0x000000),
    style("CommentLineDoc", "COMMENT LINE DOC", 15, 0x008080),
    bold("Word2", "KEYWORD2", 16, 0x8000FF),
    style("User1", "USER1", 19, 0x800000),
    style("QuotedIdentifier", "Q-OPERATOR", 23, 0x804000),
];

const INI_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    shaded("Section", "SECTION", 2, 0x8000FF, 0xF2F4FF),
    style("Assignment", "ASSIGNMENT", 3, 0xFF0000),
    style("DefVal", "DEFVAL", 4, 0xFF0000),
    style("Key", "KEY", 5, 0x0000FF),
];

const YAML_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    style("Identifier", "IDENTIFIER", 2, 0x000080),
    bold("Keyword", "INSTRUCTION WORD", 3, 0x880088),
    style("Number", "NUMBER", 4, 0xFF8000),
    style("Reference", "REFERENCE", 5, 0x008888),
    shaded("Document", "DOCUMENT", 6, 0xFFFFFF, 0x000088),
    style("Text", "TEXT", 7, 0x333366),
    shaded("Error", "ERROR", 8, 0xFFFFFF, 0xFF0000),
    bold("Operator", "OPERATOR", 9, 0x000000),
];

const JSON_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Number", "NUMBER", 1, 0xFF8000),
    style("String", "STRING", 2, 0x808080),
    shaded("StringEol", "STRINGEOL", 3, 0x808080, 0xFFE0E0),
    bold("PropertyName", "PROPERTYNAME", 4, 0x8000FF),
    style("EscapeSequence", "ESCAPESEQUENCE", 5, 0x0000FF),
    style("LineComment", "LINECOMMENT", 6, 0x008000),
    style("BlockComment", "BLOCKCOMMENT", 7, 0x008000),
    bold("Operator", "OPERATOR", 8, 0x000080),
    style("Uri", "URI", 9, 0x0000FF),
    style("CompactIri", "COMPACTIRI", 10, 0x0080FF),
    bold("Keyword", "KEYWORD", 11, 0x0000FF),
    style("LdKeyword", "LDKEYWORD", 12, 0xFF0000),
    shaded("Error", "ERROR", 13, 0xFFFFFF, 0xFF0000),
];

pub static SQL: LexerDef = LexerDef {
    language: LanguageId::Sql,
    tokenizer: Tokenizer::Name("sql"),
    categories: SQL_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "add all alter and any as asc begin between by case check column commit constraint create cross \
                    database default delete desc distinct drop else end exec exists foreign from full group having \
                    if in index inner insert into is join key left like limit merge not null on or order outer \
                    primary procedure references return right rollback select set table then top transaction \
                    trigger truncate union unique update values view when where while with",
        },
        KeywordSet {
            index: 1,
            words: "avg cast coalesce convert count getdate isnull len lower max min nullif round substring sum \
                    upper bigint bit char date datetime decimal float int money nchar nvarchar real smallint text \
                    time tinyint varchar",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("fold.comment", "1"),
        ("fold.sql.at.else", "1"),
        ("lexer.sql.allow.dotted.word", "1"),
        ("sql.backslash.escapes", "1"),
        ("lexer.sql.numbersign.comment", "0"),
    ],
    folding: true,
};

pub static INI: LexerDef = LexerDef {
    language: LanguageId::Ini,
    tokenizer: Tokenizer::Name("props"),
    categories: INI_STYLES,
    keywords: &[],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("lexer.props.allow.initial.spaces", "1"),
    ],
    folding: true,
};

pub static YAML: LexerDef = LexerDef {
    language: LanguageId::Yaml,
    tokenizer: Tokenizer::Name("yaml"),
    categories: YAML_STYLES,
    keywords: &[KeywordSet {
        index: 0,
        words: "true false yes no on off null",
    }],
    properties: &[("fold", "1"), ("fold.compact", "0"), ("fold.comment.yaml", "1")],
    folding: true,
};

pub static JSON: LexerDef = LexerDef {
    language: LanguageId::Json,
    tokenizer: Tokenizer::Id(120),
    categories: JSON_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "false true null",
        },
        KeywordSet {
            index: 1,
            words: "@id @context @type @value @language @container @list @set @reverse @index @base @vocab @graph",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("lexer.json.allow.comments", "1"),
        ("lexer.json.escape.sequence", "1"),
    ],
    folding: true,
};
