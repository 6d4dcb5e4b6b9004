//! C-family lexers: C/C++, C#, Java and JavaScript
//!
//! All four run on the surface's `cpp` tokenizer and share its style
//! numbering.

use super::{bold, style, Category, KeywordSet, LexerDef, Tokenizer};
use crate::language::LanguageId;

const CPP_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    style("CommentLine", "COMMENT LINE", 2, 0x008000),
    style("CommentDoc", "COMMENT DOC", 3, 0x008080),
    style("Number", "NUMBER", 4, 0xFF8000),
    bold("Word", "INSTRUCTION WORD", 5, 0x0000FF),
    style("String", "STRING", 6, 0x808080),
    style("Character", "CHARACTER", 7, 0x808080),
    style("Preprocessor", "PREPROCESSOR", 9, 0x804000),
    bold("Operator", "OPERATOR", 10, 0x000080),
    style("Identifier", "DEFAULT", 11, 0x000000),
    style("StringEol", "STRING", 12, 0x808080),
    style("Verbatim", "VERBATIM", 13, 0x808080),
    bold("Regex", "REGEX", 14, 0x8000FF),
    style("CommentLineDoc", "COMMENT LINE DOC", 15, 0x008080),
    style("Word2", "TYPE WORD", 16, 0x8000FF),
    bold("CommentDocKeyword", "COMMENT DOC KEYWORD", 17, 0x008080),
    style("CommentDocKeywordError", "COMMENT DOC KEYWORD ERROR", 18, 0x008080),
    style("GlobalClass", "GLOBAL CLASS", 19, 0x0080C0),
    style("PreprocessorComment", "PREPROCESSOR COMMENT", 23, 0x008000),
];

const JS_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    style("CommentLine", "COMMENT LINE", 2, 0x008000),
    style("CommentDoc", "COMMENT DOC", 3, 0x008080),
    style("Number", "NUMBER", 4, 0xFF0000),
    bold("Word", "KEYWORD", 5, 0x0000FF),
    style("String", "STRING", 6, 0x808080),
    style("Character", "CHARACTER", 7, 0x808080),
    bold("Operator", "OPERATOR", 10, 0x000080),
    style("Identifier", "DEFAULT", 11, 0x000000),
    style("StringEol", "STRING", 12, 0x808080),
    bold("Regex", "REGEX", 14, 0x8000FF),
    style("CommentLineDoc", "COMMENT LINE DOC", 15, 0x008080),
    style("Word2", "TYPE WORD", 16, 0x8000FF),
    style("TemplateLiteral", "STRINGRAW", 20, 0xB36200),
];

const CPP_FOLDING: &[(&str, &str)] = &[
    ("fold", "1"),
    ("fold.compact", "0"),
    ("fold.comment", "1"),
    ("fold.preprocessor", "1"),
    ("fold.at.else", "1"),
];

pub static CPP: LexerDef = LexerDef {
    language: LanguageId::Cpp,
    tokenizer: Tokenizer::Name("cpp"),
    categories: CPP_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "alignas alignof and asm auto bitand bitor bool break case catch char char8_t char16_t char32_t \
                    class compl concept const consteval constexpr constinit const_cast continue co_await co_return \
                    co_yield decltype default delete do double dynamic_cast else enum explicit export extern false \
                    float for friend goto if inline int long mutable namespace new noexcept not nullptr operator or \
                    private protected public register reinterpret_cast requires return short signed sizeof static \
                    static_assert static_cast struct switch template this thread_local throw true try typedef typeid \
                    typename union unsigned using virtual void volatile wchar_t while xor",
        },
        KeywordSet {
            index: 1,
            words: "size_t ptrdiff_t int8_t int16_t int32_t int64_t uint8_t uint16_t uint32_t uint64_t \
                    string wstring vector map set unordered_map unique_ptr shared_ptr weak_ptr",
        },
        KeywordSet {
            index: 2,
            words: "a addindex addtogroup anchor arg attention author b brief bug c class code date def defgroup \
                    deprecated dontinclude e em endcode endhtmlonly endif endlatexonly endlink endverbatim enum \
                    example exception f file fn hideinitializer htmlinclude htmlonly if image include ingroup \
                    internal invariant interface latexonly li line link mainpage name namespace nosubgrouping note \
                    overload p page par param post pre ref relates remarks return retval sa section see showinitializer \
                    since skip skipline struct subsection test throw todo typedef union until var verbatim verbinclude \
                    version warning weakgroup",
        },
    ],
    properties: CPP_FOLDING,
    folding: true,
};

pub static CS: LexerDef = LexerDef {
    language: LanguageId::Cs,
    tokenizer: Tokenizer::Name("cpp"),
    categories: CPP_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "abstract as base break case catch checked class const continue default delegate do else enum \
                    event explicit extern false finally fixed for foreach goto if implicit in interface internal is \
                    lock namespace new null operator out override params private protected public readonly record ref \
                    return sealed sizeof stackalloc static struct switch this throw true try typeof unchecked unsafe \
                    using virtual volatile while add alias async await get global init nameof partial remove set \
                    value var when where yield",
        },
        KeywordSet {
            index: 1,
            words: "bool byte char decimal double dynamic float int long nint nuint object sbyte short string uint \
                    ulong ushort void Boolean Byte Char DateTime Decimal Double Int16 Int32 Int64 Object SByte Single \
                    String UInt16 UInt32 UInt64",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("fold.comment", "1"),
        ("fold.preprocessor", "1"),
        ("fold.at.else", "1"),
        ("lexer.cpp.track.preprocessor", "0"),
        ("lexer.cpp.verbatim.strings.allow.escapes", "1"),
    ],
    folding: true,
};

pub static JAVA: LexerDef = LexerDef {
    language: LanguageId::Java,
    tokenizer: Tokenizer::Name("cpp"),
    categories: CPP_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "abstract assert break case catch class const continue default do else enum extends final \
                    finally for goto if implements import instanceof interface native new package private protected \
                    public record return sealed permits static strictfp super switch synchronized this throw throws \
                    transient try var void volatile while yield true false null",
        },
        KeywordSet {
            index: 1,
            words: "boolean byte char double float int long short String Object Integer Long Double Float Boolean \
                    Character Byte Short List Map Set",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("fold.comment", "1"),
        ("fold.at.else", "1"),
        ("lexer.cpp.allow.dollars", "1"),
    ],
    folding: true,
};

pub static JAVASCRIPT: LexerDef = LexerDef {
    language: LanguageId::JavaScript,
    tokenizer: Tokenizer::Name("cpp"),
    categories: JS_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "async await break case catch class const continue debugger default delete do else export \
                    extends false finally for function if import in instanceof let new null of return static super \
                    switch this throw true try typeof undefined var void while with yield",
        },
        KeywordSet {
            index: 1,
            words: "Array Boolean Date Error Function JSON Map Math Number Object Promise Proxy Reflect RegExp Set \
                    String Symbol WeakMap WeakSet console document window",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("fold.comment", "1"),
        ("fold.at.else", "1"),
        ("lexer.cpp.allow.dollars", "1"),
        ("lexer.cpp.backquoted.strings", "1"),
    ],
    folding: true,
};
