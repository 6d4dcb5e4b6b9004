//! Markup lexers: XML, HTML, PHP and CSS

use super::{bold, shaded, style, Category, KeywordSet, LexerDef, Tokenizer};
use crate::language::LanguageId;

const XML_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Tag", "TAG", 1, 0x0000FF),
    style("TagUnknown", "TAG", 2, 0x0000FF),
    style("Attribute", "ATTRIBUTE", 3, 0xFF0000),
    style("AttributeUnknown", "ATTRIBUTE", 4, 0xFF0000),
    style("Number", "NUMBER", 5, 0xFF0000),
    bold("DoubleString", "DOUBLESTRING", 6, 0x8000FF),
    bold("SingleString", "SINGLESTRING", 7, 0x8000FF),
    style("Other", "DEFAULT", 8, 0x000000),
    style("Comment", "COMMENT", 9, 0x008000),
    style("Entity", "ENTITY", 10, 0x000000),
    style("TagEnd", "TAGEND", 11, 0x0000FF),
    shaded("XmlStart", "XMLSTART", 12, 0xFF0000, 0xFFFF00),
    shaded("XmlEnd", "XMLEND", 13, 0xFF0000, 0xFFFF00),
    shaded("CData", "CDATA", 17, 0xFF8000, 0xFFFFFF),
    style("Value", "VALUE", 19, 0xFF8000),
];

const HTML_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Tag", "TAG", 1, 0x0000FF),
    style("TagUnknown", "TAGUNKNOWN", 2, 0x0000FF),
    style("Attribute", "ATTRIBUTE", 3, 0xFF0000),
    style("AttributeUnknown", "ATTRIBUTEUNKNOWN", 4, 0xFF0000),
    style("Number", "NUMBER", 5, 0xFF0000),
    style("DoubleString", "DOUBLESTRING", 6, 0x8000FF),
    style("SingleString", "SINGLESTRING", 7, 0x8000FF),
    style("Other", "OTHER", 8, 0x800080),
    style("Comment", "COMMENT", 9, 0x008000),
    style("Entity", "ENTITY", 10, 0x000000),
    style("TagEnd", "TAGEND", 11, 0x0000FF),
    shaded("XmlStart", "XMLSTART", 12, 0x0000FF, 0xFFFF00),
    shaded("XmlEnd", "XMLEND", 13, 0x0000FF, 0xFFFF00),
    style("Script", "SCRIPT", 14, 0x000080),
    style("Value", "VALUE", 19, 0xFF8000),
    bold("JsKeyword", "KEYWORD", 47, 0x000080),
    style("JsComment", "COMMENT", 42, 0x008000),
    style("JsString", "DOUBLESTRING", 48, 0x808080),
];

const PHP_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("PhpDefault", "DEFAULT", 118, 0x000033),
    style("String", "STRING", 119, 0x808080),
    style("SimpleString", "STRING VARIABLE", 120, 0x808080),
    bold("Word", "WORD", 121, 0x0000FF),
    style("Number", "NUMBER", 122, 0xFF8000),
    style("Variable", "VARIABLE", 123, 0x000080),
    style("Comment", "COMMENT", 124, 0x008000),
    style("CommentLine", "COMMENTLINE", 125, 0x008000),
    style("StringVariable", "STRING VARIABLE", 126, 0x000080),
    bold("Operator", "OPERATOR", 127, 0x8000FF),
];

const CSS_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    bold("Tag", "TAG", 1, 0x000080),
    style("Class", "CLASS", 2, 0xFF0000),
    style("PseudoClass", "PSEUDOCLASS", 3, 0xFF8000),
    style("UnknownPseudoClass", "UNKNOWN_PSEUDOCLASS", 4, 0xFF8080),
    bold("Operator", "OPERATOR", 5, 0x000000),
    bold("Identifier", "IDENTIFIER", 6, 0x8080C0),
    style("UnknownIdentifier", "UNKNOWN_IDENTIFIER", 7, 0x000000),
    style("Value", "VALUE", 8, 0x8000FF),
    style("Comment", "COMMENT", 9, 0x008000),
    bold("Id", "ID", 10, 0x0080FF),
    bold("Important", "IMPORTANT", 11, 0xFF0000),
    style("Directive", "DIRECTIVE", 12, 0x0080FF),
    style("DoubleString", "STRING", 13, 0x808080),
    style("SingleString", "STRING", 14, 0x808080),
];

pub static XML: LexerDef = LexerDef {
    language: LanguageId::Xml,
    tokenizer: Tokenizer::Name("xml"),
    categories: XML_STYLES,
    keywords: &[],
    properties: &[
        ("fold", "1"),
        ("fold.html", "1"),
        ("fold.compact", "0"),
        ("lexer.xml.allow.scripts", "1"),
    ],
    folding: true,
};

pub static HTML: LexerDef = LexerDef {
    language: LanguageId::Html,
    tokenizer: Tokenizer::Name("hypertext"),
    categories: HTML_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "a abbr address area article aside audio b base bdi bdo blockquote body br button canvas caption \
                    cite code col colgroup data datalist dd del details dfn dialog div dl dt em embed fieldset \
                    figcaption figure footer form h1 h2 h3 h4 h5 h6 head header hr html i iframe img input ins kbd \
                    label legend li link main map mark meta meter nav noscript object ol optgroup option output p \
                    param picture pre progress q rp rt ruby s samp script section select small source span strong \
                    style sub summary sup table tbody td template textarea tfoot th thead time title tr track u ul \
                    var video wbr alt charset class content dir height href id lang name rel src style type value width",
        },
        KeywordSet {
            index: 1,
            words: "break case catch class const continue default delete do else export false finally for function \
                    if import in instanceof let new null return switch this throw true try typeof var void while with",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("fold.html", "1"),
        ("fold.html.preprocessor", "1"),
        ("fold.compact", "0"),
        ("fold.hypertext.comment", "1"),
    ],
    folding: true,
};

pub static PHP: LexerDef = LexerDef {
    language: LanguageId::Php,
    tokenizer: Tokenizer::Name("phpscript"),
    categories: PHP_STYLES,
    keywords: &[KeywordSet {
        index: 4,
        words: "abstract and array as break callable case catch class clone const continue declare default die do \
                echo else elseif empty enddeclare endfor endforeach endif endswitch endwhile enum eval exit extends \
                false final finally fn for foreach function global goto if implements include include_once \
                instanceof insteadof interface isset list match namespace new null or print private protected \
                public readonly require require_once return static switch throw trait true try unset use var while \
                xor yield",
    }],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("fold.comment", "1"),
        ("fold.html", "1"),
        ("fold.hypertext.comment", "1"),
        ("lexer.html.mako", "0"),
    ],
    folding: true,
};

pub static CSS: LexerDef = LexerDef {
    language: LanguageId::Css,
    tokenizer: Tokenizer::Name("css"),
    categories: CSS_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "align-content align-items background background-color border border-radius bottom box-shadow \
                    color cursor display flex flex-direction float font font-family font-size font-weight gap grid \
                    height justify-content left line-height margin max-width min-height opacity overflow padding \
                    position right text-align text-decoration top transform transition visibility width z-index",
        },
        KeywordSet {
            index: 1,
            words: "active after before checked disabled empty first-child focus hover last-child link not \
                    nth-child root visited",
        },
    ],
    properties: &[("fold", "1"), ("fold.compact", "0"), ("fold.comment", "1")],
    folding: true,
};
