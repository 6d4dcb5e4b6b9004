//! Scripting and installer lexers

use super::{bold, shaded, style, Category, KeywordSet, LexerDef, Tokenizer};
use crate::language::LanguageId;

const BATCH_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    bold("Word", "KEYWORDS", 2, 0x0000FF),
    shaded("Label", "LABEL", 3, 0xFF0000, 0xFFFF80),
    style("Hide", "HIDE SYBOL", 4, 0xFF00FF),
    style("Command", "COMMAND", 5, 0x0080FF),
    style("Identifier", "VARIABLE", 6, 0xFF8000),
    bold("Operator", "OPERATOR", 7, 0xFF0000),
];

const POWERSHELL_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    style("String", "STRING", 2, 0x808080),
    style("Character", "CHARACTER", 3, 0x808080),
    style("Number", "NUMBER", 4, 0xFF8000),
    style("Variable", "VARIABLE", 5, 0xFF8000),
    bold("Operator", "OPERATOR", 6, 0x000080),
    style("Identifier", "DEFAULT", 7, 0x000000),
    bold("Keyword", "INSTRUCTION WORD", 8, 0x0000FF),
    style("Cmdlet", "CMDLET", 9, 0x8000FF),
    style("Alias", "ALIAS", 10, 0x0080FF),
    style("Function", "FUNCTION", 11, 0x0080C0),
    style("User1", "USER1", 12, 0x804000),
    style("CommentStream", "COMMENT", 13, 0x008000),
    style("HereString", "HERE STRING", 14, 0x808080),
    style("HereCharacter", "HERE CHARACTER", 15, 0x808080),
    bold("CommentDocKeyword", "COMMENT DOC KEYWORD", 16, 0x008080),
];

const PYTHON_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("CommentLine", "COMMENTLINE", 1, 0x008000),
    style("Number", "NUMBER", 2, 0xFF0000),
    style("String", "STRING", 3, 0x808080),
    style("Character", "CHARACTER", 4, 0x808080),
    bold("Word", "KEYWORDS", 5, 0x0000FF),
    style("Triple", "TRIPLE", 6, 0xFF8000),
    style("TripleDouble", "TRIPLEDOUBLE", 7, 0xFF8000),
    bold("ClassName", "CLASSNAME", 8, 0x000000),
    style("DefName", "DEFNAME", 9, 0xFF00FF),
    bold("Operator", "OPERATOR", 10, 0x000080),
    style("Identifier", "IDENTIFIER", 11, 0x000000),
    style("CommentBlock", "COMMENTBLOCK", 12, 0x008000),
    style("StringEol", "STRING", 13, 0x808080),
    style("Word2", "KEYWORDS2", 14, 0x880088),
    style("Decorator", "DECORATOR", 15, 0xFF8000),
    style("FString", "F STRING", 16, 0x808080),
];

const NSIS_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENTLINE", 1, 0x008000),
    style("StringDq", "STRING DOUBLE QUOTE", 2, 0x808080),
    style("StringLq", "STRING LEFT QUOTE", 3, 0x808080),
    style("StringRq", "STRING RIGHT QUOTE", 4, 0x808080),
    style("Function", "FUNCTION", 5, 0x0000FF),
    style("Variable", "VARIABLE", 6, 0xFF8000),
    shaded("Label", "LABEL", 7, 0xFF0000, 0xFFFF80),
    style("UserDefined", "USER DEFINED", 8, 0x0080C0),
    bold("SectionDef", "SECTION", 9, 0x000080),
    bold("SubSectionDef", "SUBSECTION", 10, 0x000080),
    style("IfDefineDef", "IF DEFINE", 11, 0x804000),
    bold("MacroDef", "MACRO", 12, 0x800000),
    style("StringVar", "STRING VAR", 13, 0xFF8000),
    style("Number", "NUMBER", 14, 0xFF0000),
    bold("SectionGroup", "SECTION GROUP", 15, 0x000080),
    style("PageEx", "PAGE EX", 16, 0x0000FF),
    bold("FunctionDef", "FUNCTION DEFINITIONS", 17, 0x0000FF),
    style("CommentBox", "COMMENT", 18, 0x008000),
];

const INNO_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    bold("Keyword", "KEYWORD", 2, 0x0000FF),
    style("Parameter", "PARAMETER", 3, 0x0000FF),
    bold("Section", "SECTION", 4, 0x000080),
    style("Preprocessor", "PREPROCESSOR", 5, 0x804000),
    style("InlineExpansion", "PREPROCESSOR INLINE", 6, 0x804000),
    style("CommentPascal", "PASCAL COMMENT", 7, 0x008000),
    bold("KeywordPascal", "PASCAL KEYWORD", 8, 0x0000FF),
    style("KeywordUser", "KEYWORD USER", 9, 0x8000FF),
    style("StringDouble", "STRING DOUBLE", 10, 0x808080),
    style("StringSingle", "STRING SINGLE", 11, 0x808080),
    style("Identifier", "DEFAULT", 12, 0x000000),
];

const VB_STYLES: &[Category] = &[
    style("Default", "DEFAULT", 0, 0x000000),
    style("Comment", "COMMENT", 1, 0x008000),
    style("Number", "NUMBER", 2, 0xFF0000),
    bold("Keyword", "KEYWORD", 3, 0x0000FF),
    style("String", "STRING", 4, 0x808080),
    style("Preprocessor", "PREPROCESSOR", 5, 0xFF0000),
    bold("Operator", "OPERATOR", 6, 0x000080),
    style("Identifier", "DEFAULT", 7, 0x000000),
    style("Date", "DATE", 8, 0x008080),
    style("StringEol", "STRING", 9, 0x808080),
    style("Keyword2", "KEYWORD2", 10, 0x8000FF),
];

pub static BATCH: LexerDef = LexerDef {
    language: LanguageId::Batch,
    tokenizer: Tokenizer::Name("batch"),
    categories: BATCH_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "assoc break call cd chdir cls color copy date del dir do echo else endlocal errorlevel exist \
                    exit for ftype goto if in md mkdir move not nul off on path pause popd prompt pushd rd rem ren \
                    rename rmdir set setlocal shift start time title type ver verify vol",
        },
        KeywordSet {
            index: 1,
            words: "attrib chcp choice find findstr more robocopy sort taskkill tasklist timeout where xcopy",
        },
    ],
    properties: &[],
    folding: false,
};

pub static POWERSHELL: LexerDef = LexerDef {
    language: LanguageId::PowerShell,
    tokenizer: Tokenizer::Name("powershell"),
    categories: POWERSHELL_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "begin break catch class continue data define do dynamicparam else elseif end enum exit filter \
                    finally for foreach from function hidden if in param process return static switch throw trap \
                    try until using var while",
        },
        KeywordSet {
            index: 1,
            words: "add-content clear-host copy-item foreach-object get-childitem get-content get-item get-process \
                    invoke-command new-item out-file remove-item select-object set-content set-location \
                    sort-object start-process where-object write-error write-host write-output",
        },
        KeywordSet {
            index: 2,
            words: "cat cd cls copy del dir echo gc gci gi gps kill ls mv ps pwd rm sleep type",
        },
    ],
    properties: &[("fold", "1"), ("fold.compact", "0"), ("fold.comment", "1"), ("fold.at.else", "1")],
    folding: true,
};

pub static PYTHON: LexerDef = LexerDef {
    language: LanguageId::Python,
    tokenizer: Tokenizer::Name("python"),
    categories: PYTHON_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "False None True and as assert async await break case class continue def del elif else except \
                    finally for from global if import in is lambda match nonlocal not or pass raise return try \
                    while with yield",
        },
        KeywordSet {
            index: 1,
            words: "abs all any bool bytes callable chr dict dir enumerate filter float format getattr hasattr \
                    hash hex id input int isinstance issubclass iter len list map max min next object open ord \
                    print property range repr reversed round self set setattr slice sorted str sum super tuple \
                    type zip",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("fold.compact", "0"),
        ("fold.comment.python", "1"),
        ("fold.quotes.python", "1"),
        ("tab.timmy.whinge.level", "1"),
        ("lexer.python.strings.over.newline", "0"),
    ],
    folding: true,
};

pub static NSIS: LexerDef = LexerDef {
    language: LanguageId::Nsis,
    tokenizer: Tokenizer::Name("nsis"),
    categories: NSIS_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "Abort AddBrandingImage AllowRootDirInstall BrandingText Call CallInstDLL Caption ClearErrors \
                    CopyFiles CreateDirectory CreateShortCut Delete DeleteRegKey DetailPrint Exec ExecWait File \
                    FunctionEnd Goto IfErrors IfFileExists Icon InstallDir Name OutFile Page Quit ReadRegStr \
                    RequestExecutionLevel Return RMDir SectionEnd SetOutPath StrCmp WriteRegStr WriteUninstaller",
        },
        KeywordSet {
            index: 1,
            words: "$0 $1 $2 $3 $4 $5 $6 $7 $8 $9 $INSTDIR $OUTDIR $CMDLINE $LANGUAGE $PROGRAMFILES $DESKTOP \
                    $SMPROGRAMS $TEMP $WINDIR $SYSDIR $EXEDIR",
        },
        KeywordSet {
            index: 2,
            words: "!define !include !insertmacro !macro !macroend !ifdef !ifndef !else !endif !undef !verbose",
        },
    ],
    properties: &[
        ("fold", "1"),
        ("nsis.uservars", "1"),
        ("nsis.ignorecase", "1"),
        ("nsis.foldutilcmd", "1"),
    ],
    folding: true,
};

pub static INNO_SETUP: LexerDef = LexerDef {
    language: LanguageId::InnoSetup,
    tokenizer: Tokenizer::Id(76),
    categories: INNO_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "code components custommessages dirs files icons ini installdelete langoptions languages \
                    messages registry run setup tasks types uninstalldelete uninstallrun",
        },
        KeywordSet {
            index: 1,
            words: "appid appname appversion appverbose apppublisher compression defaultdirname defaultgroupname \
                    outputbasefilename outputdir privilegesrequired setupiconfile solidcompression wizardstyle",
        },
        KeywordSet {
            index: 2,
            words: "name source destdir flags components tasks parameters workingdir filename valuetype valuename \
                    valuedata root subkey description",
        },
        KeywordSet {
            index: 3,
            words: "#define #else #endif #error #expr #if #ifdef #ifndef #include #insert #pragma #sub #undef",
        },
        KeywordSet {
            index: 4,
            words: "and begin break case const continue do downto else end except exit false finally for function \
                    if in nil not of or procedure repeat then to true try type until var while with",
        },
    ],
    properties: &[("fold", "1"), ("fold.compact", "0")],
    folding: true,
};

pub static VB_DOTNET: LexerDef = LexerDef {
    language: LanguageId::VbDotNet,
    tokenizer: Tokenizer::Name("vb"),
    categories: VB_STYLES,
    keywords: &[
        KeywordSet {
            index: 0,
            words: "addhandler addressof and andalso as boolean byref byte byval call case catch cbool cbyte char \
                    class const continue date decimal declare default delegate dim do double each else elseif end \
                    enum erase error event exit false finally for friend function get global goto handles if \
                    implements imports in inherits integer interface is let lib like long loop me mod module \
                    mustinherit mustoverride mybase namespace new next not nothing object of on option optional or \
                    orelse overloads overridable overrides paramarray private property protected public raiseevent \
                    readonly redim rem return select set shared short single static step stop string structure sub \
                    then throw to true try typeof until using when while with withevents writeonly xor",
        },
        KeywordSet {
            index: 1,
            words: "async await iterator yield nameof",
        },
    ],
    properties: &[("fold", "1"), ("fold.compact", "0")],
    folding: true,
};
