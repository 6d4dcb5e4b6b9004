//! Language catalog
//!
//! The closed set of languages this crate has lexer configuration for,
//! together with the static file-extension table used to pick one for a
//! file name.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{Result, StyleError};

/// Label used for languages without a registered one
pub const DEFAULT_LABEL: &str = "text";

/// Languages with lexer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    Cpp,
    Cs,
    Xml,
    Sql,
    Batch,
    Pascal,
    Php,
    Html,
    PowerShell,
    Ini,
    Python,
    Nsis,
    InnoSetup,
    Yaml,
    Java,
    JavaScript,
    Css,
    VbDotNet,
    Json,
    ErrorList,
    /// Plain text; also the result for unrecognized files
    Text,
}

impl LanguageId {
    /// Every language, in extension-resolution priority order
    pub const ALL: [LanguageId; 21] = [
        LanguageId::Cpp,
        LanguageId::Cs,
        LanguageId::Xml,
        LanguageId::Sql,
        LanguageId::Batch,
        LanguageId::Pascal,
        LanguageId::Php,
        LanguageId::Html,
        LanguageId::PowerShell,
        LanguageId::Ini,
        LanguageId::Python,
        LanguageId::Nsis,
        LanguageId::InnoSetup,
        LanguageId::Yaml,
        LanguageId::Java,
        LanguageId::JavaScript,
        LanguageId::Css,
        LanguageId::VbDotNet,
        LanguageId::Json,
        LanguageId::ErrorList,
        LanguageId::Text,
    ];

    /// Space-separated extension list (with leading dots)
    pub fn extensions(&self) -> &'static str {
        match self {
            LanguageId::Cpp => ".cpp .cxx .cc .c .h .hpp .hxx .hh .inl .ino",
            LanguageId::Cs => ".cs .csx",
            LanguageId::Xml => {
                ".xml .xaml .xsd .xsl .xslt .config .csproj .vbproj .vcxproj .resx .svg .plist .manifest"
            }
            LanguageId::Sql => ".sql",
            LanguageId::Batch => ".bat .cmd .nt",
            LanguageId::Pascal => ".pas .pp .dpr .dpk .lpr .inc",
            LanguageId::Php => ".php .php3 .php4 .php5 .phtml",
            LanguageId::Html => ".html .htm .shtml .xhtml .asp .aspx",
            LanguageId::PowerShell => ".ps1 .psm1 .psd1",
            LanguageId::Ini => ".ini .inf .reg .cfg .properties .url",
            LanguageId::Python => ".py .pyw .pyi",
            LanguageId::Nsis => ".nsi .nsh",
            LanguageId::InnoSetup => ".iss .isl",
            LanguageId::Yaml => ".yml .yaml",
            LanguageId::Java => ".java .jav",
            LanguageId::JavaScript => ".js .mjs .cjs .jsm",
            LanguageId::Css => ".css",
            LanguageId::VbDotNet => ".vb .vbs",
            LanguageId::Json => ".json .jsonc .eslintrc .babelrc",
            LanguageId::ErrorList => ".log .err",
            LanguageId::Text => ".txt .text",
        }
    }

    /// External label, if one is registered
    pub fn label(&self) -> Option<&'static str> {
        match self {
            LanguageId::Cpp => Some("cpp"),
            LanguageId::Cs => Some("cs"),
            LanguageId::Xml => Some("xml"),
            LanguageId::Sql => Some("sql"),
            LanguageId::Batch => Some("batch"),
            LanguageId::Pascal => Some("pascal"),
            LanguageId::Php => Some("php"),
            LanguageId::Html => Some("html"),
            LanguageId::PowerShell => Some("powershell"),
            LanguageId::Ini => Some("ini"),
            LanguageId::Python => Some("python"),
            LanguageId::Nsis => Some("nsis"),
            LanguageId::InnoSetup => Some("inno"),
            LanguageId::Yaml => Some("yaml"),
            LanguageId::Java => Some("java"),
            LanguageId::JavaScript => Some("javascript"),
            LanguageId::Css => Some("css"),
            LanguageId::VbDotNet => Some("vb"),
            LanguageId::Json => Some("json"),
            LanguageId::ErrorList => Some("errorlist"),
            LanguageId::Text => None,
        }
    }

    /// Label used when tagging persisted documents
    pub fn display_name(&self) -> &'static str {
        self.label().unwrap_or(DEFAULT_LABEL)
    }

    /// Inverse of [`display_name`](Self::display_name)
    pub fn from_display_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.display_name() == name)
    }

    /// Resolve a file name to a language by its extension
    ///
    /// Matching is case-insensitive. Files without a known extension
    /// resolve to [`LanguageId::Text`].
    pub fn resolve(file_name: impl AsRef<Path>) -> Self {
        let Some(ext) = normalized_extension(file_name.as_ref()) else {
            return LanguageId::Text;
        };
        Self::ALL
            .iter()
            .copied()
            .find(|lang| lang.extensions().split_whitespace().any(|e| e == ext))
            .unwrap_or(LanguageId::Text)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Lower-case extension of the final path component, leading dot included
///
/// Dot-files such as `.eslintrc` count as pure extensions.
fn normalized_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let dot = name.rfind('.')?;
    let ext = &name[dot..];
    if ext.len() < 2 {
        return None;
    }
    Some(ext.to_lowercase())
}

/// Check that no extension is registered under two languages
///
/// Resolution is first-match in priority order, so an overlap would make
/// the later registration unreachable.
pub fn validate_extension_table() -> Result<()> {
    let mut owners: HashMap<&'static str, LanguageId> = HashMap::new();
    for lang in LanguageId::ALL {
        for ext in lang.extensions().split_whitespace() {
            if !ext.starts_with('.') || ext != ext.to_lowercase() {
                return Err(StyleError::Parse(format!(
                    "malformed extension '{}' for {}",
                    ext, lang
                )));
            }
            if let Some(first) = owners.insert(ext, lang) {
                return Err(StyleError::Parse(format!(
                    "extension '{}' registered for both {} and {}",
                    ext, first, lang
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve() {
        assert_eq!(LanguageId::resolve("script.py"), LanguageId::Python);
        assert_eq!(LanguageId::resolve("SCRIPT.PYW"), LanguageId::Python);
        assert_eq!(LanguageId::resolve("Program.cs"), LanguageId::Cs);
        assert_eq!(LanguageId::resolve("/tmp/dir.d/setup.ISS"), LanguageId::InnoSetup);
        assert_eq!(LanguageId::resolve("archive.tar.yml"), LanguageId::Yaml);
        assert_eq!(LanguageId::resolve(".eslintrc"), LanguageId::Json);
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(LanguageId::resolve("file.unknownext"), LanguageId::Text);
        assert_eq!(LanguageId::resolve("Makefile"), LanguageId::Text);
        assert_eq!(LanguageId::resolve("trailing."), LanguageId::Text);
        assert_eq!(LanguageId::resolve(""), LanguageId::Text);
    }

    #[test]
    fn test_extension_table_has_no_overlaps() {
        assert!(validate_extension_table().is_ok());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LanguageId::Cs.display_name(), "cs");
        assert_eq!(LanguageId::InnoSetup.display_name(), "inno");
        assert_eq!(LanguageId::Text.display_name(), DEFAULT_LABEL);

        for lang in LanguageId::ALL {
            assert_eq!(LanguageId::from_display_name(lang.display_name()), Some(lang));
        }
        assert_eq!(LanguageId::from_display_name("CS"), Some(LanguageId::Cs));
        assert_eq!(LanguageId::from_display_name("cobol"), None);
    }
}
