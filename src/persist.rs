//! Color document persistence
//!
//! Saves and loads a language's colors as a small XML document:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <LexerColors lexer="cs">
//!   <Color name="DefaultFore" r="00" g="00" b="00" a="FF" argb="FF000000"/>
//!   <Color name="DefaultBack" r="FF" g="FF" b="FF" a="FF" argb="FFFFFFFF"/>
//!   ...
//! </LexerColors>
//! ```
//!
//! Semantic names are the key, so documents survive reordering. The packed
//! `argb` attribute is authoritative on import; the per-channel attributes
//! are informational (older writers filled all four from the red channel).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{Result, StyleError};
use crate::language::LanguageId;
use crate::style::{Rgba, SlotKey, StyleRegistry};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n";

/// A persisted set of colors for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "LexerColors")]
pub struct ColorDocument {
    /// Display name of the owning language
    #[serde(rename = "@lexer")]
    pub lexer: String,
    #[serde(rename = "Color", default)]
    pub colors: Vec<ColorRecord>,
}

/// One semantic name and its color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@r", default)]
    pub r: String,
    #[serde(rename = "@g", default)]
    pub g: String,
    #[serde(rename = "@b", default)]
    pub b: String,
    #[serde(rename = "@a", default)]
    pub a: String,
    /// Packed `AARRGGBB`
    #[serde(rename = "@argb")]
    pub argb: String,
}

impl ColorRecord {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            r: format!("{:02X}", color.r),
            g: format!("{:02X}", color.g),
            b: format!("{:02X}", color.b),
            a: format!("{:02X}", color.a),
            argb: color.to_argb_hex(),
        }
    }

    pub fn color(&self) -> Result<Rgba> {
        if self.argb.trim().len() != 8 {
            return Err(StyleError::Parse(format!(
                "color '{}' needs 8 hex digits, got '{}'",
                self.name, self.argb
            )));
        }
        Rgba::parse_hex(&self.argb)
    }
}

impl ColorDocument {
    /// Render as XML
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::from(XML_DECLARATION);
        let mut serializer = quick_xml::se::Serializer::new(&mut xml);
        serializer.indent(' ', 2);
        self.serialize(serializer)
            .map_err(|e| StyleError::Parse(e.to_string()))?;
        xml.push('\n');
        Ok(xml)
    }

    /// Parse from XML
    pub fn from_xml(xml: &str) -> Result<Self> {
        quick_xml::de::from_str(xml).map_err(|e| StyleError::Parse(e.to_string()))
    }
}

/// Snapshot a language's colors, one record per semantic name in slot order
pub fn export(registry: &StyleRegistry, language: LanguageId) -> Result<ColorDocument> {
    let table = registry.table(language)?;
    let colors = table
        .semantic_names()
        .zip(table.slots())
        .map(|(name, slot)| ColorRecord::new(name, slot.color))
        .collect();
    Ok(ColorDocument {
        lexer: language.display_name().to_string(),
        colors,
    })
}

/// Write a language's colors to `path`
///
/// The document goes to a temporary file next to `path` first and is
/// renamed into place, so a failed write never leaves a partial file.
pub fn try_export_to_file(
    registry: &StyleRegistry,
    language: LanguageId,
    path: &Path,
) -> Result<()> {
    let xml = export(registry, language)?.to_xml()?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(xml.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| StyleError::Io(e.error))?;

    log::debug!("Saved {} colors to {}", language, path.display());
    Ok(())
}

/// [`try_export_to_file`], reporting only success
pub fn export_to_file(registry: &StyleRegistry, language: LanguageId, path: &Path) -> bool {
    try_export_to_file(registry, language, path)
        .map_err(|e| log::warn!("Failed to save {} colors to {}: {}", language, path.display(), e))
        .is_ok()
}

/// Overwrite colors from a document; returns how many slots were written
///
/// Records whose name is not a semantic name of the language are skipped.
/// Not atomic: a malformed color stops the import with every earlier
/// record already applied.
pub fn try_import(
    registry: &mut StyleRegistry,
    document: &ColorDocument,
    language: LanguageId,
) -> Result<usize> {
    if LanguageId::from_display_name(&document.lexer) != Some(language) {
        log::warn!(
            "Importing document tagged '{}' into {}",
            document.lexer,
            language
        );
    }

    let table = registry.table_mut(language)?;
    let mut applied = 0;
    for record in &document.colors {
        let Ok(index) = table.index_of(SlotKey::Semantic(&record.name)) else {
            log::debug!("Skipping unknown color '{}' for {}", record.name, language);
            continue;
        };
        table.set(index, record.color()?)?;
        applied += 1;
    }
    Ok(applied)
}

/// [`try_import`], reporting only success
pub fn import(registry: &mut StyleRegistry, document: &ColorDocument, language: LanguageId) -> bool {
    try_import(registry, document, language)
        .map_err(|e| log::warn!("Failed to import {} colors: {}", language, e))
        .is_ok()
}

/// Load a document from `path` and import it
pub fn try_import_from_file(
    registry: &mut StyleRegistry,
    path: &Path,
    language: LanguageId,
) -> Result<usize> {
    if !path.is_file() {
        return Err(StyleError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )));
    }
    let xml = fs::read_to_string(path)?;
    let document = ColorDocument::from_xml(&xml)?;
    try_import(registry, &document, language)
}

/// [`try_import_from_file`], reporting only success
pub fn import_from_file(registry: &mut StyleRegistry, path: &Path, language: LanguageId) -> bool {
    try_import_from_file(registry, path, language)
        .map_err(|e| log::warn!("Failed to load {} colors from {}: {}", language, path.display(), e))
        .is_ok()
}

/// File name used for a language inside a colors directory
pub fn document_path(dir: &Path, language: LanguageId) -> PathBuf {
    dir.join(format!("{}.xml", language.display_name()))
}

/// Save every language of the registry into `dir`; returns the file count
pub fn save_all(registry: &StyleRegistry, dir: &Path) -> Result<usize> {
    fs::create_dir_all(dir)?;
    let mut saved = 0;
    for language in registry.languages() {
        try_export_to_file(registry, language, &document_path(dir, language))?;
        saved += 1;
    }
    Ok(saved)
}

/// Import every saved document found in `dir`; returns the file count
///
/// Languages without a file keep their current colors. A broken file is
/// logged and skipped.
pub fn load_all(registry: &mut StyleRegistry, dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut loaded = 0;
    for language in registry.languages() {
        let path = document_path(dir, language);
        if path.is_file() && import_from_file(registry, &path, language) {
            loaded += 1;
        }
    }
    Ok(loaded)
}
