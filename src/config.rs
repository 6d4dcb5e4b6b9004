//! Configuration file support
//!
//! Loads settings from ~/.lexstyle.toml (or %USERPROFILE%\.lexstyle.toml on Windows)
//!
//! Example:
//! ```text
//! # lexstyle configuration
//! font = "Cascadia Mono"
//! font-size = 11
//! fold-margin-width = 16
//! fold-marker-fore = "#FFFFFF"
//! fold-marker-back = "#808080"
//! colors-dir = "/home/me/.config/lexstyle/colors"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};
use crate::style::Rgba;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Monospace font for the default style
    pub font: String,
    /// Font size in points
    pub font_size: u32,
    /// Width of the fold margin in pixels
    pub fold_margin_width: u32,
    pub fold_marker_fore: Rgba,
    pub fold_marker_back: Rgba,
    /// Directory holding saved per-language color documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: "Consolas".to_string(),
            font_size: 10,
            fold_margin_width: 16,
            fold_marker_fore: Rgba::WHITE,
            fold_marker_back: Rgba::hex(0x808080),
            colors_dir: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexstyle.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".lexstyle.toml"))
        }
    }

    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Config::default()
            }),
            _ => Config::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents; missing keys keep their defaults
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(contents).map_err(|e| StyleError::Parse(e.to_string()))?;
        config.font_size = config.font_size.clamp(4, 72);
        config.fold_margin_width = config.fold_margin_width.clamp(8, 64);
        Ok(config)
    }

    /// Save current configuration to the default location
    ///
    /// Fails when no home directory is set, since there is nowhere to write.
    pub fn save(&self) -> Result<()> {
        self.save_to_home(Self::config_path())
    }

    fn save_to_home(&self, path: Option<PathBuf>) -> Result<()> {
        let path = path.ok_or_else(|| {
            StyleError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "No home directory for the config file",
            ))
        })?;
        self.save_to(&path)
    }

    /// Save current configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let body = toml::to_string(self).map_err(|e| StyleError::Parse(e.to_string()))?;
        let contents = format!("# lexstyle configuration\n# Generated automatically\n\n{}", body);
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r##"
# Comment
font = "Cascadia Mono"
font-size = 12
fold-marker-back = "#C0C0C0"
colors-dir = "/tmp/colors"
        "##;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.font, "Cascadia Mono");
        assert_eq!(config.font_size, 12);
        assert_eq!(config.fold_margin_width, 16);
        assert_eq!(config.fold_marker_fore, Rgba::WHITE);
        assert_eq!(config.fold_marker_back, Rgba::rgb(0xC0, 0xC0, 0xC0));
        assert_eq!(config.colors_dir, Some(PathBuf::from("/tmp/colors")));
    }

    #[test]
    fn test_parse_clamps() {
        let config = Config::parse("font-size = 500\nfold-margin-width = 1").unwrap();
        assert_eq!(config.font_size, 72);
        assert_eq!(config.fold_margin_width, 8);
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Config::parse("fold-marker-fore = \"#XYZ\"").is_err());
        assert!(Config::parse("font-size = \"big\"").is_err());
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_save_without_home_fails() {
        let result = Config::default().save_to_home(None);
        match result {
            Err(StyleError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexstyle.toml");
        let config = Config {
            font: "Iosevka".to_string(),
            font_size: 14,
            colors_dir: Some(dir.path().join("colors")),
            ..Config::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }
}
