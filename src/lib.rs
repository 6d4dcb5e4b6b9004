//! lexstyle - lexer styling configuration for Scintilla-style editing widgets
//!
//! Holds per-language color tables, keyword lists and folding settings,
//! and pushes them onto an editing surface for a requested language.
//!
//! ```no_run
//! use lexstyle::{Config, LanguageId, MemorySurface, StyleApplier, StyleRegistry};
//!
//! let config = Config::load();
//! let mut registry = StyleRegistry::new();
//! if let Some(dir) = &config.colors_dir {
//!     if let Err(e) = lexstyle::persist::load_all(&mut registry, dir) {
//!         eprintln!("Failed to load saved colors: {}", e);
//!     }
//! }
//!
//! let mut surface = MemorySurface::new();
//! let applier = StyleApplier::new(&config);
//! applier.apply(&registry, LanguageId::resolve("main.cs"), &mut surface);
//! ```

pub mod applier;
pub mod config;
pub mod error;
pub mod keywords;
pub mod language;
pub mod lexers;
pub mod persist;
pub mod style;
pub mod surface;

pub use applier::StyleApplier;
pub use config::Config;
pub use error::{Result, StyleError};
pub use language::LanguageId;
pub use lexers::Tokenizer;
pub use persist::ColorDocument;
pub use style::{ColorSlot, ColorTable, Rgba, Role, SlotKey, StyleRegistry};
pub use surface::{MemorySurface, TextStylingSurface};
