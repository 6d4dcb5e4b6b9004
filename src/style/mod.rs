//! Lexer style registry
//!
//! This module provides the color side of lexer configuration:
//! - RGBA color values
//! - Fixed-length per-language color tables with semantic and external lookup
//! - The registry owning one table per language

mod color;
mod registry;
mod table;

pub use color::Rgba;
pub use registry::StyleRegistry;
pub use table::{ColorSlot, ColorTable, Role, SlotKey};
