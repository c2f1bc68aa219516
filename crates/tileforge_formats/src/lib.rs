//! Pluggable map and tileset file formats
//!
//! A format handler self-describes a name, a description and a file
//! extension filter, and implements whichever of the four read/write
//! operations it supports; the rest report
//! [`FormatError::Unsupported`]. Handlers are resolved from a
//! [`FormatRegistry`] by explicit extension lookup, never by scanning the
//! filesystem.

mod json;

pub use json::JsonMapFormat;

use std::path::Path;
use thiserror::Error;
use tileforge_core::{TileMap, TileSet};

/// Errors surfaced by format handlers
#[derive(Debug, Error)]
pub enum FormatError {
    /// Underlying I/O failure, propagated unmodified
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    /// The handler does not implement this operation
    #[error("{0} is not supported by this format")]
    Unsupported(String),
}

/// A map/tileset reader-writer pair for one on-disk format.
pub trait MapFormat {
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// File extensions (without the dot) this format handles
    fn extensions(&self) -> &[&str];

    /// Whether this handler accepts `path`, decided by extension alone.
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }

    fn read_map(&self, path: &Path) -> Result<TileMap, FormatError> {
        let _ = path;
        Err(FormatError::Unsupported("reading maps".to_string()))
    }

    fn write_map(&self, map: &TileMap, path: &Path) -> Result<(), FormatError> {
        let _ = (map, path);
        Err(FormatError::Unsupported("writing maps".to_string()))
    }

    fn read_tileset(&self, path: &Path) -> Result<TileSet, FormatError> {
        let _ = path;
        Err(FormatError::Unsupported("reading tilesets".to_string()))
    }

    fn write_tileset(&self, tileset: &TileSet, path: &Path) -> Result<(), FormatError> {
        let _ = (tileset, path);
        Err(FormatError::Unsupported("writing tilesets".to_string()))
    }
}

/// Registry of format handlers, resolved by explicit lookup
#[derive(Default)]
pub struct FormatRegistry {
    formats: Vec<Box<dyn MapFormat>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in JSON handler installed
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(JsonMapFormat));
        registry
    }

    pub fn register(&mut self, format: Box<dyn MapFormat>) {
        self.formats.push(format);
    }

    /// First registered handler that accepts `path`
    pub fn find_for_path(&self, path: &Path) -> Option<&dyn MapFormat> {
        self.formats
            .iter()
            .map(|f| f.as_ref())
            .find(|f| f.accepts(path))
    }

    pub fn by_name(&self, name: &str) -> Option<&dyn MapFormat> {
        self.formats
            .iter()
            .map(|f| f.as_ref())
            .find(|f| f.name() == name)
    }

    pub fn formats(&self) -> impl Iterator<Item = &dyn MapFormat> {
        self.formats.iter().map(|f| f.as_ref())
    }

    /// All extensions served by registered handlers, first registration wins
    pub fn all_extensions(&self) -> Vec<&str> {
        let mut extensions = Vec::new();
        for format in &self.formats {
            for ext in format.extensions() {
                if !extensions.contains(ext) {
                    extensions.push(*ext);
                }
            }
        }
        extensions
    }
}
