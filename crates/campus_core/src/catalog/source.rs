//! Document sources for catalog loading.
//!
//! # Responsibility
//! - Isolate transport (filesystem, embedded text) from parsing.

use super::{LoadError, LoadResult};
use std::path::{Path, PathBuf};

/// Where a catalog document comes from.
pub trait CatalogSource {
    /// Fetches the raw document text.
    fn fetch(&self) -> LoadResult<String>;
    /// Short label for diagnostics. Must not contain document content.
    fn describe(&self) -> String;
}

/// Reads a document from a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> LoadResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serves a document already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    label: String,
    text: String,
}

impl StaticSource {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self) -> LoadResult<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("static:{}", self.label)
    }
}
