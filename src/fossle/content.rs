//! Where snippet text comes from.
//!
//! The game only needs the raw text of a project's snippet to count and cut
//! lines; everything about how it is produced lives behind [`ContentSource`].

use crate::catalog::CatalogItem;
use crate::error::{FossleError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub trait ContentSource {
    /// Raw snippet text for `item`, or `None` when the source has none.
    fn fetch(&self, item: &CatalogItem) -> Result<Option<String>>;
}

/// Reads `<root>/<snippet key>` from disk.
#[derive(Debug, Clone)]
pub struct DirContentSource {
    root: PathBuf,
}

impl DirContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for DirContentSource {
    fn fetch(&self, item: &CatalogItem) -> Result<Option<String>> {
        let path = self.root.join(&item.snippet);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no snippet at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(FossleError::Io(e)),
        }
    }
}

/// Snippets held in memory, keyed by snippet key.
impl ContentSource for HashMap<String, String> {
    fn fetch(&self, item: &CatalogItem) -> Result<Option<String>> {
        Ok(self.get(&item.snippet).cloned())
    }
}
