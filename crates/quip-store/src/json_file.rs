use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use quip_catalog::Catalog;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::CatalogStore;

/// File-backed catalog store.
///
/// The on-disk format is a pretty-printed (2-space indented) UTF-8 JSON
/// array of category objects, non-ASCII characters written literally, with
/// a trailing newline.
///
/// Saves are atomic: the new content is written to a temporary file in the
/// data file's directory and renamed over the target, so a crash or error
/// mid-save leaves the previous file intact.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over the given data file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the temp file must live in so the final rename stays on
    /// one filesystem.
    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> StoreResult<Catalog> {
        let raw = fs::read_to_string(&self.path)?;
        let catalog: Catalog =
            serde_json::from_str(&raw).map_err(|e| StoreError::Parse(e.to_string()))?;
        catalog.validate()?;
        debug!(
            path = %self.path.display(),
            categories = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let mut rendered = serde_json::to_string_pretty(catalog)
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        rendered.push('\n');

        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(rendered.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!(
            path = %self.path.display(),
            categories = catalog.len(),
            bytes = rendered.len(),
            "catalog saved"
        );
        Ok(())
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}
