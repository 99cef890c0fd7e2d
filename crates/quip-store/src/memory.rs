use std::io;
use std::sync::RwLock;

use quip_catalog::Catalog;

use crate::error::StoreResult;
use crate::traits::CatalogStore;

/// In-memory catalog store.
///
/// Intended for tests and embedding. The catalog is held behind a `RwLock`
/// and cloned on load/save; an unseeded store behaves like a missing data
/// file.
pub struct InMemoryStore {
    catalog: RwLock<Option<Catalog>>,
}

impl InMemoryStore {
    /// Create an empty store. Loading before the first save fails like a
    /// missing file.
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(None),
        }
    }

    /// Create a store pre-seeded with a catalog.
    pub fn seeded(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(Some(catalog)),
        }
    }

    /// Returns `true` if a catalog has been stored.
    pub fn is_seeded(&self) -> bool {
        self.catalog.read().expect("lock poisoned").is_some()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> StoreResult<Catalog> {
        let guard = self.catalog.read().expect("lock poisoned");
        match guard.as_ref() {
            Some(catalog) => {
                catalog.validate()?;
                Ok(catalog.clone())
            }
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no catalog stored").into()),
        }
    }

    fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        *self.catalog.write().expect("lock poisoned") = Some(catalog.clone());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("seeded", &self.is_seeded())
            .finish()
    }
}
