use quip_catalog::Catalog;

use crate::error::StoreResult;

/// Catalog persistence backend.
///
/// All implementations must satisfy these invariants:
/// - `load` returns a catalog that passed structural validation, or an
///   error; it never returns a partially-parsed catalog.
/// - `save` replaces the stored catalog completely or not at all.
/// - All I/O errors are propagated, never silently ignored.
pub trait CatalogStore: Send + Sync {
    /// Load the full catalog from storage.
    fn load(&self) -> StoreResult<Catalog>;

    /// Persist the full catalog, replacing whatever was stored before.
    fn save(&self, catalog: &Catalog) -> StoreResult<()>;
}
