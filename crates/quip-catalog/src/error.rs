use thiserror::Error;

/// Errors produced by catalog operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two categories share the same `category_id`.
    #[error("duplicate category id: {id}")]
    DuplicateCategoryId { id: String },
}
