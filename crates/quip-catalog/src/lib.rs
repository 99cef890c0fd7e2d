//! Foundation types for quip, a categorized pickup-line catalog toolkit.
//!
//! This crate provides the data model shared by every other quip crate,
//! plus the core operation on it: appending new entries to a catalog from
//! an addition-map.
//!
//! # Key Types
//!
//! - [`Category`] — a named bucket of text entries with a unique id
//! - [`Catalog`] — the ordered set of categories persisted together
//! - [`Additions`] — mapping from category id to new entries to append
//! - [`MergeReport`] — what an append run actually changed
//! - [`CatalogSummary`] — per-category entry counts for reporting

pub mod additions;
pub mod catalog;
pub mod category;
pub mod error;
pub mod report;

pub use additions::Additions;
pub use catalog::Catalog;
pub use category::Category;
pub use error::CatalogError;
pub use report::{CatalogSummary, CategoryCount, CategoryDelta, MergeReport};
