//! Report types produced by catalog operations.
//!
//! These are the results an append run or a validation pass hands to the
//! caller for display, either as text or serialized to JSON.

use serde::{Deserialize, Serialize};

/// What a single append run changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// One delta per category that received new entries, in catalog order.
    pub appended: Vec<CategoryDelta>,
    /// Addition-map ids that matched no category (sorted).
    pub unmatched: Vec<String>,
}

impl MergeReport {
    /// Returns `true` if the run appended nothing anywhere.
    pub fn is_noop(&self) -> bool {
        self.appended.iter().all(|d| d.appended == 0)
    }

    /// Total entries appended across all categories.
    pub fn total_appended(&self) -> usize {
        self.appended.iter().map(|d| d.appended).sum()
    }
}

/// Entries appended to one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDelta {
    /// Id of the category that grew.
    pub category_id: String,
    /// Its human-readable label.
    pub category_name: String,
    /// How many entries were appended.
    pub appended: usize,
}

/// Per-category entry counts for the whole catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// One count per category, in catalog order.
    pub categories: Vec<CategoryCount>,
}

impl CatalogSummary {
    /// Number of categories in the catalog.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total entries across all categories.
    pub fn total_messages(&self) -> usize {
        self.categories.iter().map(|c| c.message_count).sum()
    }
}

/// Entry count for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category id.
    pub category_id: String,
    /// Human-readable label.
    pub category_name: String,
    /// Number of entries.
    pub message_count: usize,
}
