use serde::{Deserialize, Serialize};

/// A named bucket of text entries.
///
/// Categories are identified by `category_id`, which is unique within a
/// [`Catalog`](crate::Catalog). `messages` is append-only from the catalog's
/// point of view: entries are never removed, reordered, or deduplicated, and
/// their order is meaningful for display only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Short identifier, unique across the catalog (e.g. "sweet").
    pub category_id: String,
    /// Human-readable label (e.g. "Sweet").
    pub category_name: String,
    /// Ordered entries. Duplicates are permitted.
    pub messages: Vec<String>,
}

impl Category {
    /// Create an empty category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category_id: id.into(),
            category_name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Create a category with initial entries.
    pub fn with_messages(
        id: impl Into<String>,
        name: impl Into<String>,
        messages: Vec<String>,
    ) -> Self {
        Self {
            category_id: id.into(),
            category_name: name.into(),
            messages,
        }
    }

    /// Number of entries in this category.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if this category has no entries.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
