use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::additions::Additions;
use crate::category::Category;
use crate::error::CatalogError;
use crate::report::{CatalogSummary, CategoryCount, CategoryDelta, MergeReport};

/// The full ordered set of categories persisted together.
///
/// A catalog serializes transparently as a JSON array of category objects.
/// Category order is stable: no catalog operation reorders, inserts, or
/// removes categories. The only mutation is appending entries to the
/// `messages` of existing categories.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a category list, preserving its order.
    ///
    /// Does not check id uniqueness; call [`Catalog::validate`] for that.
    pub fn from_categories(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Iterate over the categories in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    /// Look up a category by id, never by position.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.category_id == id)
    }

    /// Check the structural invariant: category ids are unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.category_id.as_str()) {
                return Err(CatalogError::DuplicateCategoryId {
                    id: category.category_id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Append the addition-map's entries to the matching categories.
    ///
    /// For every category whose id is a key of `additions`, that key's
    /// entries are appended to the category's `messages` in the given
    /// order. Categories without a matching key are untouched; existing
    /// entries are never removed, reordered, or deduplicated. Addition
    /// keys that match no category are skipped and listed in the report.
    pub fn append_messages(&mut self, additions: &Additions) -> MergeReport {
        let mut appended = Vec::new();
        for category in &mut self.categories {
            if let Some(lines) = additions.get(&category.category_id) {
                category.messages.extend_from_slice(lines);
                appended.push(CategoryDelta {
                    category_id: category.category_id.clone(),
                    category_name: category.category_name.clone(),
                    appended: lines.len(),
                });
            }
        }
        let unmatched = additions
            .ids()
            .filter(|id| self.get(id).is_none())
            .map(str::to_string)
            .collect();
        MergeReport {
            appended,
            unmatched,
        }
    }

    /// Per-category entry counts, in catalog order.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            categories: self
                .categories
                .iter()
                .map(|c| CategoryCount {
                    category_id: c.category_id.clone(),
                    category_name: c.category_name.clone(),
                    message_count: c.message_count(),
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod merge_laws {
    use std::collections::BTreeMap;

    use proptest::prelude::*;

    use super::*;

    fn catalog_from(entries: &BTreeMap<String, Vec<String>>) -> Catalog {
        Catalog::from_categories(
            entries
                .iter()
                .map(|(id, msgs)| {
                    Category::with_messages(id.clone(), id.to_uppercase(), msgs.clone())
                })
                .collect(),
        )
    }

    proptest! {
        #[test]
        fn append_is_concatenation_and_nothing_else(
            cats in prop::collection::btree_map("[a-z]{1,6}", prop::collection::vec(".{0,12}", 0..4), 0..5),
            adds in prop::collection::btree_map("[a-z]{1,6}", prop::collection::vec(".{0,12}", 0..4), 0..5),
        ) {
            let original = catalog_from(&cats);
            let additions = Additions::from(adds.clone());

            let mut merged = original.clone();
            let report = merged.append_messages(&additions);

            // Category count and order never change.
            prop_assert_eq!(merged.len(), original.len());
            for (before, after) in original.iter().zip(merged.iter()) {
                prop_assert_eq!(&before.category_id, &after.category_id);
                prop_assert_eq!(&before.category_name, &after.category_name);
                match additions.get(&before.category_id) {
                    Some(extra) => {
                        let mut expected = before.messages.clone();
                        expected.extend_from_slice(extra);
                        prop_assert_eq!(&after.messages, &expected);
                    }
                    None => prop_assert_eq!(&after.messages, &before.messages),
                }
            }

            // Every unmatched key really matches no category.
            for id in &report.unmatched {
                prop_assert!(original.get(id).is_none());
            }
        }

        #[test]
        fn append_total_matches_queued_entries_for_known_ids(
            cats in prop::collection::btree_map("[a-z]{1,6}", prop::collection::vec(".{0,12}", 0..4), 1..5),
        ) {
            // Build additions exclusively from known ids: everything queued
            // must land.
            let original = catalog_from(&cats);
            let additions = Additions::from(cats.clone());

            let mut merged = original.clone();
            let report = merged.append_messages(&additions);

            prop_assert!(report.unmatched.is_empty());
            prop_assert_eq!(report.total_appended(), additions.total_entries());
        }
    }
}
