use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An addition-map: category id to the new entries to append there.
///
/// Deserializes from a JSON object whose values are arrays of strings:
///
/// ```json
/// { "sweet": ["new line 1", "new line 2"], "witty": ["new line 3"] }
/// ```
///
/// Entry order within each key is preserved; it is the order in which the
/// entries land at the end of the matching category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Additions {
    entries: BTreeMap<String, Vec<String>>,
}

impl Additions {
    /// Create an empty addition-map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or extend) the entries queued for a category id.
    pub fn push(&mut self, id: impl Into<String>, lines: Vec<String>) {
        self.entries.entry(id.into()).or_default().extend(lines);
    }

    /// The entries queued for a category id, if any.
    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.entries.get(id).map(Vec::as_slice)
    }

    /// Returns `true` if the map has entries queued for this id.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate over the category ids in the map (sorted).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of category ids in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no additions are queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of queued entries across all ids.
    pub fn total_entries(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl From<BTreeMap<String, Vec<String>>> for Additions {
    fn from(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map() {
        let adds = Additions::new();
        assert!(adds.is_empty());
        assert_eq!(adds.len(), 0);
        assert_eq!(adds.total_entries(), 0);
        assert!(adds.get("sweet").is_none());
    }

    #[test]
    fn push_and_get() {
        let mut adds = Additions::new();
        adds.push("sweet", vec!["a".into(), "b".into()]);
        assert!(adds.contains("sweet"));
        assert_eq!(adds.get("sweet"), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(adds.total_entries(), 2);
    }

    #[test]
    fn push_twice_extends_in_order() {
        let mut adds = Additions::new();
        adds.push("witty", vec!["a".into()]);
        adds.push("witty", vec!["b".into()]);
        assert_eq!(adds.len(), 1);
        assert_eq!(adds.get("witty"), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn deserialize_from_json_object() {
        let adds: Additions =
            serde_json::from_str(r#"{"sweet": ["c", "d"], "witty": []}"#).unwrap();
        assert_eq!(adds.len(), 2);
        assert_eq!(adds.get("sweet"), Some(&["c".to_string(), "d".to_string()][..]));
        assert_eq!(adds.get("witty"), Some(&[][..]));
    }

    #[test]
    fn deserialize_rejects_wrong_shape() {
        // An array is not an addition-map.
        let result: Result<Additions, _> = serde_json::from_str(r#"["sweet"]"#);
        assert!(result.is_err());

        // Values must be arrays of strings.
        let result: Result<Additions, _> = serde_json::from_str(r#"{"sweet": "not a list"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ids_are_sorted() {
        let mut adds = Additions::new();
        adds.push("witty", vec!["x".into()]);
        adds.push("sweet", vec!["y".into()]);
        let ids: Vec<&str> = adds.ids().collect();
        assert_eq!(ids, vec!["sweet", "witty"]);
    }
}
