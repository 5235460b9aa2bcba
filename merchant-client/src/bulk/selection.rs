//! Selection set for batch operations

use indexmap::IndexSet;

/// Entity IDs chosen for the next bulk mutation
///
/// Keeps insertion order so request payloads list IDs in the order the user
/// picked them. Membership is exactly what the next mutation targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: IndexSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`; returns whether it is now selected
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.ids.shift_remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Replace the selection with exactly `ids` (duplicates collapse)
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The bulk toolbar is enabled only while something is selected
    pub fn toolbar_enabled(&self) -> bool {
        !self.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle("p1"));
        assert!(selection.contains("p1"));
        assert!(!selection.toggle("p1"));
        assert!(!selection.contains("p1"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_size_matches_odd_toggle_counts() {
        let sequence = ["a", "b", "a", "c", "b", "b", "d", "a", "c", "c", "c"];
        let mut selection = SelectionSet::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for id in sequence {
            selection.toggle(id);
            *counts.entry(id).or_default() += 1;
        }

        let odd = counts.values().filter(|c| *c % 2 == 1).count();
        assert_eq!(selection.len(), odd);
        for (id, count) in counts {
            assert_eq!(selection.contains(id), count % 2 == 1, "id {id}");
        }
    }

    #[test]
    fn test_select_all_sets_exact_membership() {
        let mut selection = SelectionSet::new();
        selection.toggle("old");
        selection.select_all(["x", "y", "x", "z"]);

        assert_eq!(selection.len(), 3);
        assert!(!selection.contains("old"));
        assert_eq!(selection.to_vec(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_select_all_then_clear_is_empty() {
        let mut selection = SelectionSet::new();
        selection.toggle("a");
        selection.toggle("b");
        selection.select_all(vec!["c".to_string(), "d".to_string()]);
        selection.clear();

        assert!(selection.is_empty());
        assert!(!selection.toolbar_enabled());
    }

    #[test]
    fn test_order_preserved_after_removal() {
        let mut selection = SelectionSet::new();
        for id in ["1", "2", "3", "4"] {
            selection.toggle(id);
        }
        selection.toggle("2");
        assert_eq!(selection.ids().collect::<Vec<_>>(), vec!["1", "3", "4"]);
        assert!(selection.toolbar_enabled());
    }

    proptest! {
        #[test]
        fn toggle_parity_matches_membership(ids in prop::collection::vec("[a-e]{1,2}", 0..60)) {
            let mut selection = SelectionSet::new();
            let mut counts: HashMap<String, usize> = HashMap::new();
            for id in &ids {
                selection.toggle(id.as_str());
                *counts.entry(id.clone()).or_default() += 1;
            }

            let odd = counts.values().filter(|c| *c % 2 == 1).count();
            prop_assert_eq!(selection.len(), odd);
            for (id, count) in &counts {
                prop_assert_eq!(selection.contains(id), count % 2 == 1);
            }
            prop_assert_eq!(selection.toolbar_enabled(), odd > 0);
        }

        #[test]
        fn select_all_then_clear_always_empty(
            prior in prop::collection::vec("[a-z0-9]{1,4}", 0..30),
            chosen in prop::collection::vec("[a-z0-9]{1,4}", 0..30),
        ) {
            let mut selection = SelectionSet::new();
            for id in &prior {
                selection.toggle(id.as_str());
            }
            selection.select_all(chosen.iter().cloned());
            selection.clear();

            prop_assert!(selection.is_empty());
            prop_assert!(!selection.toolbar_enabled());
        }

        #[test]
        fn select_all_is_exact_regardless_of_prior(
            prior in prop::collection::vec("[a-z]{1,3}", 0..30),
            chosen in prop::collection::vec("[a-z]{1,3}", 0..30),
        ) {
            let mut selection = SelectionSet::new();
            for id in &prior {
                selection.toggle(id.as_str());
            }
            selection.select_all(chosen.iter().cloned());

            let distinct: std::collections::HashSet<&String> = chosen.iter().collect();
            prop_assert_eq!(selection.len(), distinct.len());
            for id in &prior {
                prop_assert_eq!(selection.contains(id), distinct.contains(id));
            }
        }
    }
}
