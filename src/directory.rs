//! The directed graph of permitted translation directions.

use std::collections::{HashMap, HashSet};

use crate::language::Language;

/// Separator between the primary and secondary code in an edge-list entry.
pub const DIRECTION_SEPARATOR: char = '-';

/// Maps each primary language to the set of languages it can be translated into.
///
/// Built once from the service's edge list and never mutated afterwards.
/// A primary key is only present when at least one well-formed edge names it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDirectory {
    edges: HashMap<Language, HashSet<Language>>,
}

impl LanguageDirectory {
    /// Build a directory from `PRIMARY-SECONDARY` entries.
    ///
    /// Entries with fewer than two `-` separated components are dropped.
    /// Every component after the first is a secondary of the first.
    pub fn from_edges<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut edges: HashMap<Language, HashSet<Language>> = HashMap::new();
        for entry in entries {
            let mut parts = entry.as_ref().split(DIRECTION_SEPARATOR).peekable();
            let Some(primary) = parts.next() else {
                continue;
            };
            if parts.peek().is_none() {
                continue;
            }
            edges
                .entry(Language::from(primary))
                .or_default()
                .extend(parts.map(Language::from));
        }
        Self { edges }
    }

    pub fn is_primary(&self, lang: &str) -> bool {
        self.edges.contains_key(lang)
    }

    pub fn allows(&self, from: &str, to: &str) -> bool {
        self.edges
            .get(from)
            .is_some_and(|secondaries| secondaries.contains(to))
    }

    pub fn secondaries(&self, lang: &str) -> Option<&HashSet<Language>> {
        self.edges.get(lang)
    }

    pub fn primaries(&self) -> impl Iterator<Item = &Language> {
        self.edges.keys()
    }

    /// Number of primary languages.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> LanguageDirectory {
        LanguageDirectory::from_edges(["en-ru", "en-fr", "ru-en"])
    }

    #[test]
    fn test_primary_membership() {
        let dir = sample();
        assert!(dir.is_primary("en"));
        assert!(dir.is_primary("ru"));
        assert!(!dir.is_primary("fr"));
        assert!(!dir.is_primary(""));
        assert!(!dir.is_primary(" "));
    }

    #[test]
    fn test_edge_membership() {
        let dir = sample();
        assert!(dir.allows("en", "ru"));
        assert!(dir.allows("en", "fr"));
        assert!(dir.allows("ru", "en"));
        assert!(!dir.allows("ru", "fr"));
        assert!(!dir.allows("fr", "en"));
        assert!(!dir.allows("en", "en"));
        assert!(!dir.allows("en", ""));
    }

    #[test]
    fn test_malformed_entries_dropped() {
        let dir = LanguageDirectory::from_edges(["", "en", "ru-en", "nodash"]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.edge_count(), 1);
        assert!(!dir.is_primary("en"));
        assert!(!dir.is_primary("nodash"));
    }

    #[test]
    fn test_extra_components_are_secondaries() {
        let dir = LanguageDirectory::from_edges(["sr-Latn-en"]);
        assert!(dir.allows("sr", "Latn"));
        assert!(dir.allows("sr", "en"));
        assert!(!dir.is_primary("Latn"));
        assert_eq!(dir.edge_count(), 2);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let dir = LanguageDirectory::from_edges(["en-ru", "en-ru", "en-de"]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.edge_count(), 2);
        assert_eq!(dir.secondaries("en").map(HashSet::len), Some(2));
    }

    #[test]
    fn test_empty_edge_list() {
        let dir = LanguageDirectory::from_edges(Vec::<String>::new());
        assert!(dir.is_empty());
        assert_eq!(dir.primaries().count(), 0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = LanguageDirectory::from_edges(["en-ru", "ru-en", "en-fr"]);
        let b = LanguageDirectory::from_edges(["en-fr", "en-ru", "ru-en"]);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_entries_without_separator_add_nothing(
            entries in prop::collection::vec("[a-z ]{0,6}", 0..20)
        ) {
            let dir = LanguageDirectory::from_edges(&entries);
            prop_assert!(dir.is_empty());
        }

        #[test]
        fn prop_every_well_formed_edge_is_present(
            pairs in prop::collection::vec(("[a-z]{2}", "[a-z]{2}"), 1..20)
        ) {
            let entries: Vec<String> = pairs.iter().map(|(p, s)| format!("{}-{}", p, s)).collect();
            let dir = LanguageDirectory::from_edges(&entries);
            for (p, s) in &pairs {
                prop_assert!(dir.is_primary(p));
                prop_assert!(dir.allows(p, s));
            }
            for primary in dir.primaries() {
                prop_assert!(!dir.secondaries(primary.code()).map_or(true, HashSet::is_empty));
            }
        }
    }
}
