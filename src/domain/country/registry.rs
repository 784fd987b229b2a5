//! Immutable snapshot of the country link and alias tables.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

/// Canonical country names mapped to their destination links, plus the
/// alias table that feeds into them.
///
/// Keys are stored trimmed and lowercased. A snapshot is never mutated after
/// construction; reloads build a new one and swap it in whole.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    links: HashMap<String, String>,
    aliases: HashMap<String, String>,
    fuzzy_candidates: Vec<String>,
}

impl CountryRegistry {
    /// Builds a registry from `country -> link` and `alias -> country` pairs.
    ///
    /// Later pairs win on duplicate keys. Alias chains (`a -> b`, `b -> c`)
    /// are flattened so a single lookup yields the final name.
    pub fn new<L, A, K1, V1, K2, V2>(links: L, aliases: A) -> Self
    where
        L: IntoIterator<Item = (K1, V1)>,
        A: IntoIterator<Item = (K2, V2)>,
        K1: AsRef<str>,
        V1: AsRef<str>,
        K2: AsRef<str>,
        V2: AsRef<str>,
    {
        let links: HashMap<String, String> = links
            .into_iter()
            .map(|(country, link)| (canonical_key(country.as_ref()), link.as_ref().trim().to_string()))
            .filter(|(country, link)| !country.is_empty() && !link.is_empty())
            .collect();

        let raw_aliases: HashMap<String, String> = aliases
            .into_iter()
            .map(|(alias, country)| (canonical_key(alias.as_ref()), canonical_key(country.as_ref())))
            .filter(|(alias, country)| !alias.is_empty() && !country.is_empty())
            .collect();

        let aliases = flatten_aliases(&raw_aliases);

        let fuzzy_candidates = links
            .keys()
            .chain(aliases.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            links,
            aliases,
            fuzzy_candidates,
        }
    }

    /// Creates a registry with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the destination link for a canonical country name.
    pub fn link(&self, country: &str) -> Option<&str> {
        self.links.get(country).map(String::as_str)
    }

    /// Returns true if the name is a canonical country key.
    pub fn has_country(&self, country: &str) -> bool {
        self.links.contains_key(country)
    }

    /// Returns the canonical name an alias points to.
    pub fn canonical_for(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Country keys and alias keys, sorted and de-duplicated.
    pub fn fuzzy_candidates(&self) -> &[String] {
        &self.fuzzy_candidates
    }

    /// Finds a country key that appears literally inside `text`.
    ///
    /// When several keys match, the longest wins ("nigeria" over "niger"),
    /// then the alphabetically first.
    pub fn find_country_in(&self, text: &str) -> Option<&str> {
        self.links
            .keys()
            .filter(|country| text.contains(country.as_str()))
            .max_by_key(|country| (country.len(), Reverse(country.as_str())))
            .map(String::as_str)
    }

    pub fn country_count(&self) -> usize {
        self.links.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty() && self.aliases.is_empty()
    }
}

fn canonical_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Follows each alias to the end of its chain.
///
/// Members of a cycle all map to the cycle's alphabetically smallest name,
/// which maps to itself, so resolving twice gives the same answer as once.
fn flatten_aliases(raw: &HashMap<String, String>) -> HashMap<String, String> {
    raw.keys()
        .map(|alias| {
            let mut path: Vec<&str> = vec![alias.as_str()];
            let mut current = alias.as_str();
            let target = loop {
                let Some(next) = raw.get(current).map(String::as_str) else {
                    break current;
                };
                if let Some(start) = path.iter().position(|seen| *seen == next) {
                    break path[start..].iter().copied().min().unwrap_or(next);
                }
                path.push(next);
                current = next;
            };
            (alias.clone(), target.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::country::fixtures::sample_registry;

    #[test]
    fn keys_are_trimmed_and_lowercased() {
        let registry = CountryRegistry::new(
            [("  Germany ", " https://example.com/de ")],
            [(" DE ", " GERMANY")],
        );

        assert_eq!(registry.link("germany"), Some("https://example.com/de"));
        assert_eq!(registry.canonical_for("de"), Some("germany"));
    }

    #[test]
    fn blank_entries_are_dropped() {
        let registry = CountryRegistry::new([("", "https://x"), ("peru", "")], [("", "peru")]);
        assert!(registry.is_empty());
    }

    #[test]
    fn last_duplicate_wins() {
        let registry = CountryRegistry::new(
            [("japan", "https://old.example.com"), ("japan", "https://new.example.com")],
            Vec::<(&str, &str)>::new(),
        );
        assert_eq!(registry.link("japan"), Some("https://new.example.com"));
        assert_eq!(registry.country_count(), 1);
    }

    #[test]
    fn alias_chains_are_flattened() {
        let registry = CountryRegistry::new(
            [("united kingdom", "https://example.com/uk")],
            [("gb", "great britain"), ("great britain", "united kingdom")],
        );
        assert_eq!(registry.canonical_for("gb"), Some("united kingdom"));
    }

    #[test]
    fn alias_cycles_collapse_to_smallest_member() {
        let registry = CountryRegistry::new(
            Vec::<(&str, &str)>::new(),
            [("b", "a"), ("a", "b"), ("x", "b"), ("c", "c")],
        );
        assert_eq!(registry.canonical_for("a"), Some("a"));
        assert_eq!(registry.canonical_for("b"), Some("a"));
        assert_eq!(registry.canonical_for("x"), Some("a"));
        assert_eq!(registry.canonical_for("c"), Some("c"));
    }

    #[test]
    fn longer_alias_cycle_collapses() {
        let registry = CountryRegistry::new(
            Vec::<(&str, &str)>::new(),
            [("kenya", "oman"), ("oman", "peru"), ("peru", "kenya")],
        );
        for alias in ["kenya", "oman", "peru"] {
            assert_eq!(registry.canonical_for(alias), Some("kenya"));
        }
    }

    #[test]
    fn alias_may_point_outside_link_table() {
        let registry = sample_registry();
        assert_eq!(registry.canonical_for("burma"), Some("myanmar"));
        assert!(!registry.has_country("myanmar"));
    }

    #[test]
    fn fuzzy_candidates_are_sorted_union() {
        let registry = CountryRegistry::new(
            [("peru", "https://p"), ("chile", "https://c")],
            [("peru", "peru"), ("cl", "chile")],
        );
        assert_eq!(registry.fuzzy_candidates(), &["chile", "cl", "peru"]);
    }

    #[test]
    fn find_country_in_prefers_longest_key() {
        let registry = sample_registry();
        assert_eq!(registry.find_country_in("visa for nigeria"), Some("nigeria"));
        assert_eq!(registry.find_country_in("visa for niger"), Some("niger"));
        assert_eq!(registry.find_country_in("visa for romania"), Some("romania"));
    }

    #[test]
    fn find_country_in_matches_word_fragments() {
        // Literal substring matching: "oman" hides inside "woman".
        let registry = sample_registry();
        assert_eq!(registry.find_country_in("visa for a woman"), Some("oman"));
    }

    #[test]
    fn empty_registry_has_no_matches() {
        let registry = CountryRegistry::empty();
        assert_eq!(registry.find_country_in("visa for germany"), None);
        assert!(registry.fuzzy_candidates().is_empty());
    }
}
