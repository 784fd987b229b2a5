//! Country matching: exact, n-gram, then fuzzy.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{normalize, CountryRegistry};

/// Minimum similarity (0-100) a fuzzy candidate needs to be accepted.
pub const FUZZY_SCORE_CUTOFF: f64 = 88.0;

static ALPHA_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]+").expect("token pattern is valid"));

/// Similarity between two phrases on a 0-100 scale (Jaro).
///
/// No common-prefix bonus: "austria" must stay below the cutoff for
/// "australia".
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::jaro(a, b) * 100.0
}

/// Finds the best known country for a phrase.
///
/// Strategies run in strict priority order and the first hit wins:
/// exact key, token n-grams against aliases then countries, fuzzy
/// similarity above [`FUZZY_SCORE_CUTOFF`]. With no hit the normalised
/// phrase comes back unchanged.
pub struct CountryMatcher<'a> {
    registry: &'a CountryRegistry,
}

impl<'a> CountryMatcher<'a> {
    pub fn new(registry: &'a CountryRegistry) -> Self {
        Self { registry }
    }

    /// Normalises `raw` and returns the canonical name or best guess.
    pub fn resolve(&self, raw: &str) -> String {
        self.best_match(&normalize(raw, self.registry))
    }

    /// Matches an already normalised phrase.
    pub fn best_match(&self, normalized: &str) -> String {
        if self.registry.has_country(normalized) {
            debug!(phrase = normalized, "exact country match");
            return normalized.to_string();
        }

        if let Some(hit) = self.token_match(normalized) {
            debug!(phrase = normalized, country = %hit, "token match");
            return hit;
        }

        if let Some((hit, score)) = self.fuzzy_match(normalized) {
            debug!(phrase = normalized, country = %hit, score, "fuzzy match");
            return hit;
        }

        debug!(phrase = normalized, "no country match");
        normalized.to_string()
    }

    fn token_match(&self, normalized: &str) -> Option<String> {
        let tokens: Vec<&str> = ALPHA_TOKEN
            .find_iter(normalized)
            .map(|m| m.as_str())
            .collect();

        ngram_candidates(&tokens).into_iter().find_map(|candidate| {
            if let Some(canonical) = self.registry.canonical_for(&candidate) {
                return Some(canonical.to_string());
            }
            self.registry.has_country(&candidate).then_some(candidate)
        })
    }

    /// Highest-scoring candidate at or above the cutoff, alias-resolved.
    ///
    /// Candidates are scanned in sorted order and only a strictly higher
    /// score replaces the leader, so ties go to the alphabetically first.
    fn fuzzy_match(&self, normalized: &str) -> Option<(String, f64)> {
        if normalized.is_empty() {
            return None;
        }

        let mut best: Option<(&str, f64)> = None;
        for candidate in self.registry.fuzzy_candidates() {
            let score = similarity(normalized, candidate);
            if score >= FUZZY_SCORE_CUTOFF && best.map_or(true, |(_, top)| score > top) {
                best = Some((candidate, score));
            }
        }

        best.map(|(candidate, score)| {
            let resolved = self
                .registry
                .canonical_for(candidate)
                .unwrap_or(candidate)
                .to_string();
            (resolved, score)
        })
    }
}

/// Unigrams first, then for each start position its bigram and trigram.
fn ngram_candidates(tokens: &[&str]) -> Vec<String> {
    let mut candidates: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for start in 0..tokens.len() {
        for width in [2, 3] {
            if start + width <= tokens.len() {
                candidates.push(tokens[start..start + width].join(" "));
            }
        }
    }
    candidates
}
