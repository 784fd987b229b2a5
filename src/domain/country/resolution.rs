//! Composition of normalizer, matcher, support gate and link lookup.

use serde::Serialize;

use super::{normalize, CountryMatcher, CountryRegistry, SupportGate};

/// Outcome of resolving one country phrase. Produced fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    /// Phrase after filler stripping and alias lookup.
    pub normalized_input: String,
    /// Canonical country, or the normalised phrase when nothing matched.
    pub matched_country: String,
    /// Matching changed the phrase beyond normalisation.
    pub was_corrected: bool,
    pub supported: bool,
    pub link: Option<String>,
}

/// Resolves phrases against one registry snapshot.
pub struct CountryResolver<'a> {
    registry: &'a CountryRegistry,
    gate: &'a SupportGate,
}

impl<'a> CountryResolver<'a> {
    pub fn new(registry: &'a CountryRegistry, gate: &'a SupportGate) -> Self {
        Self { registry, gate }
    }

    /// Full pipeline: normalise, match, gate, look up the link.
    ///
    /// Alias resolution alone is not a correction because normalisation
    /// already includes it.
    pub fn resolve(&self, raw: &str) -> ResolutionResult {
        let normalized = normalize(raw, self.registry);
        let matched = if self.registry.has_country(&normalized) {
            normalized.clone()
        } else {
            CountryMatcher::new(self.registry).best_match(&normalized)
        };
        let was_corrected = normalized != matched;
        self.finish(normalized, matched, was_corrected)
    }

    /// Gate and link lookup for a name that is already canonical.
    pub fn resolve_known(&self, country: &str) -> ResolutionResult {
        let country = country.trim().to_lowercase();
        self.finish(country.clone(), country, false)
    }

    fn finish(&self, normalized: String, matched: String, was_corrected: bool) -> ResolutionResult {
        ResolutionResult {
            supported: self.gate.is_supported(&matched),
            link: self.registry.link(&matched).map(str::to_string),
            normalized_input: normalized,
            matched_country: matched,
            was_corrected,
        }
    }
}
