//! Phrase normalisation: filler stripping and alias resolution.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CountryRegistry;

/// Conversational lead-ins that precede the country in free text.
static FILLER_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:to|for|in|apply(?:ing)?\s(?:for)?|need(?:\svisa)?|i want|i need|from|visa to|visa for|information on|help with)(?:\s+|$)",
    )
    .expect("filler prefix pattern is valid")
});

/// Trims, lowercases and removes leading filler phrases.
///
/// Stripping repeats until nothing more matches, so "i need visa for uk"
/// reduces to "uk" and the result is a fixed point.
pub fn strip_filler(raw: &str) -> String {
    let mut cleaned = raw.trim().to_lowercase();
    loop {
        let stripped = FILLER_PREFIX.replace(&cleaned, "");
        if stripped.len() == cleaned.len() {
            return cleaned;
        }
        cleaned = stripped.trim().to_string();
    }
}

/// Normalises a raw phrase and resolves it through the alias table.
///
/// Never fails; filler-only input normalises to an empty string.
pub fn normalize(raw: &str, registry: &CountryRegistry) -> String {
    let cleaned = strip_filler(raw);
    match registry.canonical_for(&cleaned) {
        Some(canonical) => canonical.to_string(),
        None => cleaned,
    }
}
