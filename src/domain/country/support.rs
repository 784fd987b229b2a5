//! Support gate: countries deliberately not serviced.

use std::collections::HashSet;

/// Countries for which visa service is withheld regardless of links.
pub const DEFAULT_UNSUPPORTED_COUNTRIES: &[&str] = &[
    "afghanistan", "albania", "andorra", "angola", "antigua", "austria",
    "barbuda", "bahamas", "barbados", "belgium", "bosnia and herzegovina", "brunei",
    "canada", "cape verde", "chad", "chile", "colombia", "comoros", "costa rica", "czech republic",
    "denmark", "dominican republic", "ecuador", "el salvador", "equatorial guinea", "eritrea",
    "estonia", "ethiopia", "fiji", "finland", "france", "germany", "greece", "guatemala", "haiti",
    "honduras", "hungary", "iceland", "israel", "italy", "jamaica", "korea", "kuwait", "libya",
    "lithuania", "luxenberg", "magnolia", "netherlands", "norway", "paraguay", "poland",
    "portugal", "romania", "south africa", "spain", "st kitts and nevis", "sudan", "sweden",
    "switzerland", "syria", "taiwan", "uruguay", "united arab emirates", "venezuela",
];

/// Set-membership policy over canonical country names.
///
/// Independent of link presence: a country can pass the gate and still
/// have no link.
#[derive(Debug, Clone)]
pub struct SupportGate {
    unsupported: HashSet<String>,
}

impl SupportGate {
    pub fn new<I, S>(unsupported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            unsupported: unsupported
                .into_iter()
                .map(|c| c.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// True unless the country is explicitly excluded (case-insensitive).
    pub fn is_supported(&self, country: &str) -> bool {
        !self.unsupported.contains(&country.to_lowercase())
    }
}

impl Default for SupportGate {
    fn default() -> Self {
        Self::new(DEFAULT_UNSUPPORTED_COUNTRIES.iter().copied())
    }
}
