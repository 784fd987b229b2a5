//! Country resolution.
//!
//! Turns a raw, possibly misspelled country phrase into a canonical country
//! record. The pipeline is leaf-first:
//!
//! - [`CountryRegistry`] - immutable snapshot of links and aliases
//! - [`normalize`] - filler stripping and alias lookup
//! - [`CountryMatcher`] - exact, n-gram and fuzzy matching
//! - [`SupportGate`] - countries deliberately not serviced
//! - [`CountryResolver`] - composes the above into a [`ResolutionResult`]
//! - [`RegistryHandle`] - shared snapshot slot, swapped whole on reload

mod matcher;
mod normalizer;
mod registry;
mod registry_handle;
mod resolution;
mod support;

pub use matcher::{similarity, CountryMatcher, FUZZY_SCORE_CUTOFF};
pub use normalizer::{normalize, strip_filler};
pub use registry::CountryRegistry;
pub use registry_handle::RegistryHandle;
pub use resolution::{CountryResolver, ResolutionResult};
pub use support::{SupportGate, DEFAULT_UNSUPPORTED_COUNTRIES};

#[cfg(test)]
pub(crate) mod fixtures {
    use super::CountryRegistry;

    /// Small registry shared by domain tests.
    pub(crate) fn sample_registry() -> CountryRegistry {
        CountryRegistry::new(
            [
                ("germany", "https://visas.example.com/germany"),
                ("united kingdom", "https://visas.example.com/uk"),
                ("united states", "https://visas.example.com/us"),
                ("india", "https://visas.example.com/india"),
                ("china", "https://visas.example.com/china"),
                ("chad", "https://visas.example.com/chad"),
                ("canada", "https://visas.example.com/canada"),
                ("oman", "https://visas.example.com/oman"),
                ("romania", "https://visas.example.com/romania"),
                ("niger", "https://visas.example.com/niger"),
                ("nigeria", "https://visas.example.com/nigeria"),
                ("japan", "https://visas.example.com/japan"),
            ],
            [
                ("uk", "united kingdom"),
                ("great britain", "united kingdom"),
                ("usa", "united states"),
                ("america", "united states"),
                ("deutschland", "germany"),
                ("burma", "myanmar"),
            ],
        )
    }
}
