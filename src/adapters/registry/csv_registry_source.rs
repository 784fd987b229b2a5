//! CSV Registry Source
//!
//! Reads two tables:
//!
//! - links: headers `country,visa_link`
//! - aliases: headers `alias,country`
//!
//! A UTF-8 byte order mark is tolerated. Rows with an empty column or that
//! fail to parse are skipped; a missing file is an empty table.

use async_trait::async_trait;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::country::CountryRegistry;
use crate::ports::{RegistrySource, RegistrySourceError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Deserialize)]
struct LinkRow {
    country: Option<String>,
    visa_link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AliasRow {
    alias: Option<String>,
    country: Option<String>,
}

/// Loads the registry from two CSV files.
#[derive(Debug, Clone)]
pub struct CsvRegistrySource {
    links_path: PathBuf,
    aliases_path: PathBuf,
}

impl CsvRegistrySource {
    pub fn new(links_path: impl Into<PathBuf>, aliases_path: impl Into<PathBuf>) -> Self {
        Self {
            links_path: links_path.into(),
            aliases_path: aliases_path.into(),
        }
    }

    async fn read_table(path: &Path) -> Result<Option<Vec<u8>>, RegistrySourceError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "registry table not found, using an empty table");
                Ok(None)
            }
            Err(e) => Err(RegistrySourceError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// Parses `bytes` as CSV rows of `R`, keeping the pairs `pick` returns.
fn parse_pairs<R, F>(path: &Path, bytes: &[u8], pick: F) -> Vec<(String, String)>
where
    R: for<'de> Deserialize<'de>,
    F: Fn(R) -> Option<(String, String)>,
{
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut pairs = Vec::new();
    for (index, row) in reader.deserialize::<R>().enumerate() {
        match row {
            Ok(row) => match pick(row) {
                Some(pair) => pairs.push(pair),
                None => tracing::debug!(path = %path.display(), row = index + 1, "skipping incomplete row"),
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), row = index + 1, error = %e, "skipping malformed row");
            }
        }
    }
    pairs
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[async_trait]
impl RegistrySource for CsvRegistrySource {
    async fn load(&self) -> Result<CountryRegistry, RegistrySourceError> {
        let links = match Self::read_table(&self.links_path).await? {
            Some(bytes) => parse_pairs(&self.links_path, &bytes, |row: LinkRow| {
                Some((non_empty(row.country)?, non_empty(row.visa_link)?))
            }),
            None => Vec::new(),
        };

        let aliases = match Self::read_table(&self.aliases_path).await? {
            Some(bytes) => parse_pairs(&self.aliases_path, &bytes, |row: AliasRow| {
                Some((non_empty(row.alias)?, non_empty(row.country)?))
            }),
            None => Vec::new(),
        };

        let registry = CountryRegistry::new(links, aliases);
        tracing::info!(
            countries = registry.country_count(),
            aliases = registry.alias_count(),
            "country registry loaded"
        );
        Ok(registry)
    }

    fn describe(&self) -> String {
        format!(
            "links={}, aliases={}",
            self.links_path.display(),
            self.aliases_path.display()
        )
    }
}
