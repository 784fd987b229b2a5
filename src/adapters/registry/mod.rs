//! Registry adapters - loading the country tables.

mod csv_registry_source;

pub use csv_registry_source::CsvRegistrySource;
