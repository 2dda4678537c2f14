//! Country catalog
//!
//! The catalog is the pool of country records the secret is drawn from. It is
//! loaded once per run, either from the REST Countries API or a local JSON
//! file, and read-only afterwards.

pub mod fetch;
mod record;

pub use fetch::{CatalogError, DEFAULT_SOURCE_URL};
pub use record::{CountryRecord, Currency, UNKNOWN};

/// Immutable collection of normalized country records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CountryRecord>,
}

impl Catalog {
    /// Build a catalog from already-normalized records
    #[must_use]
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    /// All records, in source order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
