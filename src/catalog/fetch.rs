//! Catalog loading
//!
//! One blocking GET against the REST Countries API, or the same JSON shape
//! read from a local file. There is deliberately no retry: a failed load
//! leaves the game unplayable and the caller reports the error.

use super::Catalog;
use super::record::RawCountry;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Default country-data endpoint
///
/// The `fields` filter keeps the payload to exactly what the game consumes.
pub const DEFAULT_SOURCE_URL: &str =
    "https://restcountries.com/v3.1/all?fields=name,capital,region,currencies";

/// Error type for catalog loading failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("catalog payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read catalog file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog contains no usable country records")]
    Empty,
}

/// Fetch the catalog from a country-data endpoint
///
/// Performed once at startup; the catalog is immutable afterwards.
///
/// # Errors
/// Returns `CatalogError` on connection failure, a non-success HTTP status,
/// an unparseable payload, or a payload with no usable records.
pub fn fetch(url: &str) -> Result<Catalog, CatalogError> {
    debug!(url, "fetching country catalog");

    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status));
    }

    let body = response.bytes()?;
    let catalog = from_json_slice(&body)?;
    info!(count = catalog.len(), "country catalog fetched");
    Ok(catalog)
}

/// Load the catalog from a local JSON file with the REST Countries shape
///
/// Useful for offline play and tests.
///
/// # Errors
/// Returns `CatalogError` if the file cannot be read or parsed, or holds no
/// usable records.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = from_json_slice(&content)?;
    info!(count = catalog.len(), path = %path.display(), "country catalog loaded from file");
    Ok(catalog)
}

/// Parse and normalize a raw JSON country array
///
/// # Errors
/// Returns `CatalogError::Parse` on malformed JSON and `CatalogError::Empty`
/// if no record survives normalization.
pub fn from_json_slice(bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let raw: Vec<RawCountry> = serde_json::from_slice(bytes)?;

    let records: Vec<_> = raw.into_iter().filter_map(RawCountry::normalize).collect();
    if records.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(Catalog::from_records(records))
}
