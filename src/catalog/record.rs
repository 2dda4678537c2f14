//! Country records and normalization
//!
//! The REST Countries payload is deserialized into raw records first, then
//! normalized: missing capital/region collapse to the `"unknown"` sentinel
//! and a missing currency table becomes an empty map. Only the normalized
//! [`CountryRecord`] is visible outside the catalog module.

use crate::core::Word;
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Sentinel for metadata the data source does not provide
pub const UNKNOWN: &str = "unknown";

/// One currency used by a country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// A normalized country entry
///
/// The name doubles as the secret word, so a record is only *eligible* for
/// selection when the name is a single ASCII-alphabetic token (see
/// [`CountryRecord::secret_word`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    name: String,
    capital: String,
    region: String,
    currencies: FxHashMap<String, Currency>,
}

impl CountryRecord {
    /// Build a record directly, with no currencies
    ///
    /// Mostly useful for tests and synthetic catalogs; fetched records go
    /// through [`RawCountry`] normalization instead.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            region: region.into(),
            currencies: FxHashMap::default(),
        }
    }

    /// Common name of the country, as the source spells it
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capital city, or `"unknown"`
    #[inline]
    #[must_use]
    pub fn capital(&self) -> &str {
        &self.capital
    }

    /// Geographic region, or `"unknown"`
    #[inline]
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Currency table keyed by ISO code; possibly empty
    #[inline]
    #[must_use]
    pub fn currencies(&self) -> &FxHashMap<String, Currency> {
        &self.currencies
    }

    /// The name as a playable secret word, if it is well-formed
    ///
    /// Multi-word and accented names ("New Zealand", "Côte d'Ivoire") are not
    /// guessable letter-by-letter and return `None`.
    #[must_use]
    pub fn secret_word(&self) -> Option<Word> {
        Word::new(&self.name).ok()
    }
}

/// Country entry as served by the REST Countries API
#[derive(Debug, Deserialize)]
pub(crate) struct RawCountry {
    name: RawName,
    #[serde(default)]
    capital: Vec<String>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    currencies: FxHashMap<String, RawCurrency>,
}

#[derive(Debug, Deserialize)]
struct RawName {
    common: String,
}

#[derive(Debug, Deserialize)]
struct RawCurrency {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
}

impl RawCountry {
    /// Normalize into a [`CountryRecord`]
    ///
    /// Returns `None` for records with an empty common name; those can never
    /// be secrets and carry no usable metadata.
    pub(crate) fn normalize(self) -> Option<CountryRecord> {
        if self.name.common.is_empty() {
            return None;
        }

        let capital = self
            .capital
            .into_iter()
            .find(|c| !c.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let region = self
            .region
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());

        let currencies = self
            .currencies
            .into_iter()
            .map(|(code, raw)| {
                let currency = Currency {
                    name: raw.name.unwrap_or_else(|| UNKNOWN.to_string()),
                    symbol: raw.symbol.unwrap_or_else(|| UNKNOWN.to_string()),
                };
                (code, currency)
            })
            .collect();

        Some(CountryRecord {
            name: self.name.common,
            capital,
            region,
            currencies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> RawCountry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn normalize_full_record() {
        let raw = parse(
            r#"{
                "name": {"common": "Chile"},
                "capital": ["Santiago"],
                "region": "Americas",
                "currencies": {"CLP": {"name": "Chilean peso", "symbol": "$"}}
            }"#,
        );

        let record = raw.normalize().unwrap();
        assert_eq!(record.name(), "Chile");
        assert_eq!(record.capital(), "Santiago");
        assert_eq!(record.region(), "Americas");
        assert_eq!(record.currencies()["CLP"].name, "Chilean peso");
        assert_eq!(record.currencies()["CLP"].symbol, "$");
    }

    #[test]
    fn normalize_missing_fields_use_sentinels() {
        let raw = parse(r#"{"name": {"common": "Atlantis"}}"#);

        let record = raw.normalize().unwrap();
        assert_eq!(record.capital(), UNKNOWN);
        assert_eq!(record.region(), UNKNOWN);
        assert!(record.currencies().is_empty());
    }

    #[test]
    fn normalize_empty_capital_list_uses_sentinel() {
        let raw = parse(r#"{"name": {"common": "Nauru"}, "capital": [], "region": "Oceania"}"#);

        let record = raw.normalize().unwrap();
        assert_eq!(record.capital(), UNKNOWN);
        assert_eq!(record.region(), "Oceania");
    }

    #[test]
    fn normalize_currency_without_symbol() {
        let raw = parse(
            r#"{
                "name": {"common": "Panama"},
                "capital": ["Panama City"],
                "region": "Americas",
                "currencies": {"PAB": {"name": "Panamanian balboa"}}
            }"#,
        );

        let record = raw.normalize().unwrap();
        assert_eq!(record.currencies()["PAB"].symbol, UNKNOWN);
    }

    #[test]
    fn normalize_rejects_empty_name() {
        let raw = parse(r#"{"name": {"common": ""}}"#);
        assert!(raw.normalize().is_none());
    }

    #[test]
    fn secret_word_for_simple_name() {
        let record = CountryRecord::new("Japan", "Tokyo", "Asia");
        let word = record.secret_word().unwrap();
        assert_eq!(word.text(), "japan");
    }

    #[test]
    fn secret_word_rejects_multiword_names() {
        let record = CountryRecord::new("New Zealand", "Wellington", "Oceania");
        assert!(record.secret_word().is_none());

        let record = CountryRecord::new("Côte d'Ivoire", "Yamoussoukro", "Africa");
        assert!(record.secret_word().is_none());
    }
}
