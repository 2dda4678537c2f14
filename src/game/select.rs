//! Secret selection
//!
//! Filters the catalog down to the records eligible for a difficulty level
//! and picks one uniformly at random. Previously seen countries are not
//! excluded across sessions.

use crate::catalog::{Catalog, CountryRecord};
use crate::game::Difficulty;
use rand::Rng;
use rand::prelude::IndexedRandom;
use thiserror::Error;
use tracing::debug;

/// Error type for an unplayable difficulty
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no country in the catalog matches the {difficulty} filter ({bounds})")]
pub struct EmptyPoolError {
    pub difficulty: Difficulty,
    bounds: &'static str,
}

/// Whether a record can serve as the secret for `difficulty`
///
/// A record qualifies when its name is a well-formed secret word (single
/// ASCII-alphabetic token) whose length falls inside the level's range.
#[must_use]
pub fn is_eligible(record: &CountryRecord, difficulty: Difficulty) -> bool {
    record
        .secret_word()
        .is_some_and(|word| difficulty.accepts_len(word.len()))
}

/// The subset of the catalog eligible for `difficulty`, in source order
#[must_use]
pub fn eligible_pool(catalog: &Catalog, difficulty: Difficulty) -> Vec<&CountryRecord> {
    catalog
        .records()
        .iter()
        .filter(|record| is_eligible(record, difficulty))
        .collect()
}

/// Pick a secret uniformly at random from the difficulty's pool
///
/// # Errors
/// Returns [`EmptyPoolError`] if no record passes the filter. The original
/// game crashed here; an explicit error lets the caller fail fast instead.
pub fn select_secret<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<&'a CountryRecord, EmptyPoolError> {
    let pool = eligible_pool(catalog, difficulty);

    let record = pool.choose(rng).copied().ok_or(EmptyPoolError {
        difficulty,
        bounds: difficulty.bounds_label(),
    })?;

    debug!(
        name = record.name(),
        %difficulty,
        pool_size = pool.len(),
        "secret selected"
    );
    Ok(record)
}
