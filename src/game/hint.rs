//! Hint generation
//!
//! Deterministic text hints derived from the secret's metadata. Harder levels
//! get less detail; the session layer limits the hint to one reveal per game.

use crate::catalog::CountryRecord;
use crate::game::Difficulty;

/// Build the hint text for a secret at the given difficulty
///
/// - Beginner: first letter, capital, last letter
/// - Intermediate: first letter, capital
/// - Professional: capital only
///
/// # Examples
/// ```
/// use countryle::catalog::CountryRecord;
/// use countryle::game::{Difficulty, hint};
///
/// let record = CountryRecord::new("Chile", "Santiago", "Americas");
/// assert_eq!(
///     hint(&record, Difficulty::Professional),
///     "Capital: Santiago"
/// );
/// ```
#[must_use]
pub fn hint(record: &CountryRecord, difficulty: Difficulty) -> String {
    let name = record.name();
    let first = name.chars().next().unwrap_or('?');
    let last = name.chars().last().unwrap_or('?');
    let capital = record.capital();

    match difficulty {
        Difficulty::Beginner => {
            format!("First letter: {first}, Capital: {capital}, Last letter: {last}")
        }
        Difficulty::Intermediate => format!("First letter: {first}, Capital: {capital}"),
        Difficulty::Professional => format!("Capital: {capital}"),
    }
}
