//! Catalog statistics command
//!
//! Fetch-and-inspect mode: shows how many countries each difficulty can draw
//! from, which is handy for sanity-checking a custom `--source`.

use crate::catalog::Catalog;
use crate::game::{Difficulty, eligible_pool};
use crate::output::formatters::count_bar;
use colored::Colorize;

/// Eligible pool size per difficulty, in level order
#[must_use]
pub fn pool_counts(catalog: &Catalog) -> Vec<(Difficulty, usize)> {
    Difficulty::ALL
        .iter()
        .map(|&difficulty| (difficulty, eligible_pool(catalog, difficulty).len()))
        .collect()
}

/// Print catalog statistics
pub fn run_catalog(catalog: &Catalog) {
    let playable = catalog
        .records()
        .iter()
        .filter(|r| r.secret_word().is_some())
        .count();

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "COUNTRY CATALOG".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Records:          {}", catalog.len());
    println!(
        "   Playable secrets: {} (single-word ASCII names)",
        playable
    );

    println!("\n📊 {}", "Pool sizes by difficulty:".bright_cyan().bold());
    for (difficulty, count) in pool_counts(catalog) {
        let bar = count_bar(count, playable.max(1), 30);
        println!(
            "   {:<13} [{}] {:4}  ({})",
            difficulty.to_string(),
            bar.green(),
            count,
            difficulty.bounds_label()
        );

        let sample: Vec<_> = eligible_pool(catalog, difficulty)
            .iter()
            .take(5)
            .map(|r| r.name().to_string())
            .collect();
        if !sample.is_empty() {
            println!("                 e.g. {}", sample.join(", ").bright_black());
        }
    }

    if let Some(record) = catalog
        .records()
        .iter()
        .find(|r| !r.currencies().is_empty())
    {
        let currencies: Vec<_> = record
            .currencies()
            .iter()
            .map(|(code, currency)| format!("{code} ({})", currency.name))
            .collect();

        println!("\n📇 {}", "Sample record:".bright_cyan().bold());
        println!("   Name:     {}", record.name());
        println!("   Capital:  {}", record.capital());
        println!("   Region:   {}", record.region());
        println!("   Currency: {}", currencies.join(", "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryRecord;

    #[test]
    fn pool_counts_per_level() {
        let catalog = Catalog::from_records(vec![
            CountryRecord::new("Peru", "Lima", "Americas"),            // 4: beginner
            CountryRecord::new("Chile", "Santiago", "Americas"),       // 5: beginner, intermediate
            CountryRecord::new("Kazakhstan", "Astana", "Asia"),        // 10: beginner, professional
            CountryRecord::new("Liechtenstein", "Vaduz", "Europe"),    // 13: professional
            CountryRecord::new("New Zealand", "Wellington", "Oceania"), // unplayable
        ]);

        let counts = pool_counts(&catalog);
        assert_eq!(
            counts,
            vec![
                (Difficulty::Beginner, 3),
                (Difficulty::Intermediate, 1),
                (Difficulty::Professional, 2),
            ]
        );
    }

    #[test]
    fn pool_counts_empty_catalog() {
        let counts = pool_counts(&Catalog::default());
        assert!(counts.iter().all(|&(_, count)| count == 0));
    }
}
