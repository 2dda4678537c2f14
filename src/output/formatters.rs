//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterStatus};
use colored::Colorize;

/// Format scored feedback as a colored letter row like ` C  H  I  L  E `
#[must_use]
pub fn colored_row(feedback: &Feedback) -> String {
    feedback
        .results()
        .iter()
        .map(|result| {
            let cell = format!(" {} ", result.letter.to_ascii_uppercase());
            let cell = match result.status {
                LetterStatus::Correct => cell.black().on_green(),
                LetterStatus::Present => cell.black().on_yellow(),
                LetterStatus::Absent => cell.white().on_bright_black(),
            };
            cell.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format an empty grid row of `word_len` placeholder cells
#[must_use]
pub fn empty_row(word_len: usize) -> String {
    vec![" _ "; word_len].join(" ")
}

/// Create a proportional bar string for pool-size displays
#[must_use]
pub fn count_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (count * width).div_ceil(max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn empty_row_width() {
        assert_eq!(empty_row(3), " _   _   _ ");
    }

    #[test]
    fn count_bar_empty() {
        assert_eq!(count_bar(0, 10, 10), "░░░░░░░░░░");
    }

    #[test]
    fn count_bar_full() {
        assert_eq!(count_bar(10, 10, 10), "██████████");
    }

    #[test]
    fn count_bar_zero_max() {
        assert_eq!(count_bar(0, 0, 4), "░░░░");
    }

    #[test]
    fn colored_row_has_one_cell_per_letter() {
        colored::control::set_override(false);

        let guess = Word::new("peru").unwrap();
        let secret = Word::new("cuba").unwrap();
        let feedback = Feedback::score(&guess, &secret).unwrap();

        let row = colored_row(&feedback);
        assert_eq!(row, " P   E   R   U ");

        colored::control::unset_override();
    }
}
