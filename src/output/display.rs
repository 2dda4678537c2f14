//! Colored terminal renderer for the simple CLI mode

use super::formatters::{colored_row, empty_row};
use super::render::{Page, Renderer};
use crate::game::Session;
use colored::Colorize;
use std::thread;
use std::time::Duration;

/// Reveal delay the original game applied before announcing a win
pub const DEFAULT_WIN_DELAY: Duration = Duration::from_millis(500);

/// Plain-text renderer using ANSI colors
///
/// The win-reveal pause lives here, in the presentation layer, and is
/// configurable; the game rules know nothing about it.
pub struct TerminalRenderer {
    win_delay: Duration,
}

impl TerminalRenderer {
    #[must_use]
    pub const fn new(win_delay: Duration) -> Self {
        Self { win_delay }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_DELAY)
    }
}

impl Renderer for TerminalRenderer {
    fn show_page(&mut self, page: Page) {
        match page {
            Page::Landing => {
                println!("\n╔══════════════════════════════════════════════════════════╗");
                println!("║              COUNTRYLE - Guess the Country               ║");
                println!("╚══════════════════════════════════════════════════════════╝\n");
            }
            Page::Difficulty => {
                println!("\n{}", "─ Choose your difficulty ─".cyan());
            }
            Page::Game => {
                println!("\n{}", "─".repeat(60).cyan());
            }
            Page::GameOver => {
                println!("\n{}", "═".repeat(60).cyan());
            }
        }
    }

    fn render_grid(&mut self, rows: usize, word_len: usize) {
        println!();
        for _ in 0..rows {
            println!("  {}", empty_row(word_len).bright_black());
        }
        println!();
    }

    fn update_row(&mut self, row: usize, feedback: &crate::core::Feedback) {
        println!("  {} {}", format!("{}.", row + 1).bright_black(), colored_row(feedback));
    }

    fn show_hint(&mut self, hint: &str) {
        println!("\n💡 {}\n", hint.cyan());
    }

    fn show_message(&mut self, message: &str) {
        println!("{}", message.yellow());
    }

    fn show_win(&mut self, session: &Session) {
        thread::sleep(self.win_delay);

        println!("\n{}", "🎉 You guessed it!".bright_green().bold());
        println!(
            "You guessed the country: {}",
            session.record().name().bright_yellow().bold()
        );
        println!(
            "Solved in {} {}",
            session.attempts_used().to_string().bright_cyan().bold(),
            if session.attempts_used() == 1 {
                "guess"
            } else {
                "guesses"
            }
        );

        println!("\n  Guess history:");
        for (i, attempt) in session.history().iter().enumerate() {
            println!(
                "    {}. {} {}",
                (i + 1).to_string().bright_black(),
                attempt.guess.text().to_uppercase().bright_white().bold(),
                attempt.feedback.to_emoji()
            );
        }
    }

    fn show_loss(&mut self, session: &Session) {
        println!(
            "\n{}",
            format!("Game Over! The country was {}.", session.record().name())
                .red()
                .bold()
        );
    }
}
