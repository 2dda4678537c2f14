//! Renderer capability trait
//!
//! The game loop talks to the terminal only through this trait, so the rules
//! in `core`/`game` stay free of any UI toolkit and the loop can be tested
//! headless.

use crate::core::Feedback;
use crate::game::Session;

/// Screens of the game, mirroring the page flow of the original layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Difficulty,
    Game,
    GameOver,
}

/// Presentation surface for a running game
pub trait Renderer {
    /// Switch the visible page
    fn show_page(&mut self, page: Page);

    /// Draw an empty guess grid of `rows` rows and `word_len` cells each
    fn render_grid(&mut self, rows: usize, word_len: usize);

    /// Fill row `row` (0-based) with scored feedback
    fn update_row(&mut self, row: usize, feedback: &Feedback);

    /// Show the hint text
    fn show_hint(&mut self, hint: &str);

    /// Show a transient message (rejected guess, bad input, ...)
    fn show_message(&mut self, message: &str);

    /// Present a won game; implementations may apply a reveal delay here
    fn show_win(&mut self, session: &Session);

    /// Present a lost game, revealing the secret
    fn show_loss(&mut self, session: &Session);
}

/// Headless renderer that records every call, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub events: Vec<String>,
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn show_page(&mut self, page: Page) {
        self.events.push(format!("page:{page:?}"));
    }

    fn render_grid(&mut self, rows: usize, word_len: usize) {
        self.events.push(format!("grid:{rows}x{word_len}"));
    }

    fn update_row(&mut self, row: usize, feedback: &Feedback) {
        self.events.push(format!("row:{row}:{}", feedback.to_emoji()));
    }

    fn show_hint(&mut self, hint: &str) {
        self.events.push(format!("hint:{hint}"));
    }

    fn show_message(&mut self, message: &str) {
        self.events.push(format!("message:{message}"));
    }

    fn show_win(&mut self, session: &Session) {
        self.events.push(format!("win:{}", session.record().name()));
    }

    fn show_loss(&mut self, session: &Session) {
        self.events.push(format!("loss:{}", session.record().name()));
    }
}
