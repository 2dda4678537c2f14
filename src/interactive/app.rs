//! TUI application state and logic

use crate::catalog::Catalog;
use crate::game::{Difficulty, Session, SessionStatus, select_secret};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Visible screen, mirroring the original page flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPage {
    Landing,
    Difficulty,
    Game,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

/// Application state
pub struct App<'a> {
    catalog: &'a Catalog,
    pub page: AppPage,
    pub name_input: String,
    pub guess_input: String,
    pub session: Option<Session>,
    pub hint: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            page: AppPage::Landing,
            name_input: String::new(),
            guess_input: String::new(),
            session: None,
            hint: None,
            messages: vec![Message {
                text: "Welcome! Guess the secret country name.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Leave the landing page once a non-empty name is entered
    pub fn submit_name(&mut self) {
        if self.name_input.trim().is_empty() {
            self.add_message("Please enter your name.", MessageStyle::Error);
        } else {
            self.page = AppPage::Difficulty;
        }
    }

    /// Pick a difficulty and start a game
    pub fn choose_difficulty(&mut self, difficulty: Difficulty) {
        let record = match select_secret(self.catalog, difficulty, &mut rand::rng()) {
            Ok(record) => record.clone(),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match Session::new(&self.name_input, record, difficulty) {
            Ok(session) => {
                self.add_message(
                    &format!("The country has {} letters. Good luck!", session.secret().len()),
                    MessageStyle::Info,
                );
                self.session = Some(session);
                self.hint = None;
                self.guess_input.clear();
                self.page = AppPage::Game;
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the typed guess to the running session
    pub fn submit_guess(&mut self) {
        let guess = self.guess_input.clone();
        self.guess_input.clear();

        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Err(err) = session.submit(&guess) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        match session.status() {
            SessionStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                let attempts = session.attempts_used();
                self.add_message(
                    &format!("🎉 You guessed it in {attempts}!"),
                    MessageStyle::Success,
                );
                self.page = AppPage::GameOver;
            }
            SessionStatus::Lost => {
                self.stats.total_games += 1;
                let name = session.record().name().to_string();
                self.add_message(
                    &format!("Game over! The country was {name}."),
                    MessageStyle::Error,
                );
                self.page = AppPage::GameOver;
            }
            SessionStatus::InProgress => {
                let left = session.attempts_left();
                self.add_message(&format!("{left} attempts left"), MessageStyle::Info);
            }
        }
    }

    /// Reveal the hint; refused after the first reveal
    pub fn reveal_hint(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if let Some(hint) = session.reveal_hint() {
            self.hint = Some(hint);
        } else {
            self.add_message("The hint was already revealed.", MessageStyle::Error);
        }
    }

    /// Discard the session and return to the landing page
    pub fn go_home(&mut self) {
        self.session = None;
        self.hint = None;
        self.guess_input.clear();
        self.messages.clear();
        self.page = AppPage::Landing;
    }

    /// Letters the current secret has, if a game is running
    #[must_use]
    pub fn secret_len(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.secret().len())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                handle_key(&mut app, key.code);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    match app.page {
        AppPage::Landing => match code {
            KeyCode::Esc => app.should_quit = true,
            KeyCode::Enter => app.submit_name(),
            KeyCode::Backspace => {
                app.name_input.pop();
            }
            KeyCode::Char(c) => app.name_input.push(c),
            _ => {}
        },
        AppPage::Difficulty => match code {
            KeyCode::Esc => app.page = AppPage::Landing,
            KeyCode::Char(c) => {
                if let Some(difficulty) = Difficulty::from_name(&c.to_string()) {
                    app.choose_difficulty(difficulty);
                }
            }
            _ => {}
        },
        AppPage::Game => match code {
            KeyCode::Esc => app.go_home(),
            KeyCode::Tab => app.reveal_hint(),
            KeyCode::Enter => app.submit_guess(),
            KeyCode::Backspace => {
                app.guess_input.pop();
            }
            KeyCode::Char(c) => {
                if c.is_alphabetic() && app.guess_input.len() < app.secret_len() {
                    app.guess_input.push(c.to_ascii_lowercase());
                }
            }
            _ => {}
        },
        AppPage::GameOver => match code {
            KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
            KeyCode::Char('r' | 'n') => app.go_home(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryRecord;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CountryRecord::new("Chile", "Santiago", "Americas"),
            CountryRecord::new("Liechtenstein", "Vaduz", "Europe"),
        ])
    }

    #[test]
    fn name_gate_blocks_empty_names() {
        let catalog = catalog();
        let mut app = App::new(&catalog);

        app.submit_name();
        assert_eq!(app.page, AppPage::Landing);

        app.name_input.push_str("Ada");
        app.submit_name();
        assert_eq!(app.page, AppPage::Difficulty);
    }

    #[test]
    fn choosing_difficulty_starts_session() {
        let catalog = catalog();
        let mut app = App::new(&catalog);
        app.name_input.push_str("Ada");
        app.submit_name();

        app.choose_difficulty(Difficulty::Beginner);
        assert_eq!(app.page, AppPage::Game);

        let session = app.session.as_ref().unwrap();
        assert_eq!(session.record().name(), "Chile");
    }

    #[test]
    fn empty_pool_reports_and_stays_on_difficulty_page() {
        let catalog = Catalog::from_records(vec![CountryRecord::new("Peru", "Lima", "Americas")]);
        let mut app = App::new(&catalog);
        app.name_input.push_str("Ada");
        app.submit_name();

        app.choose_difficulty(Difficulty::Professional);
        assert_eq!(app.page, AppPage::Difficulty);
        assert!(app.session.is_none());
    }

    #[test]
    fn winning_guess_moves_to_game_over() {
        let catalog = catalog();
        let mut app = App::new(&catalog);
        app.name_input.push_str("Ada");
        app.submit_name();
        app.choose_difficulty(Difficulty::Intermediate);

        app.guess_input.push_str("chile");
        app.submit_guess();

        assert_eq!(app.page, AppPage::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn go_home_resets_session_state() {
        let catalog = catalog();
        let mut app = App::new(&catalog);
        app.name_input.push_str("Ada");
        app.submit_name();
        app.choose_difficulty(Difficulty::Beginner);
        app.reveal_hint();

        app.go_home();
        assert_eq!(app.page, AppPage::Landing);
        assert!(app.session.is_none());
        assert!(app.hint.is_none());
        // Name survives reset, as on the original landing page
        assert_eq!(app.name_input, "Ada");
    }

    #[test]
    fn hint_refused_on_second_reveal() {
        let catalog = catalog();
        let mut app = App::new(&catalog);
        app.name_input.push_str("Ada");
        app.submit_name();
        app.choose_difficulty(Difficulty::Beginner);

        app.reveal_hint();
        assert!(app.hint.is_some());

        app.reveal_hint();
        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "The hint was already revealed.");
    }
}
