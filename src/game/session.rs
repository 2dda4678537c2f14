//! Game session state machine
//!
//! A session runs from a started game to a win or loss. "Not started" is the
//! absence of a session; reset means dropping it. Rejected guesses (bad
//! length, bad characters) never consume an attempt.

use crate::catalog::CountryRecord;
use crate::core::{Feedback, FeedbackError, Word, WordError};
use crate::game::{Difficulty, hint};
use thiserror::Error;
use tracing::debug;

/// Guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// One accepted guess and its scored feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Error type for session creation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("please enter your name")]
    EmptyPlayerName,
    #[error("'{0}' cannot be used as a secret word")]
    UnplayableRecord(String),
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the game is already over")]
    Finished,
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    #[error(transparent)]
    WrongLength(#[from] FeedbackError),
}

/// A single game in progress or finished
#[derive(Debug, Clone)]
pub struct Session {
    player: String,
    record: CountryRecord,
    secret: Word,
    difficulty: Difficulty,
    history: Vec<Attempt>,
    hint_revealed: bool,
    status: SessionStatus,
}

impl Session {
    /// Start a session for a player with a selected secret
    ///
    /// # Errors
    /// Returns `SessionError` if the player name is empty after trimming or
    /// the record's name is not a playable word.
    pub fn new(
        player: &str,
        record: CountryRecord,
        difficulty: Difficulty,
    ) -> Result<Self, SessionError> {
        let player = player.trim();
        if player.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }

        let secret = record
            .secret_word()
            .ok_or_else(|| SessionError::UnplayableRecord(record.name().to_string()))?;

        debug!(player, %difficulty, len = secret.len(), "session started");

        Ok(Self {
            player: player.to_string(),
            record,
            secret,
            difficulty,
            history: Vec::new(),
            hint_revealed: false,
            status: SessionStatus::InProgress,
        })
    }

    /// Submit a guess
    ///
    /// An accepted guess is scored, appended to the history, and counted as
    /// an attempt. A winning guess ends the game immediately; a sixth
    /// non-winning guess loses it.
    ///
    /// # Errors
    /// Returns `GuessError` if the game is over, the guess is not a valid
    /// word, or its length does not match the secret. None of these consume
    /// an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<&Attempt, GuessError> {
        if self.is_over() {
            return Err(GuessError::Finished);
        }

        let word = Word::new(guess)?;
        let feedback = Feedback::score(&word, &self.secret)?;

        let won = feedback.is_win();
        self.history.push(Attempt {
            guess: word,
            feedback,
        });

        if won {
            self.status = SessionStatus::Won;
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.status = SessionStatus::Lost;
        }

        Ok(self.history.last().expect("attempt just pushed"))
    }

    /// Reveal the hint, once
    ///
    /// Returns `None` on every call after the first; the hint is revealed at
    /// most once per session.
    pub fn reveal_hint(&mut self) -> Option<String> {
        if self.hint_revealed {
            return None;
        }
        self.hint_revealed = true;
        Some(hint(&self.record, self.difficulty))
    }

    /// Whether the hint has already been shown
    #[inline]
    #[must_use]
    pub fn hint_revealed(&self) -> bool {
        self.hint_revealed
    }

    /// Player name as entered (trimmed)
    #[inline]
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// The secret's catalog record
    #[inline]
    #[must_use]
    pub fn record(&self) -> &CountryRecord {
        &self.record
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Difficulty this session was started at
    #[inline]
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Accepted guesses so far, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Attempts consumed so far
    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    /// Attempts still available
    #[inline]
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// True once the session reached Won or Lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != SessionStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str) -> Session {
        let record = CountryRecord::new(name, "Capital City", "Testland");
        Session::new("Ada", record, Difficulty::Beginner).unwrap()
    }

    #[test]
    fn new_session_starts_in_progress() {
        let session = session("Chile");
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(session.player(), "Ada");
        assert!(!session.is_over());
    }

    #[test]
    fn new_session_rejects_empty_player_name() {
        let record = CountryRecord::new("Chile", "Santiago", "Americas");
        let err = Session::new("   ", record, Difficulty::Beginner).unwrap_err();
        assert_eq!(err, SessionError::EmptyPlayerName);
    }

    #[test]
    fn new_session_rejects_unplayable_record() {
        let record = CountryRecord::new("New Zealand", "Wellington", "Oceania");
        let err = Session::new("Ada", record, Difficulty::Beginner).unwrap_err();
        assert_eq!(err, SessionError::UnplayableRecord("New Zealand".to_string()));
    }

    #[test]
    fn winning_guess_ends_game_immediately() {
        let mut session = session("Chile");

        session.submit("japan").unwrap();
        let attempt = session.submit("chile").unwrap();
        assert!(attempt.feedback.is_win());

        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.attempts_used(), 2);
        assert!(session.is_over());
    }

    #[test]
    fn winning_guess_is_case_insensitive() {
        let mut session = session("Chile");
        session.submit("CHILE").unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut session = session("Chile");

        for i in 0..MAX_ATTEMPTS {
            assert_eq!(session.status(), SessionStatus::InProgress, "attempt {i}");
            session.submit("japan").unwrap();
        }

        assert_eq!(session.status(), SessionStatus::Lost);
        assert_eq!(session.attempts_used(), MAX_ATTEMPTS);
        assert_eq!(session.attempts_left(), 0);
    }

    #[test]
    fn no_guesses_after_terminal_state() {
        let mut session = session("Chile");
        session.submit("chile").unwrap();

        assert_eq!(session.submit("japan"), Err(GuessError::Finished));
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn wrong_length_guess_does_not_consume_attempt() {
        let mut session = session("Chile");

        let err = session.submit("peru").unwrap_err();
        assert!(matches!(err, GuessError::WrongLength(_)));
        assert_eq!(session.attempts_used(), 0);
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn malformed_guess_does_not_consume_attempt() {
        let mut session = session("Chile");

        let err = session.submit("ch1le").unwrap_err();
        assert!(matches!(err, GuessError::InvalidWord(_)));
        assert_eq!(session.attempts_used(), 0);
    }

    #[test]
    fn history_records_guesses_in_order() {
        let mut session = session("Chile");
        session.submit("japan").unwrap();
        session.submit("china").unwrap();

        let guesses: Vec<_> = session.history().iter().map(|a| a.guess.text()).collect();
        assert_eq!(guesses, vec!["japan", "china"]);
    }

    #[test]
    fn hint_revealed_at_most_once() {
        let mut session = session("Chile");
        assert!(!session.hint_revealed());

        let first = session.reveal_hint();
        assert_eq!(
            first.as_deref(),
            Some("First letter: C, Capital: Capital City, Last letter: e")
        );
        assert!(session.hint_revealed());
        assert_eq!(session.reveal_hint(), None);
    }

    #[test]
    fn win_on_last_attempt_is_a_win() {
        let mut session = session("Chile");
        for _ in 0..(MAX_ATTEMPTS - 1) {
            session.submit("japan").unwrap();
        }

        session.submit("chile").unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
    }
}
