//! Per-letter guess feedback
//!
//! Scoring is the standard two-pass word-guess algorithm:
//! 1. First pass: credit exact position matches (greens) and consume the
//!    matched letter from the secret's letter pool
//! 2. Second pass: credit present-but-wrong-position letters (yellows) from
//!    whatever remains in the pool
//!
//! A letter is never credited more times than it occurs in the secret, so
//! duplicate letters in the guess cannot be double-counted.

use super::word::Word;
use thiserror::Error;

/// Status of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position (green)
    Correct,
    /// Right letter, wrong position (yellow)
    Present,
    /// Letter not in the secret, or already fully credited (gray)
    Absent,
}

/// One scored letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
}

/// Scored feedback for a full guess, one result per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    results: Vec<LetterResult>,
}

/// Error type for unscorable guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl Feedback {
    /// Score `guess` against `secret`
    ///
    /// Both words are already lowercase (enforced by [`Word`]), so scoring is
    /// case-insensitive by construction.
    ///
    /// # Errors
    /// Returns [`FeedbackError::LengthMismatch`] if the guess length differs
    /// from the secret length. Attempts must not be consumed in that case;
    /// callers reject the guess before it reaches the session history.
    ///
    /// # Examples
    /// ```
    /// use countryle::core::{Feedback, LetterStatus, Word};
    ///
    /// let secret = Word::new("chile").unwrap();
    /// let guess = Word::new("china").unwrap();
    /// let feedback = Feedback::score(&guess, &secret).unwrap();
    ///
    /// assert_eq!(feedback.results()[0].status, LetterStatus::Correct);
    /// assert!(!feedback.is_win());
    /// ```
    pub fn score(guess: &Word, secret: &Word) -> Result<Self, FeedbackError> {
        if guess.len() != secret.len() {
            return Err(FeedbackError::LengthMismatch {
                expected: secret.len(),
                actual: guess.len(),
            });
        }

        let len = secret.len();
        let mut statuses = vec![LetterStatus::Absent; len];
        let mut available = secret.char_counts();

        // First pass: exact matches consume their letter from the pool
        for i in 0..len {
            if guess.char_at(i) == secret.char_at(i) {
                statuses[i] = LetterStatus::Correct;

                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining letters may still be present elsewhere
        for i in 0..len {
            if statuses[i] == LetterStatus::Absent {
                if let Some(count) = available.get_mut(&guess.char_at(i))
                    && *count > 0
                {
                    statuses[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        let results = guess
            .chars()
            .iter()
            .zip(statuses)
            .map(|(&ch, status)| LetterResult {
                letter: ch as char,
                status,
            })
            .collect();

        Ok(Self { results })
    }

    /// The per-position results, in guess order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    /// Number of scored positions (equals the secret length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True if there are no scored positions (never holds in practice)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True if every position is [`LetterStatus::Correct`]
    ///
    /// Equivalent to the guess matching the secret exactly.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.status == LetterStatus::Correct)
    }

    /// Count of green results
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == LetterStatus::Correct)
            .count()
    }

    /// Count of yellow results
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == LetterStatus::Present)
            .count()
    }

    /// Render the feedback as an emoji string like "🟩🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.results
            .iter()
            .map(|r| match r.status {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn score(guess: &str, secret: &str) -> Feedback {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        Feedback::score(&guess, &secret).unwrap()
    }

    fn statuses(feedback: &Feedback) -> Vec<LetterStatus> {
        feedback.results().iter().map(|r| r.status).collect()
    }

    #[test]
    fn score_all_correct_is_win() {
        let feedback = score("japan", "japan");
        assert!(feedback.is_win());
        assert_eq!(feedback.count_correct(), 5);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn score_all_absent() {
        let feedback = score("chad", "peru");
        assert!(feedback.results().iter().all(|r| r.status == LetterStatus::Absent));
        assert!(!feedback.is_win());
    }

    #[test]
    fn score_japan_vs_apple() {
        // Secret "japan", guess "apple":
        //   a: present (japan has two a's, none consumed yet)
        //   p: absent (the single p was consumed by the green at position 2)
        //   p: correct
        //   l: absent
        //   e: absent
        use LetterStatus::{Absent, Correct, Present};

        let feedback = score("apple", "japan");
        assert_eq!(
            statuses(&feedback),
            vec![Present, Absent, Correct, Absent, Absent]
        );
        assert_eq!(feedback.count_correct(), 1);
        assert_eq!(feedback.count_present(), 1);
    }

    #[test]
    fn score_duplicate_letters_not_double_counted() {
        // Secret "chile" has one l and one e. Guess "lilee":
        //   l: present (consumes the only l)
        //   i: present
        //   l: absent (l already consumed)
        //   e: absent (e consumed by the green at position 4)
        //   e: correct
        use LetterStatus::{Absent, Correct, Present};

        let feedback = score("lilee", "chile");
        assert_eq!(
            statuses(&feedback),
            vec![Present, Present, Absent, Absent, Correct]
        );
    }

    #[test]
    fn score_full_anagram_all_present() {
        // "eilhc" is an anagram of "chile" with no positional matches
        let feedback = score("eilhc", "chile");
        assert!(feedback
            .results()
            .iter()
            .all(|r| r.status == LetterStatus::Present));
        assert_eq!(feedback.count_present(), 5);
    }

    #[test]
    fn score_length_mismatch_rejected() {
        let guess = Word::new("peru").unwrap();
        let secret = Word::new("japan").unwrap();

        assert_eq!(
            Feedback::score(&guess, &secret),
            Err(FeedbackError::LengthMismatch {
                expected: 5,
                actual: 4,
            })
        );
    }

    #[test]
    fn score_result_count_matches_secret_length() {
        for (guess, secret) in [("peru", "cuba"), ("canada", "norway"), ("a", "b")] {
            let feedback = score(guess, secret);
            assert_eq!(feedback.len(), secret.len());
        }
    }

    #[test]
    fn score_is_pure() {
        let guess = Word::new("apple").unwrap();
        let secret = Word::new("japan").unwrap();

        let first = Feedback::score(&guess, &secret).unwrap();
        let second = Feedback::score(&guess, &secret).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn score_credit_bounded_by_multiplicity() {
        // Any letter's combined green+yellow credit never exceeds its count
        // in the secret
        for (guess, secret) in [
            ("lilee", "chile"),
            ("eeeee", "chile"),
            ("apple", "japan"),
            ("anana", "japan"),
            ("greece", "greece"),
        ] {
            let g = Word::new(guess).unwrap();
            let s = Word::new(secret).unwrap();
            let feedback = Feedback::score(&g, &s).unwrap();
            let secret_counts = s.char_counts();

            for letter in g.chars() {
                let credited = feedback
                    .results()
                    .iter()
                    .filter(|r| {
                        r.letter as u8 == *letter && r.status != LetterStatus::Absent
                    })
                    .count();
                let multiplicity =
                    usize::from(secret_counts.get(letter).copied().unwrap_or(0));
                assert!(
                    credited <= multiplicity,
                    "{guess} vs {secret}: letter {} credited {credited} times, occurs {multiplicity}",
                    *letter as char
                );
            }
        }
    }

    #[test]
    fn to_emoji_mixed() {
        let feedback = score("apple", "japan");
        assert_eq!(feedback.to_emoji(), "🟨⬜🟩⬜⬜");
    }

    #[test]
    fn win_requires_full_match_not_just_letters() {
        // Same letters, wrong order: not a win
        let feedback = score("eilhc", "chile");
        assert!(!feedback.is_win());
    }
}
