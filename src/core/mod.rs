//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with zero UI or network
//! dependencies. All types here are pure and testable.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterResult, LetterStatus};
pub use word::{MAX_WORD_LEN, Word, WordError};
