//! Countryle
//!
//! A terminal word-guessing game where the secret is a country name drawn
//! from the REST Countries API, filtered by difficulty.
//!
//! # Quick Start
//!
//! ```rust
//! use countryle::core::{Feedback, Word};
//!
//! let secret = Word::new("chile").unwrap();
//! let guess = Word::new("china").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret).unwrap();
//! assert_eq!(feedback.count_correct(), 3); // c, h, i
//! ```

// Core domain types
pub mod core;

// Country catalog (fetch + normalization)
pub mod catalog;

// Game rules: difficulty, selection, hints, session
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting and the Renderer trait
pub mod output;

// Interactive TUI interface
pub mod interactive;
