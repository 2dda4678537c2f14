//! Game rules
//!
//! Difficulty filters, secret selection, hint generation, and the session
//! state machine. Everything here is UI-free and drives both the TUI and the
//! simple CLI mode.

mod difficulty;
mod hint;
mod select;
mod session;

pub use difficulty::Difficulty;
pub use hint::hint;
pub use select::{EmptyPoolError, eligible_pool, is_eligible, select_secret};
pub use session::{Attempt, GuessError, MAX_ATTEMPTS, Session, SessionError, SessionStatus};
