//! Terminal output formatting
//!
//! The `Renderer` trait plus the colored terminal implementation used by the
//! simple CLI mode.

pub mod display;
pub mod formatters;
pub mod render;

pub use display::{DEFAULT_WIN_DELAY, TerminalRenderer};
pub use render::{Page, Renderer};
