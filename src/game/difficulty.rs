//! Difficulty levels
//!
//! Each level maps to a name-length filter on the catalog and controls how
//! much hint detail is revealed.

use std::fmt;

/// Game difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Short names, most hint detail
    Beginner,
    /// Mid-length names
    Intermediate,
    /// Long names, capital-only hint
    Professional,
}

impl Difficulty {
    /// All levels, in ascending order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Professional];

    /// Parse a difficulty from a name string
    ///
    /// Accepts full names, single-letter shortcuts, and menu digits
    /// ("beginner"/"b"/"1" and so on).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "beginner" | "b" | "1" => Some(Self::Beginner),
            "intermediate" | "i" | "2" => Some(Self::Intermediate),
            "professional" | "advanced" | "p" | "3" => Some(Self::Professional),
            _ => None,
        }
    }

    /// Whether a country name of `len` letters belongs to this level's pool
    ///
    /// Canonical policy: beginner takes anything up to 10 letters,
    /// intermediate 5 to 8, professional 9 and up.
    #[must_use]
    pub const fn accepts_len(self, len: usize) -> bool {
        match self {
            Self::Beginner => len <= 10,
            Self::Intermediate => len >= 5 && len <= 8,
            Self::Professional => len >= 9,
        }
    }

    /// Human-readable description of the length filter
    #[must_use]
    pub const fn bounds_label(self) -> &'static str {
        match self {
            Self::Beginner => "up to 10 letters",
            Self::Intermediate => "5 to 8 letters",
            Self::Professional => "9 letters or more",
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
