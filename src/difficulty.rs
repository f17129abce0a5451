//! Difficulty levels and the search depth each one buys.

use std::fmt;

use crate::constants::{EASY_DEPTH, HARD_DEPTH, MEDIUM_DEPTH};

/// How hard the computer plays.
///
/// The depth grows the tree roughly as branching-factor^depth, so this is a
/// strength and latency knob at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies, the root move included.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => EASY_DEPTH,
            Difficulty::Medium => MEDIUM_DEPTH,
            Difficulty::Hard => HARD_DEPTH,
        }
    }

    /// Read a level name, case-insensitively. Anything unrecognised is
    /// [`Difficulty::Medium`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depths() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 2);
        assert_eq!(Difficulty::Hard.depth(), 3);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name(" HARD "), Difficulty::Hard);
        assert_eq!(Difficulty::from_name("Medium"), Difficulty::Medium);
    }

    #[test]
    fn test_unknown_name_falls_back_to_medium() {
        assert_eq!(Difficulty::from_name("grandmaster"), Difficulty::Medium);
        assert_eq!(Difficulty::from(""), Difficulty::Medium);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_display_roundtrip() {
        for level in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_name(&level.to_string()), level);
        }
    }
}
