use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Playing strength, mapped onto a fixed search depth
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Master,
    ];

    /// Search depth in plies
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Master => 4,
        }
    }

    /// Difficulty for a 1-based level number
    #[must_use]
    pub fn from_level(level: u32) -> Option<Difficulty> {
        Difficulty::ALL.into_iter().find(|d| d.depth() == level)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Master => "Master",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_depths() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
        assert_eq!(Difficulty::default().depth(), 3);
        assert_eq!(Difficulty::from_level(1), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_level(4), Some(Difficulty::Master));
        assert_eq!(Difficulty::from_level(0), None);
        assert_eq!(Difficulty::from_level(5), None);
    }
}
