//! The four cardinal directions rooms can connect along.

use std::fmt;

/// A cardinal direction, doubling as an index into a room's exit array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// East.
    East,
    /// South.
    South,
    /// West.
    West,
}

impl Direction {
    /// All directions in exit-slot order. Exit listings follow this order.
    pub const ALL: [Direction; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The exit-array slot for this direction.
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Get the display name for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
            Self::West => "West",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_follows_slot_order() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West
            ]
        );
        for (slot, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), slot);
        }
    }

    #[test]
    fn display_uses_capitalized_name() {
        assert_eq!(Direction::North.to_string(), "North");
        assert_eq!(Direction::West.name(), "West");
    }
}
