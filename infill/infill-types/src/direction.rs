//! Neighbor directions of a prism cell.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four neighbor directions of a prism cell.
///
/// `Left`/`Right` name the two lateral neighbors across a cell's triangle
/// side edges; `Up`/`Down` name the vertical neighbors in the same lateral
/// column.
///
/// # Example
///
/// ```
/// use infill_types::Direction;
///
/// assert_eq!(Direction::Up.opposite(), Direction::Down);
/// assert_eq!(Direction::Left.opposite(), Direction::Right);
/// assert!(Direction::Up.is_vertical());
/// assert!(Direction::Left.is_lateral());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward the lateral neighbor across the cell's `from` side edge.
    Left,
    /// Toward the lateral neighbor across the cell's `to` side edge.
    Right,
    /// Toward the vertical neighbor above.
    Up,
    /// Toward the vertical neighbor below.
    Down,
}

impl Direction {
    /// All four directions, in adjacency-array order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The opposite direction (Left↔Right, Up↔Down).
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Index into a per-cell adjacency array.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Up => 2,
            Self::Down => 3,
        }
    }

    /// Whether this is `Up` or `Down`.
    #[inline]
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Whether this is `Left` or `Right`.
    #[inline]
    #[must_use]
    pub const fn is_lateral(self) -> bool {
        !self.is_vertical()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn opposite_swaps_axis_mates() {
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 4];
        for d in Direction::ALL {
            assert!(!seen[d.index()]);
            seen[d.index()] = true;
        }
    }

    #[test]
    fn vertical_and_lateral_partition() {
        for d in Direction::ALL {
            assert_ne!(d.is_vertical(), d.is_lateral());
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
