//! Oriented 2D segments.

// Intersection math widens to i128 before dividing back down to i64
#![allow(clippy::cast_possible_truncation)]

use crate::coords::{Micron, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An oriented 2D segment in micrometer coordinates.
///
/// # Example
///
/// ```
/// use infill_types::{Point2, Segment2};
///
/// let edge = Segment2::new(Point2::new(0, 0), Point2::new(1000, 0));
/// assert_eq!(edge.swapped().from, Point2::new(1000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment2 {
    /// Start point.
    pub from: Point2,
    /// End point.
    pub to: Point2,
}

impl Segment2 {
    /// Create a new segment from start to end.
    #[inline]
    #[must_use]
    pub const fn new(from: Point2, to: Point2) -> Self {
        Self { from, to }
    }

    /// The same segment with its orientation reversed.
    #[inline]
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// The displacement from start to end.
    #[inline]
    #[must_use]
    pub fn direction(self) -> Vector2 {
        self.to - self.from
    }

    /// Intersection of the infinite lines through `self` and `other`.
    ///
    /// Coordinates are computed with 128-bit intermediates and truncated back
    /// to whole micrometers. Returns `None` when the lines are parallel or
    /// either segment is degenerate.
    ///
    /// # Example
    ///
    /// ```
    /// use infill_types::{Point2, Segment2};
    ///
    /// let vertical = Segment2::new(Point2::new(3000, 2000), Point2::new(3000, 0));
    /// let diagonal = Segment2::new(Point2::new(2000, 2000), Point2::new(4000, 0));
    /// assert_eq!(
    ///     vertical.line_intersection(&diagonal),
    ///     Some(Point2::new(3000, 1000)),
    /// );
    /// ```
    #[must_use]
    pub fn line_intersection(&self, other: &Self) -> Option<Point2> {
        let d1 = self.direction();
        let d2 = other.direction();
        let denominator = cross(d1, d2);
        if denominator == 0 {
            return None;
        }
        let offset = other.from - self.from;
        let numerator = cross(offset, d2);
        let x = i128::from(self.from.x) + i128::from(d1.x) * numerator / denominator;
        let y = i128::from(self.from.y) + i128::from(d1.y) * numerator / denominator;
        Some(Point2::new(x as Micron, y as Micron))
    }
}

/// 2D cross product, widened to avoid overflow.
#[inline]
fn cross(a: Vector2, b: Vector2) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}
