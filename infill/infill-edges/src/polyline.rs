//! Edge polylines: the 3D shape of a prism cell's oscillating side edge.

// Inclination math goes through f64 once per segment
#![allow(clippy::cast_precision_loss)]

use infill_types::{
    length_2d, lift, squared_length_3d, xy, Direction, Micron, Point2, Point3,
};
use smallvec::SmallVec;

/// The 3D polyline of one oscillating side edge.
///
/// Holds at least two points, strictly increasing in Z. The first point lies
/// at the owning cell's `z_min`, the last at its `z_max`; interior points are
/// bending points inserted while satisfying neighbor constraints. Two to
/// four points in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgePolyline {
    points: SmallVec<[Point3; 4]>,
}

impl EdgePolyline {
    /// Create a two-point polyline from the bottom and top edge locations.
    pub(crate) fn from_endpoints(bottom: Point3, top: Point3) -> Self {
        debug_assert!(bottom.z < top.z);
        let mut points = SmallVec::new();
        points.push(bottom);
        points.push(top);
        Self { points }
    }

    /// The bottom edge location.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Point3 {
        self.points[0]
    }

    /// The top edge location.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Point3 {
        self.points[self.points.len() - 1]
    }

    /// All edge locations, bottom to top.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of edge locations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a polyline holds at least two points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Pull the polyline's end in direction `toward` onto `destination`,
    /// inserting a bending point when the move is long enough to need one.
    ///
    /// The candidate bend lies on the adjacent segment, half the 2D move
    /// length down its direction, so an XY-aligned pull preserves the
    /// segment's inclination. When the bend would come within `clearance`
    /// of either the destination or its polyline neighbor it is suppressed
    /// and the endpoint simply moves.
    pub(crate) fn adjust_end(
        &mut self,
        toward: Direction,
        destination: Point3,
        clearance: Micron,
    ) {
        debug_assert!(toward.is_vertical());
        let up = toward == Direction::Up;
        let end = if up { self.points.len() - 1 } else { 0 };
        let to_be_moved = self.points[end];
        if to_be_moved == destination {
            return;
        }
        debug_assert_eq!(to_be_moved.z, destination.z);

        let anchor = if up {
            self.points[self.points.len() - 2]
        } else {
            self.points[1]
        };
        let move_length = length_2d(xy(destination) - xy(to_be_moved));
        let edge_direction = anchor - to_be_moved;
        let edge_direction_length = length_2d(xy(anchor) - xy(to_be_moved));

        self.points[end] = destination;
        if edge_direction_length == 0 {
            // Adjacent segment is vertical; there is nothing to bend along.
            return;
        }

        let bend = to_be_moved + edge_direction * move_length / 2 / edge_direction_length;
        let clearance_sq = clearance * clearance;
        if squared_length_3d(bend - anchor) > clearance_sq
            && squared_length_3d(bend - destination) > clearance_sq
        {
            let insert_at = if up { self.points.len() - 1 } else { 1 };
            self.points.insert(insert_at, bend);
        }
    }

    /// The 2D location where the edge crosses the horizontal plane at `z`.
    ///
    /// Interpolates linearly between the two samples straddling `z`, with
    /// integer arithmetic throughout.
    ///
    /// # Panics
    ///
    /// Panics if `z` lies outside the polyline's Z range; callers must
    /// clamp queries to the owning cell's `z_range` first.
    #[must_use]
    pub fn sample_at(&self, z: Micron) -> Point2 {
        assert!(
            z >= self.first().z && z <= self.last().z,
            "z = {z} outside edge range [{}, {}]",
            self.first().z,
            self.last().z,
        );
        for window in self.points.windows(2) {
            let (below, above) = (window[0], window[1]);
            if z <= above.z {
                let dz = above.z - below.z;
                debug_assert!(dz > 0, "consecutive edge locations share a Z ordinate");
                let rest = z - below.z;
                let direction = xy(above) - xy(below);
                return xy(below) + direction * rest / dz;
            }
        }
        unreachable!("z within range but past the last sample");
    }

    /// The shallowest segment inclination off horizontal, in degrees.
    ///
    /// Vertical segments count as 90°; a two-point vertical polyline
    /// therefore reports 90°.
    #[must_use]
    pub fn min_inclination_deg(&self) -> f64 {
        self.points
            .windows(2)
            .map(|window| {
                let run = length_2d(xy(window[1]) - xy(window[0])) as f64;
                let rise = (window[1].z - window[0].z) as f64;
                rise.atan2(run).to_degrees()
            })
            .fold(90.0_f64, f64::min)
    }

    /// Lift a 2D segment into a two-point polyline spanning `[z_min, z_max]`.
    pub(crate) fn from_segment(
        from: Point2,
        to: Point2,
        z_min: Micron,
        z_max: Micron,
    ) -> Self {
        Self::from_endpoints(lift(from, z_min), lift(to, z_max))
    }
}
