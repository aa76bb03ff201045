//! Fixed-point micrometer coordinates.

// Integer lengths round through f64::sqrt, matching the slicer convention
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

/// Scalar coordinate in micrometers.
pub type Micron = i64;

/// 2D position in micrometers.
pub type Point2 = nalgebra::Point2<Micron>;

/// 3D position in micrometers. The `z` field is the print height.
pub type Point3 = nalgebra::Point3<Micron>;

/// 2D displacement in micrometers.
pub type Vector2 = nalgebra::Vector2<Micron>;

/// 3D displacement in micrometers.
pub type Vector3 = nalgebra::Vector3<Micron>;

/// Squared Euclidean length of a 2D displacement, in exact integer µm².
#[inline]
#[must_use]
pub fn squared_length_2d(v: Vector2) -> Micron {
    v.x * v.x + v.y * v.y
}

/// Squared Euclidean length of a 3D displacement, in exact integer µm².
#[inline]
#[must_use]
pub fn squared_length_3d(v: Vector3) -> Micron {
    v.x * v.x + v.y * v.y + v.z * v.z
}

/// Euclidean length of a 2D displacement, truncated to whole micrometers.
#[inline]
#[must_use]
pub fn length_2d(v: Vector2) -> Micron {
    (squared_length_2d(v) as f64).sqrt() as Micron
}

/// Euclidean length of a 3D displacement, truncated to whole micrometers.
#[inline]
#[must_use]
pub fn length_3d(v: Vector3) -> Micron {
    (squared_length_3d(v) as f64).sqrt() as Micron
}

/// Project a 3D position onto the XY plane.
#[inline]
#[must_use]
pub fn xy(p: Point3) -> Point2 {
    Point2::new(p.x, p.y)
}

/// Lift a 2D position to 3D at the given height.
#[inline]
#[must_use]
pub fn lift(p: Point2, z: Micron) -> Point3 {
    Point3::new(p.x, p.y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_lengths_are_exact() {
        assert_eq!(squared_length_2d(Vector2::new(3, 4)), 25);
        assert_eq!(squared_length_3d(Vector3::new(1, 2, 2)), 9);
    }

    #[test]
    fn lengths_truncate() {
        assert_eq!(length_2d(Vector2::new(3, 4)), 5);
        assert_eq!(length_2d(Vector2::new(1, 1)), 1);
        assert_eq!(length_3d(Vector3::new(2, 3, 6)), 7);
    }

    #[test]
    fn project_and_lift_roundtrip() {
        let p = Point3::new(10, -20, 30);
        assert_eq!(lift(xy(p), p.z), p);
    }
}
