//! Core types for prism-based infill subdivision structures.
//!
//! This crate provides the foundational types consumed by infill
//! post-processing algorithms:
//!
//! - [`Micron`], [`Point2`], [`Point3`] - Fixed-point micrometer coordinates
//! - [`Direction`] - The four neighbor directions of a prism cell
//! - [`Segment2`] - An oriented 2D segment
//! - [`PrismCell`] - A leaf of the subdivision: a triangular footprint swept
//!   over a Z interval
//! - [`PrismSubdivision`] - The frozen, read-only view over all leaf cells
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used
//! in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Slicer backends
//!
//! # Units
//!
//! All coordinates are **integer micrometers** ([`Micron`] = `i64`). There is
//! no floating point in any stored position; geometric predicates stay exact
//! and hash-safe.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X, Y: the build plate plane
//! - Z: height (up/down, print direction)
//!
//! # Example
//!
//! ```
//! use infill_types::{
//!     CellFootprint, Direction, Point2, PrismCell, PrismSubdivision, ZRange,
//! };
//!
//! let footprint = CellFootprint::new(
//!     Point2::new(0, 0),
//!     Point2::new(1000, 0),
//!     Point2::new(1000, 1000),
//! );
//! let cell = PrismCell::new(footprint, ZRange::new(0, 1000), 0, true);
//!
//! let subdivision = PrismSubdivision::from_cells(vec![cell]);
//! assert_eq!(subdivision.len(), 1);
//! assert_eq!(subdivision.depth_ordered().len(), 1);
//! assert!(subdivision.cell(0).neighbors(Direction::Up).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod cell;
mod coords;
mod direction;
mod segment;
mod subdivision;

// Re-export core types
pub use cell::{CellFootprint, PrismCell, ZRange};
pub use coords::{
    length_2d, length_3d, lift, squared_length_2d, squared_length_3d, xy, Micron, Point2, Point3,
    Vector2, Vector3,
};
pub use direction::Direction;
pub use segment::Segment2;
pub use subdivision::{CellIndex, PrismSubdivision};
