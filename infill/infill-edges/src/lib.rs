//! Oscillating side-edge network for prism-based gyroid-like infill.
//!
//! Given a completed space subdivision whose leaves are vertical triangular
//! prism cells (a [`PrismSubdivision`]), this crate computes the exact 3D
//! polyline shape of every cell's two oscillating side edges, then answers
//! sampling queries: *where does the edge between these two adjacent cells
//! cross the plane at height Z?* Downstream toolpath generation threads a
//! continuous infill line through those crossing points.
//!
//! Each edge polyline has to satisfy constraints from neighbors at other
//! subdivision depths at once:
//!
//! - it interpolates between the cell's triangle corners across its Z range,
//! - it meets the matching edge of the cell above/below at a shared point
//!   when their depths differ (oscillation constraint),
//! - where two equal-depth cells sit on a coarser one, their shared edge is
//!   anchored onto the coarse cell's own crossing line so the sampled path
//!   never jumps at a layer boundary.
//!
//! Ownership of each shared edge is deterministic: the finer cell stores it,
//! and between equal-depth cells the left one does.
//!
//! # Features
//!
//! - **Eager construction**: both passes run in [`EdgeNetwork::build`]
//! - **Immutable thereafter**: queries are lock-free shared reads
//! - **Integer micrometers**: no accumulated floating-point drift
//! - **Validation**: [`EdgeNetwork::validate`] checks monotonicity, boundary
//!   match, inclination, and ownership exclusivity
//!
//! # Example
//!
//! ```
//! use infill_edges::{EdgeNetwork, EdgeNetworkParams};
//! use infill_types::{CellFootprint, Point2, PrismCell, PrismSubdivision, ZRange};
//!
//! // One prism cell: a right triangle swept from z = 0 to z = 1000.
//! let footprint = CellFootprint::new(
//!     Point2::new(0, 0),
//!     Point2::new(1000, 0),
//!     Point2::new(1000, 1000),
//! );
//! let cell = PrismCell::new(footprint, ZRange::new(0, 1000), 0, true);
//! let subdivision = PrismSubdivision::from_cells(vec![cell]);
//!
//! let network = EdgeNetwork::build(&subdivision, EdgeNetworkParams::default())?;
//! assert_eq!(network.edge_count(), 2);
//! assert_eq!(network.edge_location_between(0, 0, 500), Point2::new(1000, 500));
//! # Ok::<(), infill_edges::EdgeNetworkError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod build;
mod error;
mod network;
mod params;
mod polyline;
mod resolve;
mod validate;

// Re-export main types
pub use error::{EdgeNetworkError, NetworkResult};
pub use network::EdgeNetwork;
pub use params::EdgeNetworkParams;
pub use polyline::EdgePolyline;

// Re-export the types crate's common names for convenience
pub use infill_types::{CellIndex, Direction, Micron, Point2, Point3, PrismSubdivision};
