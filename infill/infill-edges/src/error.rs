//! Error types for edge network construction and validation.

use infill_types::{CellIndex, Direction, Micron};
use thiserror::Error;

/// Errors that can occur while building or validating an edge network.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdgeNetworkError {
    /// The subdivision holds no cells.
    #[error("Subdivision has no cells")]
    EmptySubdivision,

    /// A cell's adjacency list references an index past the cell arena.
    #[error("Cell {cell} references neighbor {neighbor}, past the end of the arena")]
    NeighborOutOfBounds {
        /// The cell whose adjacency is malformed.
        cell: CellIndex,
        /// The out-of-bounds neighbor index.
        neighbor: CellIndex,
    },

    /// An edge required by the ownership rule is absent from its mapping.
    #[error("Cell {cell} has no stored {side} edge; ownership invariant violated")]
    MissingOwnedEdge {
        /// The cell expected to own the edge.
        cell: CellIndex,
        /// Which side edge is missing.
        side: Direction,
    },

    /// A stored edge belongs to a cell the ownership rule excludes.
    #[error("Cell {cell} stores a {side} edge it does not own")]
    SpuriousEdge {
        /// The cell with the extra entry.
        cell: CellIndex,
        /// Which side edge is spurious.
        side: Direction,
    },

    /// A stored polyline is not strictly increasing in Z.
    #[error("The {side} edge of cell {cell} is not strictly Z-monotone")]
    NonMonotonePolyline {
        /// The owning cell.
        cell: CellIndex,
        /// Which side edge is malformed.
        side: Direction,
    },

    /// A polyline's endpoints do not lie on the owner's Z range boundary.
    #[error("The {side} edge of cell {cell} does not span the cell's Z range")]
    BoundaryMismatch {
        /// The owning cell.
        cell: CellIndex,
        /// Which side edge is malformed.
        side: Direction,
    },

    /// A polyline segment is too close to horizontal.
    #[error(
        "The {side} edge of cell {cell} has a segment inclined at {inclination_deg:.1}°, \
         below the minimum"
    )]
    ShallowSegment {
        /// The owning cell.
        cell: CellIndex,
        /// Which side edge is malformed.
        side: Direction,
        /// The offending segment's inclination off horizontal, in degrees.
        inclination_deg: f64,
    },

    /// The bend clearance parameter is not positive.
    #[error("Invalid bend clearance: {0} µm (must be > 0)")]
    InvalidBendClearance(Micron),

    /// The inclination threshold parameter is outside (0°, 90°).
    #[error("Invalid inclination threshold: {0}° (must be in (0, 90))")]
    InvalidInclination(f64),
}

/// Result type for edge network operations.
pub type NetworkResult<T> = std::result::Result<T, EdgeNetworkError>;
