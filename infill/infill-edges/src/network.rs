//! The edge network: construction driver and sampling queries.

use crate::build::NetworkBuilder;
use crate::error::{EdgeNetworkError, NetworkResult};
use crate::params::EdgeNetworkParams;
use crate::polyline::EdgePolyline;
use hashbrown::HashMap;
use infill_types::{CellIndex, Direction, Micron, Point2, PrismSubdivision};
use std::time::Instant;
use tracing::{debug, info};

/// The oscillating side-edge network of a prism subdivision.
///
/// Built eagerly in two passes over a frozen [`PrismSubdivision`]: a
/// finest-first pass that stores every owned edge polyline under the
/// oscillation constraints, then a coarsest-first pass that repairs
/// Z-discontinuities where equal-depth cell pairs meet a coarser cell.
/// Thereafter the network is immutable; queries may run concurrently from
/// any number of readers.
///
/// # Example
///
/// ```
/// use infill_edges::EdgeNetwork;
/// use infill_types::{CellFootprint, Point2, PrismCell, PrismSubdivision, ZRange};
///
/// let footprint = CellFootprint::new(
///     Point2::new(0, 0),
///     Point2::new(1000, 0),
///     Point2::new(1000, 1000),
/// );
/// let cell = PrismCell::new(footprint, ZRange::new(0, 1000), 0, true);
/// let subdivision = PrismSubdivision::from_cells(vec![cell]);
///
/// let network = EdgeNetwork::new(&subdivision)?;
/// // The cell owns both of its side edges; sample the right one halfway up.
/// assert_eq!(network.edge_location_between(0, 0, 500), Point2::new(1000, 500));
/// # Ok::<(), infill_edges::EdgeNetworkError>(())
/// ```
#[derive(Debug)]
pub struct EdgeNetwork<'a> {
    pub(crate) subdivision: &'a PrismSubdivision,
    pub(crate) params: EdgeNetworkParams,
    pub(crate) left_edges: HashMap<CellIndex, EdgePolyline>,
    pub(crate) right_edges: HashMap<CellIndex, EdgePolyline>,
}

impl<'a> EdgeNetwork<'a> {
    /// Build the network with default parameters.
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn new(subdivision: &'a PrismSubdivision) -> NetworkResult<Self> {
        Self::build(subdivision, EdgeNetworkParams::default())
    }

    /// Build the network eagerly; both passes run here.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeNetworkError`] when the parameters are invalid or the
    /// subdivision is malformed: empty, adjacency indices out of bounds, or
    /// neighbor lists inconsistent with the ownership rule. In debug builds
    /// the finished network is also [validated](Self::validate).
    pub fn build(
        subdivision: &'a PrismSubdivision,
        params: EdgeNetworkParams,
    ) -> NetworkResult<Self> {
        params.validate()?;
        if subdivision.is_empty() {
            return Err(EdgeNetworkError::EmptySubdivision);
        }
        check_adjacency_bounds(subdivision)?;

        let started = Instant::now();
        debug!(
            cells = subdivision.len(),
            layers = subdivision.depth_ordered().len(),
            "building prism edge network",
        );

        let mut builder = NetworkBuilder::new(subdivision, params);
        builder.build_edges()?;
        builder.resolve_discontinuities()?;

        let network = Self {
            subdivision,
            params,
            left_edges: builder.left_edges,
            right_edges: builder.right_edges,
        };
        info!(
            edges = network.edge_count(),
            bends = network.bend_count(),
            elapsed = ?started.elapsed(),
            "built prism edge network",
        );
        if cfg!(debug_assertions) {
            network.validate()?;
        }
        Ok(network)
    }

    /// The 2D point where the shared edge between two laterally adjacent
    /// cells crosses the horizontal plane at `z`.
    ///
    /// `before` is the left cell, `after` the right one. The edge is read
    /// from whichever of the two owns it: `after` when it is strictly
    /// deeper, otherwise `before`.
    ///
    /// # Panics
    ///
    /// Panics if the owned edge is missing (an ownership violation the
    /// debug-build validation would have caught) or if `z` lies outside the
    /// edge's Z range. Both are programming errors on immutable data.
    #[must_use]
    pub fn edge_location_between(
        &self,
        before: CellIndex,
        after: CellIndex,
        z: Micron,
    ) -> Point2 {
        let after_is_finer =
            self.subdivision.cell(after).depth > self.subdivision.cell(before).depth;
        let (mapping, owner, side) = if after_is_finer {
            (&self.left_edges, after, Direction::Left)
        } else {
            (&self.right_edges, before, Direction::Right)
        };
        match mapping.get(&owner) {
            Some(edge) => edge.sample_at(z),
            None => panic!("cell {owner} does not store its {side} edge"),
        }
    }

    /// The stored LEFT edge of `cell`, if `cell` owns it.
    #[inline]
    #[must_use]
    pub fn left_edge(&self, cell: CellIndex) -> Option<&EdgePolyline> {
        self.left_edges.get(&cell)
    }

    /// The stored RIGHT edge of `cell`, if `cell` owns it.
    #[inline]
    #[must_use]
    pub fn right_edge(&self, cell: CellIndex) -> Option<&EdgePolyline> {
        self.right_edges.get(&cell)
    }

    /// Total number of stored edge polylines.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.left_edges.len() + self.right_edges.len()
    }

    /// Total number of interior bending points across all stored edges.
    #[must_use]
    pub fn bend_count(&self) -> usize {
        self.left_edges
            .values()
            .chain(self.right_edges.values())
            .map(|edge| edge.len() - 2)
            .sum()
    }

    /// The subdivision this network was built over.
    #[inline]
    #[must_use]
    pub fn subdivision(&self) -> &'a PrismSubdivision {
        self.subdivision
    }

    /// The parameters the network was built with.
    #[inline]
    #[must_use]
    pub const fn params(&self) -> &EdgeNetworkParams {
        &self.params
    }
}

/// Reject adjacency lists that reach past the cell arena, so the build
/// passes can index unchecked.
fn check_adjacency_bounds(subdivision: &PrismSubdivision) -> NetworkResult<()> {
    for (index, cell) in subdivision.cells().iter().enumerate() {
        for direction in Direction::ALL {
            for &neighbor in cell.neighbors(direction) {
                if subdivision.get(neighbor).is_none() {
                    return Err(EdgeNetworkError::NeighborOutOfBounds {
                        cell: index,
                        neighbor,
                    });
                }
            }
        }
    }
    Ok(())
}
