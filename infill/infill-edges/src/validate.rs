//! Invariant checks over a finished network.

use crate::error::{EdgeNetworkError, NetworkResult};
use crate::network::EdgeNetwork;
use crate::polyline::EdgePolyline;
use infill_types::{CellIndex, Direction};

impl EdgeNetwork<'_> {
    /// Check every stored polyline and the ownership mappings against the
    /// structural invariants:
    ///
    /// - each polyline is strictly Z-monotone,
    /// - its endpoints lie on the owning cell's Z range boundary,
    /// - every segment is inclined steeper than
    ///   [`min_inclination_deg`](crate::EdgeNetworkParams::min_inclination_deg),
    /// - each lateral edge is stored by exactly the cell the ownership rule
    ///   names.
    ///
    /// Debug builds run this automatically at the end of construction.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> NetworkResult<()> {
        for (&cell, edge) in &self.left_edges {
            self.check_polyline(cell, Direction::Left, edge)?;
        }
        for (&cell, edge) in &self.right_edges {
            self.check_polyline(cell, Direction::Right, edge)?;
        }
        self.check_ownership()
    }

    fn check_polyline(
        &self,
        cell: CellIndex,
        side: Direction,
        edge: &EdgePolyline,
    ) -> NetworkResult<()> {
        if edge.len() < 2 || edge.points().windows(2).any(|w| w[1].z <= w[0].z) {
            return Err(EdgeNetworkError::NonMonotonePolyline { cell, side });
        }
        let z_range = self.subdivision.cell(cell).z_range;
        if edge.first().z != z_range.min || edge.last().z != z_range.max {
            return Err(EdgeNetworkError::BoundaryMismatch { cell, side });
        }
        let inclination_deg = edge.min_inclination_deg();
        if inclination_deg <= self.params.min_inclination_deg {
            return Err(EdgeNetworkError::ShallowSegment {
                cell,
                side,
                inclination_deg,
            });
        }
        Ok(())
    }

    /// Recompute the ownership rule per cell and compare against the stored
    /// mappings: a missing entry and a spurious entry are both violations.
    fn check_ownership(&self) -> NetworkResult<()> {
        for (index, cell) in self.subdivision.cells().iter().enumerate() {
            let owns_left = cell
                .neighbors(Direction::Left)
                .first()
                .is_none_or(|&n| cell.depth > self.subdivision.cell(n).depth);
            let owns_right = cell
                .neighbors(Direction::Right)
                .first()
                .is_none_or(|&n| cell.depth >= self.subdivision.cell(n).depth);
            for (side, owns, stored) in [
                (Direction::Left, owns_left, self.left_edges.contains_key(&index)),
                (Direction::Right, owns_right, self.right_edges.contains_key(&index)),
            ] {
                if owns && !stored {
                    return Err(EdgeNetworkError::MissingOwnedEdge { cell: index, side });
                }
                if stored && !owns {
                    return Err(EdgeNetworkError::SpuriousEdge { cell: index, side });
                }
            }
        }
        Ok(())
    }
}
