//! Depth-ordered construction of the owned edge polylines.
//!
//! Cells are visited finest-first so that whenever a coarser cell needs the
//! edge of a strictly deeper vertical neighbor, that edge already exists.
//! Same-depth cells never reference each other while building.

use crate::error::{EdgeNetworkError, NetworkResult};
use crate::params::EdgeNetworkParams;
use crate::polyline::EdgePolyline;
use hashbrown::HashMap;
use infill_types::{CellIndex, Direction, PrismCell, PrismSubdivision};

/// Mutable state shared by the two construction passes.
pub(crate) struct NetworkBuilder<'a> {
    pub(crate) view: &'a PrismSubdivision,
    pub(crate) params: EdgeNetworkParams,
    pub(crate) left_edges: HashMap<CellIndex, EdgePolyline>,
    pub(crate) right_edges: HashMap<CellIndex, EdgePolyline>,
}

impl<'a> NetworkBuilder<'a> {
    pub(crate) fn new(view: &'a PrismSubdivision, params: EdgeNetworkParams) -> Self {
        Self {
            view,
            params,
            left_edges: HashMap::new(),
            right_edges: HashMap::new(),
        }
    }

    /// First pass: walk the depth layers finest-first and store every owned
    /// edge, constrained against the vertical neighbors already built.
    pub(crate) fn build_edges(&mut self) -> NetworkResult<()> {
        let view = self.view;
        for layer in view.depth_ordered().iter().rev() {
            for &index in layer {
                self.add_cell_edges(index)?;
            }
        }
        Ok(())
    }

    /// Depth of the front neighbor in `direction`, or `None` at the
    /// structure boundary.
    fn neighbor_depth(&self, cell: &PrismCell, direction: Direction) -> Option<u8> {
        cell.neighbors(direction)
            .first()
            .map(|&neighbor| self.view.cell(neighbor).depth)
    }

    /// Store the edges `index` owns. A cell owns its LEFT edge against a
    /// strictly coarser left neighbor, its RIGHT edge against a coarser or
    /// equal-depth right neighbor; between equal-depth cells the left one
    /// owns the shared edge. Boundary sides with no neighbor are owned
    /// outright.
    fn add_cell_edges(&mut self, index: CellIndex) -> NetworkResult<()> {
        let cell = self.view.cell(index);
        let owns_left = self
            .neighbor_depth(cell, Direction::Left)
            .is_none_or(|depth| cell.depth > depth);
        let owns_right = self
            .neighbor_depth(cell, Direction::Right)
            .is_none_or(|depth| cell.depth >= depth);
        if owns_left {
            self.add_cell_edge(index, Direction::Left)?;
        }
        if owns_right {
            self.add_cell_edge(index, Direction::Right)?;
        }
        Ok(())
    }

    fn add_cell_edge(&mut self, index: CellIndex, side: Direction) -> NetworkResult<()> {
        let cell = self.view.cell(index);
        let mut segment = if side == Direction::Left {
            cell.footprint.from_edge()
        } else {
            cell.footprint.to_edge()
        };
        if !cell.is_expanding {
            segment = segment.swapped();
        }
        let mut edge = EdgePolyline::from_segment(
            segment.from,
            segment.to,
            cell.z_range.min,
            cell.z_range.max,
        );

        self.apply_oscillation_constraint(index, side, Direction::Up, &mut edge)?;
        self.apply_oscillation_constraint(index, side, Direction::Down, &mut edge)?;

        let mapping = if side == Direction::Left {
            &mut self.left_edges
        } else {
            &mut self.right_edges
        };
        mapping.insert(index, edge);
        Ok(())
    }

    /// Align the `vertical` end of `edge` with the matching edge of the
    /// vertical neighbor, when that neighbor column is subdivided finer than
    /// this cell.
    fn apply_oscillation_constraint(
        &self,
        index: CellIndex,
        side: Direction,
        vertical: Direction,
        edge: &mut EdgePolyline,
    ) -> NetworkResult<()> {
        let cell = self.view.cell(index);
        let vertical_neighbors = cell.neighbors(vertical);
        // The inner-corner neighbor along this side.
        let picked = if side == Direction::Left {
            vertical_neighbors.first()
        } else {
            vertical_neighbors.last()
        };
        let Some(&neighbor_index) = picked else {
            return Ok(()); // top or bottom layer; nothing to align with
        };
        let neighbor = self.view.cell(neighbor_index);

        let side_neighbors = neighbor.neighbors(side);
        let picked = if vertical == Direction::Up {
            side_neighbors.first()
        } else {
            side_neighbors.last()
        };
        let side_neighbor_depth = picked.map(|&i| self.view.cell(i).depth);

        if cell.depth >= neighbor.depth
            && side_neighbor_depth.is_none_or(|depth| cell.depth >= depth)
        {
            return Ok(()); // this cell is at least as fine; its endpoint is authoritative
        }

        // Tie between the two upstairs cells goes with the ownership rule:
        // the left cell of the pair stores the shared edge.
        let reference = match (picked, side_neighbor_depth) {
            (Some(&side_index), Some(depth))
                if neighbor.depth < depth
                    || (side == Direction::Left && neighbor.depth == depth) =>
            {
                self.owned_edge(side_index, side.opposite())?
            }
            _ => self.owned_edge(neighbor_index, side)?,
        };
        let destination = if vertical == Direction::Up {
            reference.first()
        } else {
            reference.last()
        };
        edge.adjust_end(vertical, destination, self.params.bend_clearance);
        Ok(())
    }

    /// The stored `side` edge of `index`.
    pub(crate) fn owned_edge(
        &self,
        index: CellIndex,
        side: Direction,
    ) -> NetworkResult<&EdgePolyline> {
        let mapping = if side == Direction::Left {
            &self.left_edges
        } else {
            &self.right_edges
        };
        mapping
            .get(&index)
            .ok_or(EdgeNetworkError::MissingOwnedEdge { cell: index, side })
    }
}
