//! Second pass: Z-discontinuity repair.
//!
//! When two equal-depth cells sit above (or below) a coarser cell, the pair
//! shares a vertical edge whose endpoint lands in the interior of the coarse
//! cell's horizontal surface. Left alone, that endpoint sits at the pair
//! owner's footprint corner instead of on the coarse cell's own crossing
//! line, and the sampled toolpath jumps sideways at the boundary Z. This
//! pass pulls the endpoint onto the crossing line.

use crate::build::NetworkBuilder;
use crate::error::{EdgeNetworkError, NetworkResult};
use crate::polyline::EdgePolyline;
use infill_types::{lift, xy, CellIndex, Direction, Segment2};
use tracing::trace;

impl NetworkBuilder<'_> {
    /// Walk all cells coarsest-first and repair both vertical directions.
    pub(crate) fn resolve_discontinuities(&mut self) -> NetworkResult<()> {
        let view = self.view;
        for layer in view.depth_ordered() {
            for &index in layer {
                self.prevent_z_discontinuity(index, Direction::Up)?;
                self.prevent_z_discontinuity(index, Direction::Down)?;
            }
        }
        Ok(())
    }

    fn prevent_z_discontinuity(
        &mut self,
        index: CellIndex,
        vertical: Direction,
    ) -> NetworkResult<()> {
        let cell = self.view.cell(index);
        let vertical_neighbors = cell.neighbors(vertical);
        if vertical_neighbors.len() < 2 {
            return Ok(()); // a single vertical neighbor introduces no discontinuity
        }

        // The 2D line crossing this cell at the shared horizontal surface:
        // both side edges sampled at the boundary Z.
        let from_edge = self.edge_at(index, Direction::Left, vertical)?;
        let from = if vertical == Direction::Up {
            xy(from_edge.last())
        } else {
            xy(from_edge.first())
        };
        let to_edge = self.edge_at(index, Direction::Right, vertical)?;
        let to = if vertical == Direction::Up {
            xy(to_edge.last())
        } else {
            xy(to_edge.first())
        };

        // Both neighbors of the pair are one level finer, so the left one
        // owns the shared edge between them.
        let leftmost_index = vertical_neighbors[0];
        let rightmost_index = vertical_neighbors[vertical_neighbors.len() - 1];
        let leftmost = self.view.cell(leftmost_index);
        debug_assert_eq!(leftmost.depth, cell.depth + 1);
        debug_assert_eq!(self.view.cell(rightmost_index).depth, leftmost.depth);
        debug_assert!(
            !self.left_edges.contains_key(&rightmost_index),
            "the left cell of an equal-depth pair owns the shared edge",
        );

        let trouble_edge = leftmost.footprint.to_edge();
        let Some(middle) = trouble_edge.line_intersection(&Segment2::new(from, to)) else {
            return Ok(()); // crossing line parallel to the shared edge; nothing to anchor
        };
        let boundary_z = if vertical == Direction::Up {
            leftmost.z_range.min
        } else {
            leftmost.z_range.max
        };
        let destination = lift(middle, boundary_z);

        let clearance = self.params.bend_clearance;
        let edge = self.right_edges.get_mut(&leftmost_index).ok_or(
            EdgeNetworkError::MissingOwnedEdge {
                cell: leftmost_index,
                side: Direction::Right,
            },
        )?;
        edge.adjust_end(vertical.opposite(), destination, clearance);
        trace!(
            cell = index,
            neighbor = leftmost_index,
            direction = %vertical,
            "anchored shared edge onto the crossing line",
        );
        Ok(())
    }

    /// The polyline governing `index`'s `side` edge at its `vertical` end,
    /// wherever the ownership rule stored it.
    fn edge_at(
        &self,
        index: CellIndex,
        side: Direction,
        vertical: Direction,
    ) -> NetworkResult<&EdgePolyline> {
        let cell = self.view.cell(index);
        let side_neighbors = cell.neighbors(side);
        let picked = if vertical == Direction::Up {
            side_neighbors.last()
        } else {
            side_neighbors.first()
        };
        match picked {
            Some(&neighbor_index) => {
                let neighbor = self.view.cell(neighbor_index);
                if neighbor.depth > cell.depth
                    || (side == Direction::Left && neighbor.depth == cell.depth)
                {
                    self.owned_edge(neighbor_index, side.opposite())
                } else {
                    self.owned_edge(index, side)
                }
            }
            None => self.owned_edge(index, side),
        }
    }
}
