//! The frozen, read-only view over a completed subdivision.

use crate::cell::PrismCell;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable index of a cell within a [`PrismSubdivision`].
pub type CellIndex = usize;

/// A completed space subdivision: the arena of leaf prism cells plus a
/// depth-ordered layering.
///
/// The subdivision is created once, frozen, then observed. Cells reference
/// each other only through indices into this arena, so the structure is
/// moveable and hash-safe.
///
/// # Example
///
/// ```
/// use infill_types::{CellFootprint, Point2, PrismCell, PrismSubdivision, ZRange};
///
/// let footprint = CellFootprint::new(
///     Point2::new(0, 0),
///     Point2::new(1000, 0),
///     Point2::new(1000, 1000),
/// );
/// let coarse = PrismCell::new(footprint, ZRange::new(0, 2000), 0, true);
/// let fine = PrismCell::new(footprint, ZRange::new(2000, 3000), 1, false);
///
/// let subdivision = PrismSubdivision::from_cells(vec![coarse, fine]);
/// assert_eq!(subdivision.max_depth(), 1);
/// assert_eq!(subdivision.depth_ordered(), &[vec![0], vec![1]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrismSubdivision {
    cells: Vec<PrismCell>,
    depth_ordered: Vec<Vec<CellIndex>>,
}

impl PrismSubdivision {
    /// Freeze a set of cells into a read-only view.
    ///
    /// The depth layering is computed here, once; cell indices within a
    /// layer keep their arena order.
    #[must_use]
    pub fn from_cells(cells: Vec<PrismCell>) -> Self {
        let layer_count = cells
            .iter()
            .map(|cell| usize::from(cell.depth) + 1)
            .max()
            .unwrap_or(0);
        let mut depth_ordered = vec![Vec::new(); layer_count];
        for (index, cell) in cells.iter().enumerate() {
            depth_ordered[usize::from(cell.depth)].push(index);
        }
        Self {
            cells,
            depth_ordered,
        }
    }

    /// The cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; use [`get`](Self::get) for a
    /// checked lookup.
    #[inline]
    #[must_use]
    pub fn cell(&self, index: CellIndex) -> &PrismCell {
        &self.cells[index]
    }

    /// The cell at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: CellIndex) -> Option<&PrismCell> {
        self.cells.get(index)
    }

    /// All cells, in arena order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[PrismCell] {
        &self.cells
    }

    /// Number of leaf cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the subdivision holds no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell indices grouped by depth: layer `k` contains every cell of depth
    /// `k`. Iterate in reverse for a finest-first traversal.
    #[inline]
    #[must_use]
    pub fn depth_ordered(&self) -> &[Vec<CellIndex>] {
        &self.depth_ordered
    }

    /// The deepest (finest) subdivision level present; 0 when empty.
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.cells.iter().map(|cell| cell.depth).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellFootprint, ZRange};
    use crate::coords::Point2;

    fn footprint() -> CellFootprint {
        CellFootprint::new(
            Point2::new(0, 0),
            Point2::new(1000, 0),
            Point2::new(1000, 1000),
        )
    }

    fn cell(depth: u8) -> PrismCell {
        PrismCell::new(footprint(), ZRange::new(0, 1000), depth, true)
    }

    #[test]
    fn empty_subdivision() {
        let subdivision = PrismSubdivision::from_cells(Vec::new());
        assert!(subdivision.is_empty());
        assert_eq!(subdivision.depth_ordered(), &[] as &[Vec<CellIndex>]);
        assert_eq!(subdivision.max_depth(), 0);
        assert!(subdivision.get(0).is_none());
    }

    #[test]
    fn depth_layers_keep_arena_order() {
        let subdivision =
            PrismSubdivision::from_cells(vec![cell(1), cell(0), cell(1), cell(2)]);
        assert_eq!(
            subdivision.depth_ordered(),
            &[vec![1], vec![0, 2], vec![3]],
        );
        assert_eq!(subdivision.max_depth(), 2);
    }

    #[test]
    fn skipped_depths_produce_empty_layers() {
        let subdivision = PrismSubdivision::from_cells(vec![cell(0), cell(2)]);
        assert_eq!(subdivision.depth_ordered()[1], Vec::<CellIndex>::new());
    }
}
