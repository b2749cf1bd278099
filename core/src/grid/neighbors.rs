//! Moore-neighborhood counting.
//!
//! Every cell is visited once with a shared coordinate buffer, and for each
//! one the root grid walks down the levels. At each level it looks one step
//! to either side along that level's axis and then recurses inward, so that
//! every combination of offsets across all axes is visited exactly once. An
//! offset that leaves the grid along some axis is skipped along with
//! everything below it.

use super::Grid;
use crate::Cell;

const OFFSETS: [isize; 2] = [-1, 1];

impl Grid {
    /// Computes the number of live neighbors of every cell and adds it to the
    /// cell's neighbor count.
    ///
    /// This only reads cell states, so it must run to completion before any
    /// cell is updated.
    pub fn update_all_neighbor_counts(&mut self) {
        let root: &Grid = self;
        let mut coord = vec![0; root.ndim()];
        root.visit_all(&mut coord, root);
    }

    /// Visits every cell in this subgrid, counting its neighbors from `root`.
    ///
    /// Neighbors in other slices of an outer axis are only reachable from the
    /// root, which is why it is passed all the way down.
    fn visit_all(&self, coord: &mut [isize], root: &Grid) {
        match self {
            Grid::Leaf { cells } => {
                for (i, cell) in cells.iter().enumerate() {
                    coord[0] = i as isize;
                    root.accumulate_neighbors(coord, cell);
                }
                coord[0] = 0;
            }
            Grid::Level {
                dim_index,
                children,
            } => {
                for (i, child) in children.iter().enumerate() {
                    coord[*dim_index] = i as isize;
                    child.visit_all(coord, root);
                }
                coord[*dim_index] = 0;
            }
        }
    }

    /// Increments the neighbor count of `cell` once for every live cell in
    /// the Moore neighborhood of `coord` within this grid. Neighbors outside
    /// the grid are ignored; there is no wraparound.
    ///
    /// `coord` is modified while probing neighbors but is restored before
    /// returning.
    ///
    /// # Panics
    ///
    /// This method panics if `coord` has fewer components than this grid has
    /// dimensions.
    pub fn accumulate_neighbors(&self, coord: &mut [isize], cell: &Cell) {
        let axis = self.dim_index();
        let original = coord[axis];
        match self {
            Grid::Leaf { .. } => {
                for &offset in &OFFSETS {
                    coord[axis] = match original.checked_add(offset) {
                        Some(i) => i,
                        None => continue,
                    };
                    if self.cell_at(coord).map_or(false, Cell::is_alive) {
                        cell.increment_neighbor();
                    }
                }
            }
            Grid::Level { .. } => {
                // Neighbors at the same position along this axis.
                if let Some(child) = self.child_at(coord) {
                    child.accumulate_neighbors(coord, cell);
                }
                for &offset in &OFFSETS {
                    coord[axis] = match original.checked_add(offset) {
                        Some(i) => i,
                        None => continue,
                    };
                    let child = match self.child_at(coord) {
                        Some(child) => child,
                        None => continue,
                    };
                    // The neighbor directly along this axis ...
                    if child.cell_at(coord).map_or(false, Cell::is_alive) {
                        cell.increment_neighbor();
                    }
                    // ... and all of its neighbors along lower axes.
                    child.accumulate_neighbors(coord, cell);
                }
            }
        }
        coord[axis] = original;
    }
}
