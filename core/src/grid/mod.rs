//! Dense N-dimensional grids of cells with fixed bounds.
//!
//! A grid is a recursive structure: a 1D grid is a row of cells, and an
//! N-dimensional grid is a sequence of (N-1)-dimensional grids all with the
//! same shape. Each level of nesting handles one axis, with axis 0 at the
//! innermost level.
//!
//! Coordinates are plain slices of `isize`. Traversals keep a single
//! coordinate buffer, set the component for the current axis while visiting
//! it, and restore it before returning so that the caller and sibling calls
//! see the buffer unchanged.

use log::{debug, log_enabled, trace, Level};
use std::convert::TryFrom;

mod display;
mod neighbors;

use crate::rule::Rule;
use crate::{Cell, Coordinate, GridError, GridResult};

/// Recursive N-dimensional grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grid {
    /// Innermost (1D) level: a row of cells along axis 0.
    Leaf {
        /// Cells in the row.
        cells: Vec<Cell>,
    },
    /// Any other level: a sequence of identically-shaped grids one dimension
    /// lower, along axis `dim_index`.
    Level {
        /// Axis handled by this level.
        dim_index: usize,
        /// Subgrids, one per index along this axis.
        children: Vec<Grid>,
    },
}

impl Grid {
    /// Creates a grid of dead cells with the given dimension sizes. See
    /// `factory::build()`.
    pub fn new(dimension_sizes: &[usize]) -> GridResult<Self> {
        crate::factory::build(dimension_sizes)
    }

    /// Returns the axis handled by this level of the grid.
    #[inline]
    pub fn dim_index(&self) -> usize {
        match self {
            Grid::Leaf { .. } => 0,
            Grid::Level { dim_index, .. } => *dim_index,
        }
    }
    /// Returns the number of dimensions of the grid.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.dim_index() + 1
    }
    /// Returns the size of the grid along its outermost axis.
    #[inline]
    pub fn size(&self) -> usize {
        match self {
            Grid::Leaf { cells } => cells.len(),
            Grid::Level { children, .. } => children.len(),
        }
    }
    /// Returns the size of the grid along every axis, starting with axis 0.
    pub fn dimension_sizes(&self) -> Vec<usize> {
        let mut ret = vec![self.size()];
        let mut grid = self;
        while let Grid::Level { children, .. } = grid {
            match children.first() {
                Some(child) => grid = child,
                None => break,
            }
            ret.push(grid.size());
        }
        ret.reverse();
        ret
    }
    /// Returns the total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.dimension_sizes().iter().product()
    }
    /// Returns the number of live cells in the grid.
    pub fn population(&self) -> usize {
        self.cells().filter(|cell| cell.is_alive()).count()
    }

    /// Returns the index along this level's axis that `coord` refers to, or
    /// `None` if it is off-grid along this axis.
    #[inline]
    fn axis_index(&self, coord: &[isize]) -> Option<usize> {
        let component = *coord.get(self.dim_index())?;
        usize::try_from(component)
            .ok()
            .filter(|&i| i < self.size())
    }
    /// Returns the subgrid that `coord` falls in, or `None` if `coord` is
    /// off-grid along this level's axis or this is the innermost level.
    #[inline]
    fn child_at(&self, coord: &[isize]) -> Option<&Grid> {
        match self {
            Grid::Leaf { .. } => None,
            Grid::Level { children, .. } => children.get(self.axis_index(coord)?),
        }
    }

    /// Returns the cell at the given position, or `None` if any component of
    /// the position is out of bounds. Missing components count as out of
    /// bounds; extra components are ignored.
    pub fn cell_at(&self, coord: &[isize]) -> Option<&Cell> {
        let i = self.axis_index(coord)?;
        match self {
            Grid::Leaf { cells } => cells.get(i),
            Grid::Level { children, .. } => children[i].cell_at(coord),
        }
    }
    /// Returns the cell at the given position mutably, or `None` if any
    /// component of the position is out of bounds.
    pub fn cell_at_mut(&mut self, coord: &[isize]) -> Option<&mut Cell> {
        let i = self.axis_index(coord)?;
        match self {
            Grid::Leaf { cells } => cells.get_mut(i),
            Grid::Level { children, .. } => children[i].cell_at_mut(coord),
        }
    }
    /// Sets whether the cell at the given position is live.
    ///
    /// Returns `GridError::CoordinateOffGrid` and leaves the grid untouched if
    /// the position is out of bounds.
    pub fn set_cell(&mut self, coord: &[isize], alive: bool) -> GridResult<()> {
        self.cell_at_mut(coord)
            .ok_or_else(|| GridError::CoordinateOffGrid(coord.to_vec()))?
            .set_alive(alive);
        Ok(())
    }
    /// Sets the state of every cell in a list of positions. Stops at the first
    /// off-grid position; cells before it have already been set.
    pub fn set_cell_values(&mut self, coords: &[Coordinate], alive: bool) -> GridResult<()> {
        for coord in coords {
            self.set_cell(coord, alive)?;
        }
        Ok(())
    }

    /// Returns an iterator over every cell in the grid, with axis 0 varying
    /// fastest.
    pub fn cells<'a>(&'a self) -> Box<dyn 'a + Iterator<Item = &'a Cell>> {
        match self {
            Grid::Leaf { cells } => Box::new(cells.iter()),
            Grid::Level { children, .. } => Box::new(children.iter().flat_map(Grid::cells)),
        }
    }
    /// Returns an iterator over every cell in the grid mutably, with axis 0
    /// varying fastest.
    pub fn cells_mut<'a>(&'a mut self) -> Box<dyn 'a + Iterator<Item = &'a mut Cell>> {
        match self {
            Grid::Leaf { cells } => Box::new(cells.iter_mut()),
            Grid::Level { children, .. } => {
                Box::new(children.iter_mut().flat_map(Grid::cells_mut))
            }
        }
    }
    /// Returns the positions of all live cells, with axis 0 varying fastest.
    pub fn live_coords(&self) -> Vec<Coordinate> {
        let mut ret = vec![];
        let mut coord = vec![0; self.ndim()];
        self.collect_live_coords(&mut coord, &mut ret);
        ret
    }
    fn collect_live_coords(&self, coord: &mut [isize], ret: &mut Vec<Coordinate>) {
        match self {
            Grid::Leaf { cells } => {
                for (i, cell) in cells.iter().enumerate() {
                    if cell.is_alive() {
                        coord[0] = i as isize;
                        ret.push(coord.to_vec());
                    }
                }
                coord[0] = 0;
            }
            Grid::Level {
                dim_index,
                children,
            } => {
                for (i, child) in children.iter().enumerate() {
                    coord[*dim_index] = i as isize;
                    child.collect_live_coords(coord, ret);
                }
                coord[*dim_index] = 0;
            }
        }
    }

    /// Applies a rule to every cell using its current state and neighbor
    /// count. Neighbor counts must already be up to date for every cell.
    pub fn update_all_cell_values(&mut self, rule: &Rule) {
        for cell in self.cells_mut() {
            let alive = rule.next_state(cell.is_alive(), cell.neighbor_count());
            cell.set_alive(alive);
        }
    }
    /// Resets the neighbor count of every cell to zero.
    pub fn reset_all_neighbor_counts(&mut self) {
        for cell in self.cells_mut() {
            cell.reset_neighbor_count();
        }
    }

    /// Advances the grid by one generation: count every cell's neighbors,
    /// then apply the rule to every cell, then reset the counts.
    ///
    /// All neighbor counts are computed before any cell changes, so every
    /// cell transitions simultaneously.
    pub fn advance_generation(&mut self, rule: &Rule) {
        trace!("Counting neighbors");
        self.update_all_neighbor_counts();
        trace!("Applying rule {}", rule);
        self.update_all_cell_values(rule);
        trace!("Resetting neighbor counts");
        self.reset_all_neighbor_counts();
    }
    /// Advances the grid by the given number of generations.
    ///
    /// If `show_intermediate` is set, `render` is called with the generation
    /// number and the grid after every generation except the last one.
    pub fn advance_generations(
        &mut self,
        generations: u32,
        rule: &Rule,
        show_intermediate: bool,
        mut render: impl FnMut(u32, &Grid),
    ) {
        for generation in 1..=generations {
            self.advance_generation(rule);
            if log_enabled!(Level::Debug) {
                debug!(
                    "Generation {}: population {}",
                    generation,
                    self.population(),
                );
            }
            if show_intermediate && generation < generations {
                render(generation, self);
            }
        }
    }
}
