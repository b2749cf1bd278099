//! Construction of grids from a list of dimension sizes.

use log::trace;

use crate::grid::Grid;
use crate::{Cell, GridError, GridResult, MAX_DIMENSION_SIZE, MAX_NDIM};

/// Builds a grid of dead cells with the given dimension sizes.
///
/// `dimension_sizes[0]` is the size of the innermost axis (the length of
/// each row) and the last entry is the size of the outermost axis. Every
/// size must be nonzero; there is no upper bound here beyond available
/// memory (see `validate_dimensions()` for the configured limits).
pub fn build(dimension_sizes: &[usize]) -> GridResult<Grid> {
    let ndim = dimension_sizes.len();
    if ndim < 1 || ndim > MAX_NDIM {
        return Err(GridError::InvalidDimensionCount(ndim));
    }
    if let Some(axis) = dimension_sizes.iter().position(|&size| size == 0) {
        return Err(GridError::InvalidDimensionSize { axis, size: 0 });
    }
    trace!("Building {}D grid with sizes {:?}", ndim, dimension_sizes);
    Ok(build_level(ndim, dimension_sizes))
}

/// Builds the grid for the innermost `ndim` axes.
///
/// Every level receives the full size list and picks out its own size by
/// axis index, so that nested levels never disagree about which entry is
/// theirs.
fn build_level(ndim: usize, dimension_sizes: &[usize]) -> Grid {
    let dim_index = ndim - 1;
    let size = dimension_sizes[dim_index];
    if dim_index == 0 {
        Grid::Leaf {
            cells: vec![Cell::default(); size],
        }
    } else {
        Grid::Level {
            dim_index,
            children: (0..size)
                .map(|_| build_level(ndim - 1, dimension_sizes))
                .collect(),
        }
    }
}

/// Checks that a list of dimension sizes is acceptable as configuration: 1 to
/// 10 dimensions, each of size 1 to 100.
pub fn validate_dimensions(dimension_sizes: &[usize]) -> GridResult<()> {
    let ndim = dimension_sizes.len();
    if ndim < 1 || ndim > MAX_NDIM {
        return Err(GridError::InvalidDimensionCount(ndim));
    }
    for (axis, &size) in dimension_sizes.iter().enumerate() {
        if size < 1 || size > MAX_DIMENSION_SIZE {
            return Err(GridError::InvalidDimensionSize { axis, size });
        }
    }
    Ok(())
}
