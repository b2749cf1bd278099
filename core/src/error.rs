use std::fmt;

use crate::Coordinate;

/// Result type returned by fallible grid routines.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered while building or addressing a grid.
///
/// Looking up an off-grid cell is not an error; `Grid::cell_at()` just returns
/// `None`. Only writes and construction can fail.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum GridError {
    /// A grid must have between 1 and 10 dimensions.
    InvalidDimensionCount(usize),
    /// A dimension size is outside the configured range.
    InvalidDimensionSize {
        /// Axis of the offending dimension.
        axis: usize,
        /// Size that was requested.
        size: usize,
    },
    /// Attempted to write a cell outside the grid.
    CoordinateOffGrid(Coordinate),
    /// A coordinate from an initial grid does not fit the configured grid.
    InvalidInitialCoordinate {
        /// Offending coordinate.
        coord: Coordinate,
        /// What is wrong with it.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensionCount(n) => write!(
                f,
                "Grid has {} dimensions but must have between 1 and {}",
                n,
                crate::MAX_NDIM,
            ),
            GridError::InvalidDimensionSize { axis, size } => write!(
                f,
                "Dimension {} has size {} but must be between 1 and {} (inclusive)",
                axis,
                size,
                crate::MAX_DIMENSION_SIZE,
            ),
            GridError::CoordinateOffGrid(coord) => {
                write!(f, "Coordinate {:?} is not on the grid", coord)
            }
            GridError::InvalidInitialCoordinate { coord, reason } => {
                write!(f, "Invalid initial coordinate {:?}: {}", coord, reason)
            }
        }
    }
}

impl std::error::Error for GridError {}
