//! N-dimensional cellular automaton storage and simulation backend for finite
//! grids of one to ten dimensions.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

mod cell;
mod error;
pub mod factory;
pub mod grid;
pub mod io;
pub mod rule;

pub use cell::Cell;
pub use error::{GridError, GridResult};

/// Maximum number of dimensions supported by a grid.
pub const MAX_NDIM: usize = 10;
/// Maximum size of a single dimension accepted from configuration.
pub const MAX_DIMENSION_SIZE: usize = 100;

/// Position of a cell, with one component per axis. Component `i` addresses
/// axis `i`; axis 0 is resolved at the innermost (1D) level of a grid.
///
/// Components are signed so that neighbor probes can step to `-1`, which is
/// simply off-grid.
pub type Coordinate = Vec<isize>;

pub mod prelude {
    //! Commonly used types.

    pub use crate::factory::{build, validate_dimensions};
    pub use crate::grid::Grid;
    pub use crate::io::coords::{format_coords, parse_coords, validate_coords};
    pub use crate::rule::{next_state, Rule, LIFE};
    pub use crate::{Cell, Coordinate, GridError, GridResult, MAX_DIMENSION_SIZE, MAX_NDIM};
}
