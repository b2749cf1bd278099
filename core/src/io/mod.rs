//! Formats for importing/exporting cell patterns.

pub mod coords;

pub use coords::{CoordsError, CoordsResult};
