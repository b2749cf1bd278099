//! Plain-text list of cell positions, one per line.
//!
//! ```text
//! # A glider in a 2D grid
//! 1, 0
//! 2, 1
//! 0, 2
//! 1, 2
//! 2, 2
//! ```
//!
//! Components are separated by commas and whitespace anywhere in a line is
//! ignored. Blank lines and lines starting with `#` are skipped. Component
//! `i` of each line is the position along axis `i`.

use itertools::Itertools;
use std::fmt;

use crate::{Coordinate, GridError, GridResult};

/// Result type returned by fallible coordinate-list routines.
pub type CoordsResult<T> = Result<T, CoordsError>;

/// Error encountered while parsing a coordinate list.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CoordsError {
    /// Line number (starting at 1) of the offending line.
    pub line: usize,
    /// Component that is not an integer.
    pub component: String,
}
impl fmt::Display for CoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: {:?} is not an integer; check the syntax of the initial grid file",
            self.line, self.component,
        )
    }
}
impl std::error::Error for CoordsError {}

/// Parses a coordinate list.
///
/// This does not check the coordinates against any grid; see
/// `validate_coords()`.
pub fn parse_coords(s: &str) -> CoordsResult<Vec<Coordinate>> {
    let mut ret = vec![];
    for (i, line) in s.lines().enumerate() {
        let stripped: String = line.chars().filter(|ch| !ch.is_whitespace()).collect();
        if stripped.is_empty() || line.starts_with('#') {
            continue;
        }
        let coord = stripped
            .split(',')
            .map(|component| {
                component.parse().map_err(|_| CoordsError {
                    line: i + 1,
                    component: component.to_owned(),
                })
            })
            .collect::<CoordsResult<Coordinate>>()?;
        ret.push(coord);
    }
    Ok(ret)
}

/// Serializes a list of positions, one per line.
pub fn format_coords(coords: &[Coordinate]) -> String {
    coords
        .iter()
        .map(|coord| format!("{}\n", coord.iter().join(", ")))
        .collect()
}

/// Checks that every position has one component per dimension and lies
/// within the given dimension sizes.
pub fn validate_coords(dimension_sizes: &[usize], coords: &[Coordinate]) -> GridResult<()> {
    for coord in coords {
        if coord.len() != dimension_sizes.len() {
            return Err(GridError::InvalidInitialCoordinate {
                coord: coord.clone(),
                reason: format!(
                    "has {} components but the grid has {} dimensions",
                    coord.len(),
                    dimension_sizes.len(),
                ),
            });
        }
        for (axis, (&component, &size)) in coord.iter().zip(dimension_sizes).enumerate() {
            if component < 0 || component as usize >= size {
                return Err(GridError::InvalidInitialCoordinate {
                    coord: coord.clone(),
                    reason: format!(
                        "component {} along axis {} is outside the range 0..{}",
                        component, axis, size,
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords() {
        let s = "# comment\n1,2\n\n  3 , 4 \n   \n-4,22\n";
        assert_eq!(
            Ok(vec![vec![1, 2], vec![3, 4], vec![-4, 22]]),
            parse_coords(s),
        );
        assert_eq!(Ok(vec![]), parse_coords(""));
        // Only a `#` at the very start of the line makes a comment.
        assert!(parse_coords(" # 1,2").is_err());
    }

    #[test]
    fn test_parse_coords_errors() {
        assert_eq!(
            Err(CoordsError {
                line: 2,
                component: "1.2".to_owned(),
            }),
            parse_coords("0,0\n1.2,-1.5\n"),
        );
        assert_eq!(
            Err(CoordsError {
                line: 1,
                component: "hello".to_owned(),
            }),
            parse_coords("hello,1m,w"),
        );
        assert!(parse_coords("1,,2").is_err());
    }

    #[test]
    fn test_format_coords_roundtrip() {
        let coords = vec![vec![0, 5], vec![10, 2]];
        let s = format_coords(&coords);
        assert_eq!("0, 5\n10, 2\n", s);
        assert_eq!(Ok(coords), parse_coords(&s));
    }

    #[test]
    fn test_validate_coords() {
        let sizes = [10_usize, 10];
        assert!(validate_coords(&sizes, &[vec![0, 0], vec![9, 9]]).is_ok());
        assert!(matches!(
            validate_coords(&sizes, &[vec![1, 1, 2]]),
            Err(GridError::InvalidInitialCoordinate { .. }),
        ));
        assert!(validate_coords(&sizes, &[vec![10, 0]]).is_err());
        assert!(validate_coords(&sizes, &[vec![3, -1]]).is_err());
    }
}
