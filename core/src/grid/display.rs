use std::fmt;

use super::Grid;

/// Token for a live cell.
const LIVE: &str = " O";
/// Token for a dead cell.
const DEAD: &str = " -";

/// Prints one line per row along axis 0, stacked along axis 1.
///
/// Grids of three or more dimensions are printed as a series of 2D slices,
/// each preceded by a label like `( , , 1, 0 )` giving the position of the
/// slice along the remaining axes (in axis order, with the two printed axes
/// left blank) and followed by a blank line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_slices(f, &mut vec![])
    }
}

impl Grid {
    /// Returns the text representation of the grid.
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// `outer_indices` holds the index along each axis from the outermost
    /// down to axis 2 that has been entered so far.
    fn fmt_slices(
        &self,
        f: &mut fmt::Formatter<'_>,
        outer_indices: &mut Vec<usize>,
    ) -> fmt::Result {
        match self {
            Grid::Leaf { cells } => {
                for cell in cells {
                    f.write_str(if cell.is_alive() { LIVE } else { DEAD })?;
                }
                writeln!(f)
            }
            Grid::Level {
                dim_index,
                children,
            } => {
                let labeled = *dim_index >= 2;
                for (i, child) in children.iter().enumerate() {
                    if labeled {
                        outer_indices.push(i);
                    }
                    if *dim_index == 2 {
                        write!(f, "( , ")?;
                        for index in outer_indices.iter().rev() {
                            write!(f, ", {}", index)?;
                        }
                        writeln!(f, " )")?;
                    }
                    child.fmt_slices(f, outer_indices)?;
                    if *dim_index == 2 {
                        writeln!(f)?;
                    }
                    if labeled {
                        outer_indices.pop();
                    }
                }
                Ok(())
            }
        }
    }
}
