/// A single point in a grid.
///
/// A cell knows nothing about its position; that is managed by the grid that
/// stores it. The neighbor count is scratch space for one generation: it is
/// only meaningful between a neighbor-counting pass and the rule pass that
/// follows, and is reset to zero right after.
///
/// The neighbor count lives in a `std::cell::Cell` so that a counting pass can
/// tally into a cell while the rest of the grid is borrowed immutably for
/// lookups. The counting pass never reads or writes `alive`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    neighbors: std::cell::Cell<u32>,
}

impl Cell {
    /// Creates a cell with the given state and no live neighbors counted.
    pub fn new(alive: bool) -> Self {
        Self {
            alive,
            neighbors: std::cell::Cell::new(0),
        }
    }

    /// Returns whether the cell is live.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
    /// Sets whether the cell is live.
    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Records one more live neighbor.
    #[inline]
    pub fn increment_neighbor(&self) {
        self.neighbors.set(self.neighbors.get().saturating_add(1));
    }
    /// Returns the number of live neighbors counted so far this generation.
    #[inline]
    pub fn neighbor_count(&self) -> u32 {
        self.neighbors.get()
    }
    /// Forgets all counted neighbors.
    #[inline]
    pub fn reset_neighbor_count(&mut self) {
        self.neighbors.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_neighbor_count() {
        let mut cell = Cell::new(false);
        assert_eq!(0, cell.neighbor_count());
        cell.increment_neighbor();
        cell.increment_neighbor();
        assert_eq!(2, cell.neighbor_count());

        for _ in 0..2 {
            cell.increment_neighbor();
        }
        assert_eq!(4, cell.neighbor_count());
        cell.reset_neighbor_count();
        assert_eq!(0, cell.neighbor_count());
    }

    #[test]
    fn test_cell_set_alive() {
        let mut cell = Cell::default();
        assert!(!cell.is_alive());
        cell.set_alive(true);
        assert!(cell.is_alive());
        // Liveness does not touch the neighbor count.
        assert_eq!(0, cell.neighbor_count());
    }

    #[test]
    fn test_cell_neighbor_count_saturates() {
        let cell = Cell::new(true);
        cell.neighbors.set(u32::MAX);
        cell.increment_neighbor();
        assert_eq!(u32::MAX, cell.neighbor_count());
    }
}
