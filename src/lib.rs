//! # warehouse_pathfinding
//!
//! Shortest-route planning on a warehouse floor. A [WarehouseGrid] holds passable floor,
//! obstacles and the Start, Pickup and Dropoff markers; a [Pathfinder] visits an ordered
//! list of waypoints by running [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! with a Manhattan heuristic for every leg and concatenating the legs. Movement is
//! restricted to the four cardinal directions at unit cost.
//!
//! Routes can be certified independently of how they were produced using
//! [validator::check] or, with a reason on failure, [validator::validate].
//!
//! ```
//! use warehouse_pathfinding::{Coordinate, Pathfinder, WarehouseGrid};
//!
//! let grid: WarehouseGrid = "S.P\n.#.\nD..".parse().unwrap();
//! let waypoints = [Coordinate::new(0, 0), Coordinate::new(0, 2), Coordinate::new(2, 0)];
//! let route = Pathfinder::new()
//!     .solve(&grid, &waypoints)
//!     .unwrap()
//!     .into_route()
//!     .unwrap();
//! assert_eq!(route.len(), 7);
//! assert!(warehouse_pathfinding::validator::check(&grid, &waypoints, &route));
//! ```
mod search;
pub mod error;
pub mod generator;
pub mod pathfinder;
pub mod solver;
pub mod validator;
pub mod warehouse_grid;

pub use error::{InvalidInput, Result};
pub use generator::{generate_warehouse, Warehouse};
pub use pathfinder::{Pathfinder, Solution, Unreachable};
pub use warehouse_grid::{Cell, WarehouseGrid};

use core::fmt;
use smallvec::SmallVec;

/// Cost of a single cardinal step.
pub const UNIT_COST: u32 = 1;
/// Inline capacity of neighbour lists; a cell never has more than four cardinal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;

/// An ordered sequence of coordinates, each a single cardinal step from the last when valid.
pub type Route = Vec<Coordinate>;

/// A (row, column) position. Carries no bounds of its own: whether it lies on a grid is
/// decided by [WarehouseGrid::in_bounds].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Coordinate {
        Coordinate { row, col }
    }

    pub fn manhattan_distance(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True iff the two coordinates share an edge.
    pub fn is_adjacent(&self, other: &Coordinate) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The von Neumann neighbourhood in the fixed order up, down, left, right. Neighbours that
    /// would need a negative index are left out; the upper bounds are the grid's business.
    pub fn neumann_neighborhood(&self) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        let mut neighbours = SmallVec::new();
        if let Some(row) = self.row.checked_sub(1) {
            neighbours.push(Coordinate::new(row, self.col));
        }
        neighbours.push(Coordinate::new(self.row + 1, self.col));
        if let Some(col) = self.col.checked_sub(1) {
            neighbours.push(Coordinate::new(self.row, col));
        }
        neighbours.push(Coordinate::new(self.row, self.col + 1));
        neighbours
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbourhood_order_and_corner() {
        let centre = Coordinate::new(1, 1);
        assert_eq!(
            centre.neumann_neighborhood().as_slice(),
            &[
                Coordinate::new(0, 1),
                Coordinate::new(2, 1),
                Coordinate::new(1, 0),
                Coordinate::new(1, 2)
            ]
        );
        let corner = Coordinate::new(0, 0);
        assert_eq!(
            corner.neumann_neighborhood().as_slice(),
            &[Coordinate::new(1, 0), Coordinate::new(0, 1)]
        );
    }

    #[test]
    fn adjacency() {
        let p = Coordinate::new(3, 3);
        assert!(p.is_adjacent(&Coordinate::new(3, 4)));
        assert!(p.is_adjacent(&Coordinate::new(2, 3)));
        assert!(!p.is_adjacent(&p));
        assert!(!p.is_adjacent(&Coordinate::new(4, 4)));
        assert!(!p.is_adjacent(&Coordinate::new(3, 5)));
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Coordinate::new(0, 5) < Coordinate::new(1, 0));
        assert!(Coordinate::new(1, 0) < Coordinate::new(1, 1));
        assert_eq!(Coordinate::from((2, 7)).to_string(), "(2, 7)");
    }
}
