use crate::error::{InvalidInput, Result};
use crate::{Coordinate, N_SMALLVEC_SIZE};
use core::fmt;
use itertools::Itertools;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Marker stored in a grid cell. Only [Cell::Obstacle] blocks movement; the waypoint markers
/// are labels on ordinary floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Obstacle,
    Start,
    Pickup,
    Dropoff,
}

impl Cell {
    pub fn is_passable(self) -> bool {
        self != Cell::Obstacle
    }

    pub fn marker(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Obstacle => '#',
            Cell::Start => 'S',
            Cell::Pickup => 'P',
            Cell::Dropoff => 'D',
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = InvalidInput;

    fn try_from(c: char) -> Result<Cell> {
        match c {
            '.' => Ok(Cell::Empty),
            '#' => Ok(Cell::Obstacle),
            'S' => Ok(Cell::Start),
            'P' => Ok(Cell::Pickup),
            'D' => Ok(Cell::Dropoff),
            other => Err(InvalidInput::UnknownMarker(other)),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// [WarehouseGrid] is a rectangular, row-major table of [Cell]s. In addition to the raw cells
/// it maintains a [UnionFind] of 4-connected passable cells so that a solver can report an
/// unreachable waypoint without flood-filling the grid.
#[derive(Clone, Debug)]
pub struct WarehouseGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl WarehouseGrid {
    /// A `rows` x `cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: Cell) -> Result<WarehouseGrid> {
        if rows == 0 || cols == 0 {
            return Err(InvalidInput::EmptyGrid);
        }
        let mut grid = WarehouseGrid {
            rows,
            cols,
            cells: vec![fill; rows * cols],
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from explicit rows, rejecting empty and ragged tables.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<WarehouseGrid> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(InvalidInput::EmptyGrid);
        }
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != expected) {
            return Err(InvalidInput::RaggedGrid {
                row,
                len: r.len(),
                expected,
            });
        }
        let n_rows = rows.len();
        let mut grid = WarehouseGrid {
            rows: n_rows,
            cols: expected,
            cells: rows.into_iter().flatten().collect(),
            components: UnionFind::new(n_rows * expected),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, at: Coordinate) -> bool {
        at.row < self.rows && at.col < self.cols
    }

    fn get_ix(&self, at: Coordinate) -> usize {
        at.row * self.cols + at.col
    }

    /// The cell at `at`, or [None] outside the grid.
    pub fn get(&self, at: Coordinate) -> Option<Cell> {
        self.in_bounds(at).then(|| self.cells[self.get_ix(at)])
    }

    /// In bounds and not an obstacle.
    pub fn is_passable(&self, at: Coordinate) -> bool {
        self.get(at).is_some_and(Cell::is_passable)
    }

    /// The first cell carrying `marker` in row-major order.
    pub fn find(&self, marker: Cell) -> Option<Coordinate> {
        self.cells
            .iter()
            .position(|&c| c == marker)
            .map(|ix| Coordinate::new(ix / self.cols, ix % self.cols))
    }

    /// Passable cardinal neighbours of `at`, in the order up, down, left, right.
    pub fn passable_neighbours(&self, at: &Coordinate) -> SmallVec<[Coordinate; N_SMALLVEC_SIZE]> {
        at.neumann_neighborhood()
            .into_iter()
            .filter(|p| self.is_passable(*p))
            .collect()
    }

    /// Updates a cell. Joins newly connected components and flags the components as dirty if
    /// they are (potentially) broken apart by a new obstacle.
    ///
    /// Panics if `at` lies outside the grid.
    pub fn set(&mut self, at: Coordinate, cell: Cell) {
        assert!(self.in_bounds(at), "{at} lies outside the {}x{} grid", self.rows, self.cols);
        let ix = self.get_ix(at);
        let was_passable = self.cells[ix].is_passable();
        self.cells[ix] = cell;
        if !cell.is_passable() {
            if was_passable {
                self.components_dirty = true;
            }
        } else {
            for n in self.passable_neighbours(&at) {
                let n_ix = self.get_ix(n);
                self.components.union(ix, n_ix);
            }
        }
    }

    /// Retrieves the component id of a given [Coordinate].
    pub fn get_component(&self, at: &Coordinate) -> usize {
        self.components.find(self.get_ix(*at))
    }

    /// Checks if start and goal are passable and on the same component.
    pub fn reachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        self.is_passable(*start)
            && self.is_passable(*goal)
            && self
                .components
                .equiv(self.get_ix(*start), self.get_ix(*goal))
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Coordinate, goal: &Coordinate) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            debug!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid neighbours to the
    /// same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let at = Coordinate::new(row, col);
                if !self.is_passable(at) {
                    continue;
                }
                let parent_ix = self.get_ix(at);
                for n in [Coordinate::new(row + 1, col), Coordinate::new(row, col + 1)] {
                    if self.is_passable(n) {
                        let ix = self.get_ix(n);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

/// Parses one row per non-blank line. Whitespace between markers is ignored, so the output
/// of [Display](fmt::Display) parses back.
impl FromStr for WarehouseGrid {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<WarehouseGrid> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Cell::try_from)
                    .collect::<Result<Vec<Cell>>>()
            })
            .collect::<Result<Vec<Vec<Cell>>>>()?;
        WarehouseGrid::from_rows(rows)
    }
}

impl fmt::Display for WarehouseGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // . # .
        // . # .
        let grid: WarehouseGrid = ".#.\n.#.".parse().unwrap();
        let p1 = Coordinate::new(0, 0);
        let p2 = Coordinate::new(1, 0);
        let p3 = Coordinate::new(0, 2);
        let wall = Coordinate::new(0, 1);
        assert!(grid.reachable(&p1, &p2));
        assert!(grid.unreachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &wall));
        assert_eq!(grid.get_component(&p1), grid.get_component(&p2));
    }

    /// Asserts that the two corners are connected around a central obstacle.
    #[test]
    fn reachable_around_obstacle() {
        let mut grid = WarehouseGrid::new(3, 3, Cell::Empty).unwrap();
        grid.set(Coordinate::new(1, 1), Cell::Obstacle);
        assert!(grid.components_dirty);
        grid.update();
        assert!(!grid.components_dirty);
        assert!(grid.reachable(&Coordinate::new(0, 0), &Coordinate::new(2, 2)));
    }

    #[test]
    fn diagonal_contact_is_not_connected() {
        //  . #
        //  # .
        let mut grid = WarehouseGrid::new(2, 2, Cell::Obstacle).unwrap();
        grid.set(Coordinate::new(0, 0), Cell::Empty);
        grid.set(Coordinate::new(1, 1), Cell::Empty);
        assert!(!grid.components_dirty);
        assert!(grid.unreachable(&Coordinate::new(0, 0), &Coordinate::new(1, 1)));
        grid.set(Coordinate::new(0, 1), Cell::Start);
        assert!(grid.reachable(&Coordinate::new(0, 0), &Coordinate::new(1, 1)));
    }

    #[test]
    fn rejects_empty_and_ragged() {
        assert_eq!(WarehouseGrid::from_rows(vec![]).unwrap_err(), InvalidInput::EmptyGrid);
        assert_eq!(
            WarehouseGrid::from_rows(vec![vec![]]).unwrap_err(),
            InvalidInput::EmptyGrid
        );
        assert_eq!(
            WarehouseGrid::new(0, 4, Cell::Empty).unwrap_err(),
            InvalidInput::EmptyGrid
        );
        assert_eq!(
            "...\n..\n...".parse::<WarehouseGrid>().unwrap_err(),
            InvalidInput::RaggedGrid {
                row: 1,
                len: 2,
                expected: 3
            }
        );
        assert_eq!(
            "..x".parse::<WarehouseGrid>().unwrap_err(),
            InvalidInput::UnknownMarker('x')
        );
    }

    #[test]
    fn display_parses_back() {
        let text = "S . #\n# P .\n. . D\n";
        let grid: WarehouseGrid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.find(Cell::Pickup), Some(Coordinate::new(1, 1)));
        assert_eq!(grid.find(Cell::Dropoff), Some(Coordinate::new(2, 2)));
        assert_eq!(grid.get(Coordinate::new(3, 0)), None);
        assert!(!grid.is_passable(Coordinate::new(0, 2)));
        assert!(grid.is_passable(Coordinate::new(0, 0)));
    }
}
