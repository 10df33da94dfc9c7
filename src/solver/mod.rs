use crate::search::astar;
use crate::warehouse_grid::WarehouseGrid;
use crate::{Coordinate, UNIT_COST};
use itertools::Itertools;
use log::{debug, info, warn};

pub mod astar;
pub mod dijkstra;

/// A single-leg search strategy over a [WarehouseGrid]. Implementors decide the heuristic
/// and successor generation; the search itself and the component pre-check are shared.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Coordinate, u32)>;

    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> u32;

    fn successors(&self, grid: &WarehouseGrid, node: &Coordinate) -> Self::Successors;

    /// Uses [UNIT_COST] per cardinal step.
    fn cost(&self, p1: &Coordinate, p2: &Coordinate) -> u32 {
        p1.manhattan_distance(p2) as u32 * UNIT_COST
    }

    fn path_cost(&self, path: &[Coordinate]) -> u32 {
        path.iter()
            .tuple_windows()
            .map(|(a, b)| self.cost(a, b))
            .sum()
    }

    /// Computes a shortest path from start to goal, both endpoints included. Returns [None]
    /// if the goal cannot be reached. Endpoints are assumed to be passable cells of the grid.
    fn get_path_single_goal(
        &self,
        grid: &WarehouseGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Option<Vec<Coordinate>> {
        if grid.components_dirty {
            debug!("Components are dirty, searching {start} -> {goal} without pre-check");
        } else if grid.unreachable(&start, &goal) {
            info!("{goal} is not reachable from {start}");
            return None;
        }
        let result = astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        );
        if result.is_none() && !grid.components_dirty {
            warn!("Reachable goal {goal} could not be pathed to from {start}, are the components correct?");
        }
        result.map(|(path, _cost)| path)
    }
}
