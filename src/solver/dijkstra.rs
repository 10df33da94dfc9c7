use crate::{
    solver::GridSolver, warehouse_grid::WarehouseGrid, Coordinate, N_SMALLVEC_SIZE, UNIT_COST,
};
use smallvec::SmallVec;

/// Uninformed search. Slower than [AstarSolver](super::astar::AstarSolver) but useful as an
/// independent baseline for route lengths.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Coordinate, u32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &WarehouseGrid, node: &Coordinate) -> Self::Successors {
        grid.passable_neighbours(node)
            .into_iter()
            .map(|p| (p, UNIT_COST))
            .collect()
    }

    fn heuristic(&self, _: &Coordinate, _: &Coordinate) -> u32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_astar_length() {
        let grid: WarehouseGrid = "....#\n.##.#\n...#.\n#....".parse().unwrap();
        let start = Coordinate::new(0, 0);
        let goal = Coordinate::new(2, 4);
        let dijkstra = DijkstraSolver
            .get_path_single_goal(&grid, start, goal)
            .unwrap();
        let astar = crate::solver::astar::AstarSolver::new()
            .get_path_single_goal(&grid, start, goal)
            .unwrap();
        assert_eq!(dijkstra.len(), astar.len());
        assert_eq!(DijkstraSolver.path_cost(&dijkstra), 8);
    }
}
