use crate::{
    solver::GridSolver, warehouse_grid::WarehouseGrid, Coordinate, N_SMALLVEC_SIZE, UNIT_COST,
};
use smallvec::SmallVec;

/// A* with the Manhattan distance as heuristic, which is admissible and consistent for
/// unit-cost 4-directional movement.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Weight applied to the heuristic. Any value above 1.0 speeds up the search at the
    /// expense of shortest routes.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Coordinate, u32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &WarehouseGrid, node: &Coordinate) -> Self::Successors {
        grid.passable_neighbours(node)
            .into_iter()
            .map(|p| (p, UNIT_COST))
            .collect()
    }

    /// Just the cost times a heuristic factor.
    fn heuristic(&self, p1: &Coordinate, p2: &Coordinate) -> u32 {
        (self.cost(p1, p2) as f32 * self.heuristic_factor) as u32
    }
}
