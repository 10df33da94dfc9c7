use crate::error::{InvalidInput, Result};
use crate::solver::{astar::AstarSolver, GridSolver};
use crate::warehouse_grid::WarehouseGrid;
use crate::{Coordinate, Route};
use core::fmt;
use itertools::Itertools;
use log::{debug, info};

/// The leg for which no route exists. `leg` is the zero-based index of the waypoint pair
/// `(from, to)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unreachable {
    pub leg: usize,
    pub from: Coordinate,
    pub to: Coordinate,
}

impl fmt::Display for Unreachable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "leg {}: {} cannot reach {}", self.leg, self.from, self.to)
    }
}

/// Outcome of a well-formed query. Grids are not guaranteed to be connected, so
/// [Solution::NotFound] is an ordinary answer rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    Found(Route),
    NotFound(Unreachable),
}

impl Solution {
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found(_))
    }

    pub fn route(&self) -> Option<&Route> {
        match self {
            Solution::Found(route) => Some(route),
            Solution::NotFound(_) => None,
        }
    }

    pub fn into_route(self) -> Option<Route> {
        match self {
            Solution::Found(route) => Some(route),
            Solution::NotFound(_) => None,
        }
    }
}

/// Plans shortest routes through an ordered list of waypoints by solving one leg at a time
/// with the configured [GridSolver] and joining the legs. Holds no search state, so a single
/// [Pathfinder] can serve any number of grids and threads.
#[derive(Clone, Debug, Default)]
pub struct Pathfinder<S: GridSolver = AstarSolver> {
    pub solver: S,
}

impl Pathfinder<AstarSolver> {
    pub fn new() -> Pathfinder<AstarSolver> {
        Pathfinder {
            solver: AstarSolver::new(),
        }
    }
}

impl<S: GridSolver> Pathfinder<S> {
    pub fn with_solver(solver: S) -> Pathfinder<S> {
        Pathfinder { solver }
    }

    /// Computes the shortest route starting at `waypoints[0]`, ending at the last waypoint
    /// and passing every intermediate waypoint in order.
    ///
    /// Fails with [InvalidInput] if fewer than two waypoints are given, a waypoint lies
    /// outside the grid or on an obstacle, two consecutive waypoints coincide, or an
    /// intermediate waypoint coincides with the first or last one. Stops at the first leg
    /// without a route and reports it in [Solution::NotFound].
    pub fn solve(&self, grid: &WarehouseGrid, waypoints: &[Coordinate]) -> Result<Solution> {
        check_waypoints(grid, waypoints)?;
        let mut route: Route = Vec::new();
        for (leg, (&from, &to)) in waypoints.iter().tuple_windows().enumerate() {
            debug!("Solving leg {leg}: {from} -> {to}");
            let Some(path) = self.solver.get_path_single_goal(grid, from, to) else {
                let unreachable = Unreachable { leg, from, to };
                info!("No route found, {unreachable}");
                return Ok(Solution::NotFound(unreachable));
            };
            // Every leg starts where the previous one ended.
            let skip = usize::from(!route.is_empty());
            route.extend(path.into_iter().skip(skip));
        }
        Ok(Solution::Found(route))
    }

    /// Single-leg convenience around [solve](Self::solve).
    pub fn solve_leg(
        &self,
        grid: &WarehouseGrid,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Solution> {
        self.solve(grid, &[start, goal])
    }
}

fn check_waypoints(grid: &WarehouseGrid, waypoints: &[Coordinate]) -> Result<()> {
    if waypoints.len() < 2 {
        return Err(InvalidInput::TooFewWaypoints(waypoints.len()));
    }
    for (index, &at) in waypoints.iter().enumerate() {
        match grid.get(at) {
            None => {
                return Err(InvalidInput::WaypointOutOfBounds {
                    index,
                    at,
                    rows: grid.rows(),
                    cols: grid.cols(),
                })
            }
            Some(cell) if !cell.is_passable() => {
                return Err(InvalidInput::WaypointOnObstacle { index, at })
            }
            Some(_) => {}
        }
    }
    let last = waypoints.len() - 1;
    for index in 1..waypoints.len() {
        let at = waypoints[index];
        let other = if at == waypoints[index - 1] {
            Some(index - 1)
        } else if index < last && at == waypoints[0] {
            Some(0)
        } else if index < last && at == waypoints[last] {
            Some(last)
        } else {
            None
        };
        if let Some(other) = other {
            return Err(InvalidInput::DegenerateWaypoints { index, other, at });
        }
    }
    Ok(())
}
