//! Certifies candidate routes without reference to how they were produced.
//!
//! The checks run in a fixed order and stop at the first failure:
//! 1. the route is non-empty (and at least two waypoints were given),
//! 2. it starts at the first and ends at the last waypoint,
//! 3. every intermediate waypoint occurs, each strictly after the previous one,
//! 4. no intermediate waypoint coincides with the first or last waypoint,
//! 5. the route has at least one entry per waypoint,
//! 6. every entry lies on the grid,
//! 7. no entry is an obstacle,
//! 8. consecutive entries are a single cardinal step apart.
//!
//! Nothing here panics on malformed candidates; a bad route is the thing under test.
use crate::warehouse_grid::WarehouseGrid;
use crate::Coordinate;
use itertools::Itertools;
use thiserror::Error;

/// The first rule a candidate route breaks. `position` always indexes into the route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteViolation {
    #[error("route is empty")]
    EmptyRoute,

    #[error("at least 2 waypoints are required, got {0}")]
    TooFewWaypoints(usize),

    #[error("route starts at {found} instead of {expected}")]
    WrongStart {
        expected: Coordinate,
        found: Coordinate,
    },

    #[error("route ends at {found} instead of {expected}")]
    WrongEnd {
        expected: Coordinate,
        found: Coordinate,
    },

    #[error("waypoint {index} at {at} is not visited in order")]
    MissingWaypoint { index: usize, at: Coordinate },

    #[error("waypoint {index} at {at} coincides with the first or last waypoint")]
    DegenerateWaypoints { index: usize, at: Coordinate },

    #[error("route has {len} entries but must visit {required} waypoints")]
    TooShort { len: usize, required: usize },

    #[error("entry {position} at {at} lies outside the grid")]
    OutOfBounds { position: usize, at: Coordinate },

    #[error("entry {position} at {at} is an obstacle")]
    OnObstacle { position: usize, at: Coordinate },

    #[error("step {position} from {from} to {to} is not a single cardinal move")]
    NotAdjacent {
        position: usize,
        from: Coordinate,
        to: Coordinate,
    },
}

/// Runs every check and reports the first violation.
pub fn validate(
    grid: &WarehouseGrid,
    waypoints: &[Coordinate],
    route: &[Coordinate],
) -> Result<(), RouteViolation> {
    let (Some(&first), Some(&last)) = (route.first(), route.last()) else {
        return Err(RouteViolation::EmptyRoute);
    };
    let (Some(&start), Some(&goal)) = (waypoints.first(), waypoints.last()) else {
        return Err(RouteViolation::TooFewWaypoints(waypoints.len()));
    };
    if waypoints.len() < 2 {
        return Err(RouteViolation::TooFewWaypoints(waypoints.len()));
    }

    if first != start {
        return Err(RouteViolation::WrongStart {
            expected: start,
            found: first,
        });
    }
    if last != goal {
        return Err(RouteViolation::WrongEnd {
            expected: goal,
            found: last,
        });
    }

    let intermediates = &waypoints[1..waypoints.len() - 1];
    let mut matched = 0;
    for (i, &at) in intermediates.iter().enumerate() {
        match route[matched + 1..].iter().position(|&p| p == at) {
            Some(offset) => matched += offset + 1,
            None => return Err(RouteViolation::MissingWaypoint { index: i + 1, at }),
        }
    }

    if let Some((i, &at)) = intermediates
        .iter()
        .find_position(|&&w| w == start || w == goal)
    {
        return Err(RouteViolation::DegenerateWaypoints { index: i + 1, at });
    }

    if route.len() < waypoints.len() {
        return Err(RouteViolation::TooShort {
            len: route.len(),
            required: waypoints.len(),
        });
    }

    if let Some((position, &at)) = route.iter().find_position(|&&p| !grid.in_bounds(p)) {
        return Err(RouteViolation::OutOfBounds { position, at });
    }
    if let Some((position, &at)) = route.iter().find_position(|&&p| !grid.is_passable(p)) {
        return Err(RouteViolation::OnObstacle { position, at });
    }
    if let Some((position, (&from, &to))) = route
        .iter()
        .tuple_windows()
        .find_position(|(a, b)| !a.is_adjacent(b))
    {
        return Err(RouteViolation::NotAdjacent {
            position: position + 1,
            from,
            to,
        });
    }
    Ok(())
}

/// True iff `route` passes [validate].
pub fn check(grid: &WarehouseGrid, waypoints: &[Coordinate], route: &[Coordinate]) -> bool {
    validate(grid, waypoints, route).is_ok()
}

/// [check] for the Start, Pickup, Dropoff delivery.
pub fn check_delivery(
    grid: &WarehouseGrid,
    start: Coordinate,
    pickup: Coordinate,
    dropoff: Coordinate,
    route: &[Coordinate],
) -> bool {
    check(grid, &[start, pickup, dropoff], route)
}
