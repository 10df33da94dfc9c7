//! Error types for malformed engine input.

use crate::Coordinate;
use thiserror::Error;

/// Precondition violations reported by grid construction, the generator and
/// [Pathfinder::solve](crate::pathfinder::Pathfinder::solve). An unreachable waypoint is not
/// an error, see [Solution::NotFound](crate::pathfinder::Solution::NotFound).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unknown cell marker {0:?}")]
    UnknownMarker(char),

    #[error("at least 2 waypoints are required, got {0}")]
    TooFewWaypoints(usize),

    #[error("waypoint {index} at {at} lies outside the {rows}x{cols} grid")]
    WaypointOutOfBounds {
        index: usize,
        at: Coordinate,
        rows: usize,
        cols: usize,
    },

    #[error("waypoint {index} at {at} is on an obstacle")]
    WaypointOnObstacle { index: usize, at: Coordinate },

    #[error("waypoint {index} at {at} coincides with waypoint {other}")]
    DegenerateWaypoints {
        index: usize,
        other: usize,
        at: Coordinate,
    },

    #[error("obstacle probability {0} is outside [0, 1]")]
    ObstacleProbability(f64),

    #[error("a {rows}x{cols} grid cannot hold start, pickup and dropoff")]
    GridTooSmall { rows: usize, cols: usize },
}

pub type Result<T> = std::result::Result<T, InvalidInput>;
