//! Random warehouse floors for demos, fuzzing and benchmarks.
use crate::error::{InvalidInput, Result};
use crate::warehouse_grid::{Cell, WarehouseGrid};
use crate::Coordinate;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generated floor with its three distinguished cells. The markers are also written
/// into the grid.
#[derive(Clone, Debug)]
pub struct Warehouse {
    pub grid: WarehouseGrid,
    pub start: Coordinate,
    pub pickup: Coordinate,
    pub dropoff: Coordinate,
}

impl Warehouse {
    /// Start, Pickup, Dropoff in visiting order.
    pub fn waypoints(&self) -> [Coordinate; 3] {
        [self.start, self.pickup, self.dropoff]
    }

    /// Reproducible [generate_warehouse] from a seed.
    pub fn generate_seeded(
        rows: usize,
        cols: usize,
        obstacle_prob: f64,
        seed: u64,
    ) -> Result<Warehouse> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_warehouse(rows, cols, obstacle_prob, &mut rng)
    }
}

fn random_empty_cell<R: Rng + ?Sized>(grid: &WarehouseGrid, rng: &mut R) -> Coordinate {
    loop {
        let at = Coordinate::new(rng.gen_range(0..grid.rows()), rng.gen_range(0..grid.cols()));
        if grid.get(at) == Some(Cell::Empty) {
            return at;
        }
    }
}

/// Places Start, Pickup and Dropoff on distinct random cells, then turns every other cell
/// into an obstacle with probability `obstacle_prob`. Connectivity is not guaranteed.
pub fn generate_warehouse<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    obstacle_prob: f64,
    rng: &mut R,
) -> Result<Warehouse> {
    if !(0.0..=1.0).contains(&obstacle_prob) {
        return Err(InvalidInput::ObstacleProbability(obstacle_prob));
    }
    if rows * cols < 3 {
        return Err(InvalidInput::GridTooSmall { rows, cols });
    }
    let mut grid = WarehouseGrid::new(rows, cols, Cell::Empty)?;

    let start = random_empty_cell(&grid, rng);
    grid.set(start, Cell::Start);
    let pickup = random_empty_cell(&grid, rng);
    grid.set(pickup, Cell::Pickup);
    let dropoff = random_empty_cell(&grid, rng);
    grid.set(dropoff, Cell::Dropoff);

    for row in 0..rows {
        for col in 0..cols {
            let at = Coordinate::new(row, col);
            if grid.get(at) == Some(Cell::Empty) && rng.gen_bool(obstacle_prob) {
                grid.set(at, Cell::Obstacle);
            }
        }
    }
    grid.update();
    debug!("Generated {rows}x{cols} warehouse: start {start}, pickup {pickup}, dropoff {dropoff}");
    Ok(Warehouse {
        grid,
        start,
        pickup,
        dropoff,
    })
}
