use warehouse_pathfinding::{validator, Cell, Coordinate, Pathfinder, Solution, Warehouse};

/// Generates a warehouse floor, prints it, plans the Start -> Pickup -> Dropoff route and
/// validates it.
///
/// Usage: cargo run --example warehouse -- <rows> <cols> [seed]
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed: Option<Vec<u64>> = args.iter().map(|a| a.parse().ok()).collect();
    let (rows, cols, seed) = match parsed.as_deref() {
        Some(&[rows, cols]) => (rows, cols, 0),
        Some(&[rows, cols, seed]) => (rows, cols, seed),
        _ => {
            eprintln!("Usage: warehouse <rows> <cols> [seed]");
            std::process::exit(1);
        }
    };
    let warehouse = match Warehouse::generate_seeded(rows as usize, cols as usize, 0.25, seed) {
        Ok(warehouse) => warehouse,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    println!("{}", warehouse.grid);

    let waypoints = warehouse.waypoints();
    match Pathfinder::new().solve(&warehouse.grid, &waypoints) {
        Ok(Solution::Found(route)) => {
            let verdict = validator::validate(&warehouse.grid, &waypoints, &route);
            println!("Route of {} steps, validation: {verdict:?}", route.len() - 1);
            for row in 0..warehouse.grid.rows() {
                let line: Vec<String> = (0..warehouse.grid.cols())
                    .map(|col| {
                        let p = Coordinate::new(row, col);
                        match warehouse.grid.get(p) {
                            Some(Cell::Empty) if route.contains(&p) => "*".to_owned(),
                            Some(cell) => cell.to_string(),
                            None => String::new(),
                        }
                    })
                    .collect();
                println!("{}", line.join(" "));
            }
        }
        Ok(Solution::NotFound(unreachable)) => println!("No route: {unreachable}"),
        Err(e) => eprintln!("{e}"),
    }
}
