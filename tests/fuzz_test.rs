/// Fuzzes the route planner on many random warehouses: every route found must pass the
/// validator and be as short as a breadth-first baseline, and every unreachable leg must
/// really be unreachable.
use rand::prelude::*;
use std::collections::VecDeque;
use warehouse_pathfinding::{
    generate_warehouse,
    solver::dijkstra::DijkstraSolver,
    validator, Coordinate, Pathfinder, Solution, Unreachable, Warehouse, WarehouseGrid,
};

/// Number of steps on a shortest 4-connected path, found by breadth-first search.
fn bfs_distance(grid: &WarehouseGrid, start: Coordinate, goal: Coordinate) -> Option<usize> {
    let mut dist = vec![vec![usize::MAX; grid.cols()]; grid.rows()];
    let mut queue = VecDeque::from([start]);
    dist[start.row][start.col] = 0;
    while let Some(p) = queue.pop_front() {
        if p == goal {
            return Some(dist[p.row][p.col]);
        }
        for n in grid.passable_neighbours(&p) {
            if dist[n.row][n.col] == usize::MAX {
                dist[n.row][n.col] = dist[p.row][p.col] + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn visualize(warehouse: &Warehouse, solution: &Solution) {
    print!("{}", warehouse.grid);
    println!("{solution:?}");
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let pathfinder = Pathfinder::new();
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..=12);
        let cols = rng.gen_range(3..=12);
        let density = rng.gen_range(0.0..0.45);
        let warehouse = generate_warehouse(rows, cols, density, &mut rng).unwrap();
        let waypoints = warehouse.waypoints();
        let solution = pathfinder.solve(&warehouse.grid, &waypoints).unwrap();
        let legs: Vec<Option<usize>> = waypoints
            .windows(2)
            .map(|w| bfs_distance(&warehouse.grid, w[0], w[1]))
            .collect();

        match &solution {
            Solution::Found(route) => {
                let verdict = validator::validate(&warehouse.grid, &waypoints, route);
                let expected: usize = legs.iter().map(|d| d.unwrap()).sum();
                if verdict.is_err() || route.len() != expected + 1 {
                    visualize(&warehouse, &solution);
                }
                assert_eq!(verdict, Ok(()));
                assert_eq!(route.len(), expected + 1);
            }
            Solution::NotFound(Unreachable { leg, from, to }) => {
                if legs[*leg].is_some() {
                    visualize(&warehouse, &solution);
                }
                assert!(legs[..*leg].iter().all(Option::is_some));
                assert_eq!(legs[*leg], None);
                assert_eq!((*from, *to), (waypoints[*leg], waypoints[*leg + 1]));
            }
        }
    }
}

#[test]
fn fuzz_against_dijkstra() {
    const N_GRIDS: usize = 500;
    let astar = Pathfinder::new();
    let dijkstra = Pathfinder::with_solver(DijkstraSolver);
    for seed in 0..N_GRIDS as u64 {
        let warehouse = Warehouse::generate_seeded(10, 10, 0.3, seed).unwrap();
        let waypoints = warehouse.waypoints();
        let a = astar.solve(&warehouse.grid, &waypoints).unwrap();
        let d = dijkstra.solve(&warehouse.grid, &waypoints).unwrap();
        assert_eq!(a.route().map(Vec::len), d.route().map(Vec::len));
        if let Some(route) = d.route() {
            assert!(validator::check(&warehouse.grid, &waypoints, route));
        }
    }
}

#[test]
fn deterministic() {
    let pathfinder = Pathfinder::new();
    for seed in 0..200 {
        let warehouse = Warehouse::generate_seeded(12, 12, 0.2, seed).unwrap();
        let waypoints = warehouse.waypoints();
        let first = pathfinder.solve(&warehouse.grid, &waypoints).unwrap();
        let second = pathfinder.solve(&warehouse.grid.clone(), &waypoints).unwrap();
        assert_eq!(first, second);
    }
}
