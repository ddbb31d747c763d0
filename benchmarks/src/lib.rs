//! Shared room builders for the sweeper benchmark suites.

use serde_json::json;

use sweeper_harness::config::RunConfig;
use sweeper_kernel::carrier::coord::Coord;
use sweeper_kernel::carrier::grid::GridSnapshot;

/// Square room with every fourth column walled except for one gap that
/// alternates between the top and bottom rows, so paths snake across the
/// room. Dirt sits in the far corner.
///
/// # Panics
///
/// Panics if `side < 2`. Benchmark setup failures are fatal.
#[must_use]
pub fn serpentine(side: i32) -> GridSnapshot {
    GridSnapshot::new(side, side)
        .and_then(|g| g.with_walls(serpentine_walls(side)))
        .and_then(|g| g.with_dirt([Coord::new(side - 1, side - 1)]))
        .expect("serpentine layout is valid")
}

fn serpentine_walls(side: i32) -> Vec<Coord> {
    let mut walls = Vec::new();
    for (n, x) in (2..side - 1).step_by(4).enumerate() {
        let gap = if n % 2 == 0 { side - 1 } else { 0 };
        walls.extend((0..side).filter(|&y| y != gap).map(|y| Coord::new(x, y)));
    }
    walls
}

/// Open square room with dirt on a diagonal stride, for session runs.
///
/// # Panics
///
/// Panics if `side < 2`.
#[must_use]
pub fn scattered(side: i32) -> GridSnapshot {
    let dirt = (1..side).step_by(3).map(|i| Coord::new(i, side - 1 - i));
    GridSnapshot::new(side, side)
        .and_then(|g| g.with_dirt(dirt))
        .expect("scattered layout is valid")
}

/// Run configuration over [`scattered`] with the agent at the origin.
///
/// # Panics
///
/// Panics if the configuration does not load.
#[must_use]
pub fn scattered_config(strategy: &str, cost_function: &str, side: i32) -> RunConfig {
    let grid = scattered(side);
    let dirt: Vec<_> = grid.dirt().map(|c| json!([c.x, c.y])).collect();
    let text = json!({
        "strategy": strategy,
        "cost_function": cost_function,
        "room": { "width": side, "height": side, "agent": [0, 0], "dirt": dirt },
    })
    .to_string();
    RunConfig::from_json_str(&text).expect("benchmark configuration loads")
}
