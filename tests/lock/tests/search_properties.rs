//! Lock tests for the search engine's observable properties, exercised
//! through the public API on the vacuum world.

use rand::rngs::StdRng;
use rand::SeedableRng;

use lock_tests::rooms::{
    corridor, office, open3, reachable_count, ring, room, CORRIDOR_START, RING_START,
};
use sweeper_kernel::carrier::coord::Coord;
use sweeper_kernel::carrier::direction::Direction::{self, Down, Left, Right, Up};
use sweeper_kernel::carrier::grid::GridSnapshot;
use sweeper_harness::worlds::vacuum::VacuumProblem;
use sweeper_search::cost::CostFunction;
use sweeper_search::heuristic::HeuristicKind;
use sweeper_search::node::{NodeArena, NodeId};
use sweeper_search::policy::Strategy;
use sweeper_search::problem::Problem;
use sweeper_search::search::{
    astar_search, breadth_first_graph_search, reflex_step, run_strategy, uniform_cost_search,
};

const PATH_STRATEGIES: [Strategy; 5] = [
    Strategy::BreadthFirst,
    Strategy::DepthFirst,
    Strategy::UniformCost,
    Strategy::Greedy,
    Strategy::AStar,
];

fn coords(cells: &[(i32, i32)]) -> Vec<Coord> {
    cells.iter().copied().map(Coord::from).collect()
}

fn shared_maps() -> Vec<(&'static str, GridSnapshot, Coord)> {
    vec![
        ("ring", ring(), RING_START),
        ("corridor", corridor(), CORRIDOR_START),
        ("office", office(), Coord::new(0, 0)),
        ("open3", open3(&[(2, 2)]), Coord::new(0, 0)),
    ]
}

#[test]
fn bfs_step_count_is_minimal() {
    for (name, grid, start) in shared_maps() {
        let problem = VacuumProblem::new(&grid, start);
        let bfs = breadth_first_graph_search(&problem).unwrap();
        let ucs = uniform_cost_search(&problem).unwrap();
        let bfs_steps = bfs.solution().unwrap().len();
        let fewest = ucs.path_cost().unwrap();
        assert!(
            (f64::from(u32::try_from(bfs_steps).unwrap()) - fewest).abs() < 1e-9,
            "{name}: BFS took {bfs_steps} steps, minimum is {fewest}"
        );
    }
}

#[test]
fn ucs_picks_fewer_turns_over_fewer_steps() {
    let grid = ring();
    let problem =
        VacuumProblem::new(&grid, RING_START).with_cost_function(CostFunction::StepTurn);

    let bfs = breadth_first_graph_search(&problem).unwrap();
    let ucs = uniform_cost_search(&problem).unwrap();

    assert_eq!(bfs.solution().unwrap().len(), 6);
    assert_eq!(bfs.path_cost(), Some(21.0));
    assert_eq!(
        ucs.solution(),
        Some(vec![Left, Up, Up, Up, Up, Right, Right, Right, Right, Down])
    );
    assert_eq!(ucs.path_cost(), Some(19.0));
}

#[test]
fn astar_matches_ucs_on_every_shared_map() {
    for (name, grid, start) in shared_maps() {
        for cost in [CostFunction::Step, CostFunction::StayUp] {
            let problem = VacuumProblem::new(&grid, start).with_cost_function(cost);
            let ucs = uniform_cost_search(&problem).unwrap();
            let astar = astar_search(&problem).unwrap();
            let (u, a) = (ucs.path_cost().unwrap(), astar.path_cost().unwrap());
            assert!((u - a).abs() < 1e-9, "{name}/{cost}: UCS {u}, A* {a}");
            assert!(
                astar.explored_count() <= ucs.explored_count(),
                "{name}/{cost}: A* explored more than UCS"
            );
        }
    }
}

#[test]
fn astar_and_ucs_return_the_same_path_where_it_is_unique() {
    for (grid, start) in [(ring(), RING_START), (corridor(), CORRIDOR_START)] {
        let problem = VacuumProblem::new(&grid, start).with_cost_function(CostFunction::StepTurn);
        assert_eq!(
            astar_search(&problem).unwrap().solution(),
            uniform_cost_search(&problem).unwrap().solution()
        );
    }
    let grid = corridor();
    let problem = VacuumProblem::new(&grid, CORRIDOR_START);
    assert_eq!(
        astar_search(&problem).unwrap().solution(),
        Some(vec![Up, Up, Right, Right, Down, Down, Right, Right])
    );
}

#[test]
fn expand_is_idempotent() {
    let grid = office();
    let problem = VacuumProblem::new(&grid, Coord::new(2, 2))
        .with_cost_function(CostFunction::StepTurn);
    let mut nodes = NodeArena::new();
    let root = nodes.root(*problem.initial());
    let first = nodes.expand(&problem, root).unwrap();
    let child = first[0];
    let a = nodes.expand(&problem, child).unwrap();
    let b = nodes.expand(&problem, child).unwrap();
    let summary = |ids: &[NodeId]| -> Vec<(Coord, Option<Direction>, u64)> {
        ids.iter()
            .map(|&id| {
                let n = &nodes[id];
                (n.state, n.action, n.path_cost.to_bits())
            })
            .collect()
    };
    assert_eq!(summary(&a), summary(&b));
}

#[test]
fn solution_replays_to_goal_state() {
    for (name, grid, start) in shared_maps() {
        let problem = VacuumProblem::new(&grid, start).with_cost_function(CostFunction::StepTurn);
        for strategy in PATH_STRATEGIES {
            let outcome = run_strategy(&problem, strategy, &mut StdRng::seed_from_u64(0)).unwrap();
            let goal = outcome.goal_node().unwrap();
            let solution = outcome.solution().unwrap();
            assert_eq!(solution.len(), goal.depth as usize, "{name}/{strategy}");
            assert_eq!(outcome.nodes.path(goal.id).len(), solution.len() + 1);

            let mut state = *problem.initial();
            for action in &solution {
                state = problem.result(&state, action).unwrap();
            }
            assert_eq!(state, goal.state, "{name}/{strategy}");
            assert!(problem.goal_test(&state));
        }
    }
}

#[test]
fn explored_never_exceeds_reachable_states() {
    let sealed = room(4, 4, &[(2, 3), (2, 2), (3, 2)], &[(3, 3)]);
    let mut maps = shared_maps();
    maps.push(("sealed", sealed, Coord::new(0, 0)));
    for (name, grid, start) in maps {
        let reachable = reachable_count(&grid, start);
        let problem = VacuumProblem::new(&grid, start);
        for strategy in PATH_STRATEGIES {
            let outcome = run_strategy(&problem, strategy, &mut StdRng::seed_from_u64(0)).unwrap();
            assert!(
                outcome.explored_count() <= reachable,
                "{name}/{strategy}: explored {} of {reachable}",
                outcome.explored_count()
            );
        }
    }
}

#[test]
fn sealed_dirt_explores_every_reachable_cell() {
    let grid = room(4, 4, &[(2, 3), (2, 2), (3, 2)], &[(3, 3)]);
    let start = Coord::new(0, 0);
    let problem = VacuumProblem::new(&grid, start);
    for strategy in PATH_STRATEGIES {
        let outcome = run_strategy(&problem, strategy, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(!outcome.is_goal_reached(), "{strategy}");
        assert_eq!(outcome.explored_count(), reachable_count(&grid, start), "{strategy}");
    }
}

#[test]
fn goal_at_root_explores_one_state() {
    let grid = open3(&[(1, 1)]);
    let problem = VacuumProblem::new(&grid, Coord::new(1, 1));
    for strategy in PATH_STRATEGIES {
        let outcome = run_strategy(&problem, strategy, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(outcome.solution(), Some(Vec::new()), "{strategy}");
        assert_eq!(outcome.explored_count(), 1, "{strategy}");
    }
}

#[test]
fn open_grid_bfs_with_left_preferred() {
    let grid = open3(&[(2, 2)]);
    let problem = VacuumProblem::new(&grid, Coord::new(0, 0));
    let outcome = breadth_first_graph_search(&problem).unwrap();
    assert_eq!(outcome.solution(), Some(vec![Up, Up, Right, Right]));
    assert_eq!(
        outcome.explored.unwrap().states(),
        coords(&[(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (2, 0), (1, 2)]).as_slice()
    );
}

#[test]
fn open_grid_bfs_with_right_preferred() {
    let grid = open3(&[(2, 2)]);
    let problem =
        VacuumProblem::new(&grid, Coord::new(0, 0)).with_preferred_action(Some(Right));
    let outcome = breadth_first_graph_search(&problem).unwrap();
    assert_eq!(outcome.solution(), Some(vec![Right, Right, Up, Up]));
    assert_eq!(outcome.explored_count(), 7);
}

#[test]
fn step_turn_keeps_the_straight_path() {
    let grid = open3(&[(2, 0)]);
    let problem =
        VacuumProblem::new(&grid, Coord::new(0, 0)).with_cost_function(CostFunction::StepTurn);
    let outcome = uniform_cost_search(&problem).unwrap();
    assert_eq!(outcome.solution(), Some(vec![Right, Right]));
    assert_eq!(outcome.path_cost(), Some(2.0));
}

#[test]
fn reflex_never_consults_randomness_beside_dirt() {
    let grid = open3(&[(2, 1)]);
    for preferred in [None, Some(Left), Some(Up), Some(Down), Some(Right)] {
        let problem =
            VacuumProblem::new(&grid, Coord::new(1, 1)).with_preferred_action(preferred);
        for seed in 0..16 {
            let outcome = reflex_step(&problem, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(outcome.goal_node().map(|n| n.state), Some(Coord::new(2, 1)));
            assert!(outcome.explored.is_none());
        }
    }
}

#[test]
fn heuristic_kinds_agree_on_astar_cost() {
    let grid = office();
    for heuristic in HeuristicKind::ALL {
        let problem = VacuumProblem::new(&grid, Coord::new(0, 0))
            .with_heuristic(Some(heuristic))
            .with_cost_function(CostFunction::StayUp);
        let astar = astar_search(&problem).unwrap();
        let ucs = uniform_cost_search(&problem).unwrap();
        let (u, a) = (ucs.path_cost().unwrap(), astar.path_cost().unwrap());
        assert!((u - a).abs() < 1e-9, "{heuristic}: UCS {u}, A* {a}");
    }
}
