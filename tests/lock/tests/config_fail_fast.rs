//! Configuration errors surface at load time, before any search runs.

use std::io::Write;

use sweeper_harness::config::RunConfig;
use sweeper_harness::error::HarnessError;
use sweeper_harness::worlds::vacuum::VacuumProblem;
use sweeper_kernel::carrier::coord::Coord;
use sweeper_search::error::{ConfigError, SearchError};
use sweeper_search::policy::Strategy;
use sweeper_search::search::{astar_search, greedy_best_first_search, uniform_cost_search};

use lock_tests::rooms::open3;

const ROOM: &str = r#"{ "width": 3, "height": 3, "agent": [0, 0], "dirt": [[2, 2]] }"#;

fn with_selectors(strategy: &str, cost: &str, extra: &str) -> String {
    format!(r#"{{ "strategy": "{strategy}", "cost_function": "{cost}", {extra} "room": {ROOM} }}"#)
}

fn load_from_file(text: &str) -> Result<RunConfig, HarnessError> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    RunConfig::from_path(file.path())
}

#[test]
fn unknown_strategy_is_rejected() {
    let err = load_from_file(&with_selectors("IDDFS", "Step", "")).unwrap_err();
    assert_eq!(
        err,
        HarnessError::Config(ConfigError::UnknownStrategy {
            name: "IDDFS".into()
        })
    );
}

#[test]
fn unknown_cost_function_is_rejected() {
    let err = load_from_file(&with_selectors("UCS", "Diagonal", "")).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Config(ConfigError::UnknownCostFunction { ref name }) if name == "Diagonal"
    ));
}

#[test]
fn unknown_heuristic_is_rejected() {
    let err =
        load_from_file(&with_selectors("A*", "Step", r#""heuristic": "Chebyshev","#)).unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Config(ConfigError::UnknownHeuristic { .. })
    ));
}

#[test]
fn unknown_preferred_action_is_rejected() {
    let err = load_from_file(&with_selectors(
        "BFS",
        "Step",
        r#""preferred_action": "NORTH","#,
    ))
    .unwrap_err();
    assert!(matches!(
        err,
        HarnessError::Config(ConfigError::UnknownAction { .. })
    ));
}

#[test]
fn unknown_field_is_a_parse_error() {
    let err = load_from_file(&with_selectors("BFS", "Step", r#""budget": 3,"#)).unwrap_err();
    assert!(matches!(err, HarnessError::Parse { .. }), "{err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RunConfig::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
}

#[test]
fn agent_on_wall_is_an_invalid_layout() {
    let text = r#"{ "strategy": "BFS", "cost_function": "Step",
                    "room": { "width": 3, "height": 3, "agent": [1, 1], "walls": [[1, 1]] } }"#;
    let err = load_from_file(text).unwrap_err();
    assert!(matches!(err, HarnessError::InvalidLayout { .. }));
}

#[test]
fn selector_names_are_normalized_in_the_digest() {
    let a = load_from_file(&with_selectors("A*", "StepTurn", r#""heuristic": "Euclid","#))
        .unwrap();
    let b = load_from_file(&with_selectors(
        "a*",
        "stepturn",
        r#""heuristic": "euclidean","#,
    ))
    .unwrap();
    assert_eq!(a.policy, b.policy);
    assert_eq!(a.digest().unwrap(), b.digest().unwrap());
}

#[test]
fn heuristic_strategies_fail_without_a_heuristic() {
    let grid = open3(&[(2, 2)]);
    let problem = VacuumProblem::new(&grid, Coord::new(0, 0)).with_heuristic(None);

    assert_eq!(
        astar_search(&problem).unwrap_err(),
        SearchError::MissingHeuristic {
            strategy: Strategy::AStar
        }
    );
    assert_eq!(
        greedy_best_first_search(&problem).unwrap_err(),
        SearchError::MissingHeuristic {
            strategy: Strategy::Greedy
        }
    );
    assert!(uniform_cost_search(&problem).unwrap().is_goal_reached());
}
