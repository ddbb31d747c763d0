//! Sweeper Search: deterministic state-space search over an abstract problem.
//!
//! This crate provides the search layer. It depends only on
//! `sweeper_kernel`; it does NOT depend on `sweeper_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! sweeper_kernel  ←  sweeper_search  ←  sweeper_harness
//! (grid carrier)     (problem, nodes,    (vacuum problem,
//!                     frontiers, algos)   config, sessions)
//! ```
//!
//! # Key types
//!
//! - [`Problem`](problem::Problem) -- actions, transition, goal test, path cost, heuristic
//! - [`NodeArena`](node::NodeArena) -- search-tree storage with parent indices
//! - [`PriorityFrontier`](frontier::PriorityFrontier) -- best-first frontier with replacement
//! - [`SearchOutcome`](search::SearchOutcome) -- goal node (or none) plus explored states
//! - [`Strategy`](policy::Strategy) -- closed set of search strategies
//! - [`CostFunction`](cost::CostFunction) / [`HeuristicKind`](heuristic::HeuristicKind) -- grid cost and heuristic selectors

#![forbid(unsafe_code)]

pub mod cost;
pub mod error;
pub mod eval;
pub mod explored;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod policy;
pub mod problem;
pub mod search;
