//! Search entry points: uninformed graph search, best-first graph search and
//! its specializations, and the one-step reflex rule.
//!
//! Every entry point is synchronous and runs to completion. A search that
//! exhausts its frontier returns `Ok` with `goal == None`; errors are
//! reserved for precondition violations and a missing heuristic.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::eval::Evaluation;
use crate::explored::ExploredSet;
use crate::frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
use crate::node::{Node, NodeArena, NodeId};
use crate::policy::Strategy;
use crate::problem::{Cost, Problem};

/// Request-scoped counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes created, root included.
    pub nodes_generated: usize,
    /// Nodes whose children were generated.
    pub expansions: usize,
    /// Largest number of nodes held by the frontier at once.
    pub frontier_high_water: usize,
}

/// Result of a search call.
///
/// `goal` is `None` when no solution was found. `explored` is `None` only
/// for the reflex rule, which explores nothing.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, A> {
    pub goal: Option<NodeId>,
    pub nodes: NodeArena<S, A>,
    pub explored: Option<ExploredSet<S>>,
    pub stats: SearchStats,
}

impl<S: Clone + Ord, A: Clone> SearchOutcome<S, A> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal.is_some()
    }

    #[must_use]
    pub fn goal_node(&self) -> Option<&Node<S, A>> {
        self.goal.map(|id| &self.nodes[id])
    }

    /// Actions from the root to the goal; `None` without a goal.
    #[must_use]
    pub fn solution(&self) -> Option<Vec<A>> {
        self.goal.map(|id| self.nodes.solution(id))
    }

    /// States from the root to the goal, inclusive.
    #[must_use]
    pub fn path_states(&self) -> Option<Vec<S>> {
        self.goal.map(|id| self.nodes.path_states(id))
    }

    #[must_use]
    pub fn path_cost(&self) -> Option<Cost> {
        self.goal_node().map(|node| node.path_cost)
    }

    /// Number of explored states (0 for the reflex rule).
    #[must_use]
    pub fn explored_count(&self) -> usize {
        self.explored.as_ref().map_or(0, ExploredSet::len)
    }
}

/// Breadth-first graph search.
///
/// Returns a path with the fewest steps; among those, the first found in
/// child-expansion order.
///
/// # Errors
///
/// Returns [`SearchError::Problem`] if the problem reports a precondition
/// violation.
pub fn breadth_first_graph_search<P>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
{
    uninformed_graph_search(problem, FifoFrontier::new())
}

/// Depth-first graph search. No optimality guarantee.
///
/// # Errors
///
/// Returns [`SearchError::Problem`] if the problem reports a precondition
/// violation.
pub fn depth_first_graph_search<P>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
{
    uninformed_graph_search(problem, LifoFrontier::new())
}

/// Shared loop for the FIFO and LIFO disciplines.
///
/// The goal test runs when a child is generated, so a goal child is
/// returned without being explored. A child whose state is explored or
/// already in the frontier is dropped without comparing costs.
fn uninformed_graph_search<P, F>(
    problem: &P,
    mut frontier: F,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
    F: Frontier<P::State>,
{
    let mut nodes = NodeArena::new();
    let mut explored = ExploredSet::new();
    let mut expansions = 0;
    let root = nodes.root(problem.initial().clone());

    if problem.goal_test(&nodes[root].state) {
        explored.insert(nodes[root].state.clone(), 0.0);
        return Ok(finish(Some(root), nodes, explored, expansions, 0));
    }
    frontier.push(root, nodes[root].state.clone());

    while let Some(id) = frontier.pop() {
        let node = &nodes[id];
        debug!(state = ?node.state, path_cost = node.path_cost, depth = node.depth, "search: expand");
        explored.insert(node.state.clone(), node.path_cost);
        expansions += 1;

        for child in nodes.expand(problem, id)? {
            let state = &nodes[child].state;
            if explored.contains(state) || frontier.contains(state) {
                trace!(?state, "search: skip duplicate");
                continue;
            }
            if problem.goal_test(state) {
                debug!(?state, "search: goal generated");
                let high_water = frontier.high_water();
                return Ok(finish(Some(child), nodes, explored, expansions, high_water));
            }
            trace!(?state, "search: enqueue");
            frontier.push(child, state.clone());
        }
    }

    let high_water = frontier.high_water();
    Ok(finish(None, nodes, explored, expansions, high_water))
}

/// Best-first graph search ordered by ascending `f`.
///
/// The popped node is recorded as explored before its goal test, so the
/// explored set is exactly the set of popped states. Children with an
/// explored state are skipped; the rest go through the frontier's
/// replacement rule ([`PriorityFrontier::offer`]).
///
/// # Errors
///
/// Propagates any error from `f` (for example
/// [`SearchError::MissingHeuristic`], raised on the root before the first
/// pop) and [`SearchError::Problem`] from the problem.
pub fn best_first_graph_search<P, F>(
    problem: &P,
    mut f: F,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
    F: FnMut(&Node<P::State, P::Action>) -> Result<Cost, SearchError>,
{
    let mut nodes = NodeArena::new();
    let mut explored = ExploredSet::new();
    let mut frontier = PriorityFrontier::new();
    let mut expansions = 0;
    let root = nodes.root(problem.initial().clone());
    let root_f = f(&nodes[root])?;
    frontier.offer(root, nodes[root].state.clone(), root_f);

    while let Some((id, f_value)) = frontier.pop() {
        let node = &nodes[id];
        debug!(state = ?node.state, path_cost = node.path_cost, f = f_value, "search: expand");
        explored.insert(node.state.clone(), node.path_cost);
        if problem.goal_test(&node.state) {
            let high_water = frontier.high_water();
            return Ok(finish(Some(id), nodes, explored, expansions, high_water));
        }
        expansions += 1;

        for child in nodes.expand(problem, id)? {
            let child_node = &nodes[child];
            if explored.contains(&child_node.state) {
                continue;
            }
            let child_f = f(child_node)?;
            let offer = frontier.offer(child, child_node.state.clone(), child_f);
            trace!(state = ?child_node.state, path_cost = child_node.path_cost, f = child_f, ?offer, "search: offer");
        }
    }

    let high_water = frontier.high_water();
    Ok(finish(None, nodes, explored, expansions, high_water))
}

/// Uniform-cost search: `f = path_cost`. Ignores any heuristic.
///
/// # Errors
///
/// Returns [`SearchError::Problem`] if the problem reports a precondition
/// violation.
pub fn uniform_cost_search<P>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
{
    let mut eval = Evaluation::uniform_cost();
    best_first_graph_search(problem, |node| eval.f(problem, node))
}

/// Greedy best-first search: `f = heuristic`. Ignores path cost.
///
/// # Errors
///
/// Returns [`SearchError::MissingHeuristic`] if the problem has no
/// heuristic, and [`SearchError::Problem`] on a precondition violation.
pub fn greedy_best_first_search<P>(
    problem: &P,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
{
    let mut eval = Evaluation::greedy();
    best_first_graph_search(problem, |node| eval.f(problem, node))
}

/// A* search: `f = path_cost + heuristic`.
///
/// # Errors
///
/// Returns [`SearchError::MissingHeuristic`] if the problem has no
/// heuristic, and [`SearchError::Problem`] on a precondition violation.
pub fn astar_search<P>(problem: &P) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
{
    let mut eval = Evaluation::astar();
    best_first_graph_search(problem, |node| eval.f(problem, node))
}

/// One-step reflex rule.
///
/// Expands the initial state once. Returns the first child (in expansion
/// order) that satisfies the goal test without consulting `rng`; otherwise
/// a uniformly random child. `goal` is `None` only when there is no legal
/// action. The outcome has no explored set.
///
/// # Errors
///
/// Returns [`SearchError::Problem`] if the problem reports a precondition
/// violation.
pub fn reflex_step<P, R>(
    problem: &P,
    rng: &mut R,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
    R: Rng + ?Sized,
{
    let mut nodes = NodeArena::new();
    let root = nodes.root(problem.initial().clone());
    let children = nodes.expand(problem, root)?;
    let choice = match children
        .iter()
        .copied()
        .find(|&child| problem.goal_test(&nodes[child].state))
    {
        Some(goal) => Some(goal),
        None => children.choose(rng).copied(),
    };
    let chosen = choice.map(|id| &nodes[id].state);
    debug!(state = ?nodes[root].state, ?chosen, "reflex: step");
    let stats = SearchStats {
        nodes_generated: nodes.len(),
        expansions: 1,
        frontier_high_water: 0,
    };
    Ok(SearchOutcome {
        goal: choice,
        nodes,
        explored: None,
        stats,
    })
}

/// Run `strategy` on `problem`. `rng` is consulted only by
/// [`Strategy::Reflex`].
///
/// # Errors
///
/// Whatever the selected strategy returns.
pub fn run_strategy<P, R>(
    problem: &P,
    strategy: Strategy,
    rng: &mut R,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError>
where
    P: Problem + ?Sized,
    R: Rng + ?Sized,
{
    match strategy {
        Strategy::Reflex => reflex_step(problem, rng),
        Strategy::BreadthFirst => breadth_first_graph_search(problem),
        Strategy::DepthFirst => depth_first_graph_search(problem),
        Strategy::UniformCost => uniform_cost_search(problem),
        Strategy::Greedy => greedy_best_first_search(problem),
        Strategy::AStar => astar_search(problem),
    }
}

fn finish<S, A>(
    goal: Option<NodeId>,
    nodes: NodeArena<S, A>,
    explored: ExploredSet<S>,
    expansions: usize,
    frontier_high_water: usize,
) -> SearchOutcome<S, A> {
    let stats = SearchStats {
        nodes_generated: nodes.len(),
        expansions,
        frontier_high_water,
    };
    SearchOutcome {
        goal,
        nodes,
        explored: Some(explored),
        stats,
    }
}
