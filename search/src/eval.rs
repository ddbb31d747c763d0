//! Evaluation functions for best-first search, and the per-call heuristic
//! cache they share.
//!
//! Heuristic values depend on the state only, so one search call computes
//! each at most once. The cache lives for a single call and is dropped with
//! it; nothing is memoized on nodes or problems.

use std::collections::BTreeMap;

use crate::error::SearchError;
use crate::node::Node;
use crate::policy::Strategy;
use crate::problem::{Cost, Problem};

/// The `f` a best-first search orders its frontier by.
#[derive(Debug, Clone)]
pub enum Evaluation<S> {
    /// `f = path_cost` (uniform-cost search).
    PathCost,
    /// `f = h` (greedy best-first search).
    Heuristic(HeuristicCache<S>),
    /// `f = path_cost + h` (A*).
    PathCostPlusHeuristic(HeuristicCache<S>),
}

impl<S: Ord + Clone> Evaluation<S> {
    #[must_use]
    pub fn uniform_cost() -> Self {
        Self::PathCost
    }

    #[must_use]
    pub fn greedy() -> Self {
        Self::Heuristic(HeuristicCache::new(Strategy::Greedy))
    }

    #[must_use]
    pub fn astar() -> Self {
        Self::PathCostPlusHeuristic(HeuristicCache::new(Strategy::AStar))
    }

    /// Evaluate `node`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingHeuristic`] from the heuristic variants
    /// if the problem defines no heuristic.
    pub fn f<P>(&mut self, problem: &P, node: &Node<S, P::Action>) -> Result<Cost, SearchError>
    where
        P: Problem<State = S> + ?Sized,
    {
        match self {
            Self::PathCost => Ok(node.path_cost),
            Self::Heuristic(cache) => cache.estimate(problem, &node.state),
            Self::PathCostPlusHeuristic(cache) => {
                Ok(node.path_cost + cache.estimate(problem, &node.state)?)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeuristicCache<S> {
    strategy: Strategy,
    values: BTreeMap<S, Cost>,
}

impl<S: Ord + Clone> HeuristicCache<S> {
    /// Empty cache for a search run under `strategy` (named in the error if
    /// the problem has no heuristic).
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            values: BTreeMap::new(),
        }
    }

    /// The problem's heuristic for `state`, computed at most once.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MissingHeuristic`] if the problem defines no
    /// heuristic.
    pub fn estimate<P>(&mut self, problem: &P, state: &S) -> Result<Cost, SearchError>
    where
        P: Problem<State = S> + ?Sized,
    {
        if let Some(&h) = self.values.get(state) {
            return Ok(h);
        }
        let h = problem
            .heuristic(state)
            .ok_or(SearchError::MissingHeuristic {
                strategy: self.strategy,
            })?;
        self.values.insert(state.clone(), h);
        Ok(h)
    }

    /// Number of distinct states evaluated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
