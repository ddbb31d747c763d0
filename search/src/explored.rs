//! Explored set: states that have been expanded, with the path cost they
//! were expanded at, in expansion order.

use std::collections::BTreeMap;

use crate::problem::Cost;

/// Expanded states of one search call.
///
/// A state is inserted at most once; later inserts of the same state are
/// ignored and report `false`.
#[derive(Debug, Clone)]
pub struct ExploredSet<S> {
    costs: BTreeMap<S, Cost>,
    order: Vec<S>,
}

impl<S: Ord + Clone> ExploredSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            costs: BTreeMap::new(),
            order: Vec::new(),
        }
    }

    /// Record `state` as expanded at `path_cost`. Returns `false` if it was
    /// already present.
    pub fn insert(&mut self, state: S, path_cost: Cost) -> bool {
        if self.costs.contains_key(&state) {
            return false;
        }
        self.costs.insert(state.clone(), path_cost);
        self.order.push(state);
        true
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.costs.contains_key(state)
    }

    /// Path cost at which `state` was expanded.
    #[must_use]
    pub fn cost_of(&self, state: &S) -> Option<Cost> {
        self.costs.get(state).copied()
    }

    /// States in expansion order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.order.iter()
    }

    /// States in expansion order.
    #[must_use]
    pub fn states(&self) -> &[S] {
        &self.order
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<S: Ord + Clone> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
