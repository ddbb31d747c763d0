//! The problem contract every strategy consumes.

use std::fmt::Debug;
use std::hash::Hash;

use crate::node::Node;

/// Accumulated path cost and heuristic values.
///
/// Compared with `f64::total_cmp` wherever an order is needed.
pub type Cost = f64;

/// Explicit goal states for problems that have them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalSpec<S> {
    /// Exactly one goal state.
    Single(S),
    /// Any state in the collection.
    AnyOf(Vec<S>),
}

impl<S: PartialEq> GoalSpec<S> {
    #[must_use]
    pub fn is_satisfied_by(&self, state: &S) -> bool {
        match self {
            Self::Single(goal) => goal == state,
            Self::AnyOf(goals) => goals.contains(state),
        }
    }
}

/// Precondition violation reported by a problem's operations.
///
/// States and actions are carried as their `Debug` rendering so the error
/// stays independent of the problem's types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// `actions` was asked about a state outside the environment.
    StateOutOfBounds { state: String },
    /// `result` was given an action not in `actions(state)`.
    IllegalAction { state: String, action: String },
}

impl ProblemError {
    #[must_use]
    pub fn out_of_bounds(state: &impl Debug) -> Self {
        Self::StateOutOfBounds {
            state: format!("{state:?}"),
        }
    }

    #[must_use]
    pub fn illegal_action(state: &impl Debug, action: &impl Debug) -> Self {
        Self::IllegalAction {
            state: format!("{state:?}"),
            action: format!("{action:?}"),
        }
    }
}

impl std::fmt::Display for ProblemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateOutOfBounds { state } => {
                write!(f, "state {state} is outside the environment")
            }
            Self::IllegalAction { state, action } => {
                write!(f, "action {action} is not applicable in state {state}")
            }
        }
    }
}

impl std::error::Error for ProblemError {}

/// A formal search problem.
///
/// Implement `initial`, `actions` and `result`; override the rest as needed.
/// A problem is read-only for the duration of one search call; to search
/// from a new position, bind a new problem (or rebind one) between calls.
///
/// # Contract
///
/// - `actions` must be deterministic for a given state and environment
///   snapshot. It is re-evaluated on every expansion.
/// - `result` must be pure. Implementations should reject actions not in
///   `actions(state)` with [`ProblemError::IllegalAction`].
/// - `path_cost` must never decrease the accumulated cost for the
///   cost-aware strategies to return optimal paths.
/// - `heuristic` must depend on the state only; values are cached per state
///   for the duration of one search.
pub trait Problem {
    /// Search state. Equality decides duplicate suppression; the order
    /// breaks priority ties.
    type State: Clone + Eq + Ord + Hash + Debug;
    /// Action label on search-tree edges.
    type Action: Clone + Eq + Debug;

    fn initial(&self) -> &Self::State;

    /// Explicit goal states, used by the default [`Problem::goal_test`].
    fn goal(&self) -> Option<&GoalSpec<Self::State>> {
        None
    }

    /// Actions applicable in `state`, in the problem's base order.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::StateOutOfBounds`] for a state the
    /// environment does not contain.
    fn actions(&self, state: &Self::State) -> Result<Vec<Self::Action>, ProblemError>;

    /// The state reached by applying `action` in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`ProblemError::IllegalAction`] if `action` is not
    /// applicable in `state`.
    fn result(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, ProblemError>;

    /// Whether `state` is a goal. Defaults to matching [`Problem::goal`];
    /// a problem without explicit goals never succeeds unless it overrides
    /// this.
    fn goal_test(&self, state: &Self::State) -> bool {
        self.goal().is_some_and(|goal| goal.is_satisfied_by(state))
    }

    /// Cost of the path that reaches `to` from `from` via `action`.
    ///
    /// `from` carries the cost so far and the action that reached it, so
    /// implementations can price turns. Defaults to one per step.
    fn path_cost(
        &self,
        from: &Node<Self::State, Self::Action>,
        _action: &Self::Action,
        _to: &Self::State,
    ) -> Cost {
        from.path_cost + 1.0
    }

    /// Estimated remaining cost from `state`; `None` if the problem has no
    /// heuristic.
    fn heuristic(&self, _state: &Self::State) -> Option<Cost> {
        None
    }

    /// Action moved to the front of every expansion, if any.
    fn preferred_action(&self) -> Option<Self::Action> {
        None
    }
}
