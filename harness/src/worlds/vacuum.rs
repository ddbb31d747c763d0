//! Vacuum world: find a path from the agent's cell to the nearest dirt.
//!
//! The problem borrows a [`GridSnapshot`] for the duration of one search.
//! The session owns the grid and cleans it between searches, so a problem
//! is rebuilt at the agent's new cell after every sub-goal.

use sweeper_kernel::carrier::coord::Coord;
use sweeper_kernel::carrier::direction::Direction;
use sweeper_kernel::carrier::grid::GridSnapshot;
use sweeper_kernel::operators::apply::{apply, legal_moves, ApplyFailure};
use sweeper_search::cost::CostFunction;
use sweeper_search::heuristic::HeuristicKind;
use sweeper_search::node::Node;
use sweeper_search::policy::SearchPolicy;
use sweeper_search::problem::{Cost, Problem, ProblemError};

/// Default action moved to the front of every expansion.
pub const DEFAULT_PREFERRED_ACTION: Direction = Direction::Left;

/// "Reach any dirty cell" over a borrowed room snapshot.
#[derive(Debug, Clone)]
pub struct VacuumProblem<'g> {
    grid: &'g GridSnapshot,
    agent: Coord,
    cost_function: CostFunction,
    heuristic: Option<HeuristicKind>,
    preferred_action: Option<Direction>,
}

impl<'g> VacuumProblem<'g> {
    /// Step cost, Manhattan heuristic, `Left` preferred.
    #[must_use]
    pub fn new(grid: &'g GridSnapshot, agent: Coord) -> Self {
        Self {
            grid,
            agent,
            cost_function: CostFunction::Step,
            heuristic: Some(HeuristicKind::Manhattan),
            preferred_action: Some(DEFAULT_PREFERRED_ACTION),
        }
    }

    /// Bind the policy's cost function and heuristic.
    #[must_use]
    pub fn from_policy(
        grid: &'g GridSnapshot,
        agent: Coord,
        policy: &SearchPolicy,
        preferred_action: Option<Direction>,
    ) -> Self {
        Self::new(grid, agent)
            .with_cost_function(policy.cost_function)
            .with_heuristic(Some(policy.heuristic))
            .with_preferred_action(preferred_action)
    }

    #[must_use]
    pub fn with_cost_function(mut self, cost_function: CostFunction) -> Self {
        self.cost_function = cost_function;
        self
    }

    /// `None` leaves the problem without a heuristic; greedy and A* then
    /// refuse to run.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Option<HeuristicKind>) -> Self {
        self.heuristic = heuristic;
        self
    }

    #[must_use]
    pub fn with_preferred_action(mut self, preferred_action: Option<Direction>) -> Self {
        self.preferred_action = preferred_action;
        self
    }

    #[must_use]
    pub fn agent(&self) -> Coord {
        self.agent
    }

    #[must_use]
    pub fn grid(&self) -> &'g GridSnapshot {
        self.grid
    }
}

fn to_problem_error(failure: &ApplyFailure) -> ProblemError {
    match failure {
        ApplyFailure::OutOfBounds { pos } => ProblemError::out_of_bounds(pos),
        ApplyFailure::IllegalMove { pos, dir } => ProblemError::illegal_action(pos, dir),
    }
}

impl Problem for VacuumProblem<'_> {
    type State = Coord;
    type Action = Direction;

    fn initial(&self) -> &Coord {
        &self.agent
    }

    fn actions(&self, state: &Coord) -> Result<Vec<Direction>, ProblemError> {
        legal_moves(self.grid, *state).map_err(|e| to_problem_error(&e))
    }

    fn result(&self, state: &Coord, action: &Direction) -> Result<Coord, ProblemError> {
        apply(self.grid, *state, *action).map_err(|e| to_problem_error(&e))
    }

    fn goal_test(&self, state: &Coord) -> bool {
        self.grid.has_dirt(*state)
    }

    fn path_cost(&self, from: &Node<Coord, Direction>, action: &Direction, to: &Coord) -> Cost {
        self.cost_function.accumulate(
            from.path_cost,
            from.action,
            *action,
            *to,
            self.grid.height(),
        )
    }

    fn heuristic(&self, state: &Coord) -> Option<Cost> {
        self.heuristic
            .map(|kind| kind.nearest(*state, self.grid.dirt()))
    }

    fn preferred_action(&self) -> Option<Direction> {
        self.preferred_action
    }
}
