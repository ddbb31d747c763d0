//! Cleaning session: the sub-goal loop around the search engine.
//!
//! # Loop
//!
//! ```text
//! clean own cell → all clean? → budget left?
//!   → bind VacuumProblem at agent → run_strategy()
//!   → move agent along solution → clean end cell → repeat
//! ```
//!
//! Each search call gets a fresh problem and keeps its own counters
//! ([`SearchStats`](sweeper_search::search::SearchStats)); the session keeps
//! the running totals.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use sweeper_kernel::carrier::coord::Coord;
use sweeper_kernel::carrier::grid::GridSnapshot;
use sweeper_search::search::run_strategy;

use crate::config::RunConfig;
use crate::error::HarnessError;
use crate::report::{PlanRecord, SessionReport, SessionTotals, StopReason};
use crate::worlds::vacuum::VacuumProblem;

/// A running session over one room.
#[derive(Debug, Clone)]
pub struct CleaningSession {
    config: RunConfig,
    grid: GridSnapshot,
    agent: Coord,
    rng: StdRng,
    plans: Vec<PlanRecord>,
    totals: SessionTotals,
}

impl CleaningSession {
    /// Start a session at the configured room and agent cell. The random
    /// source is seeded from `config.seed`.
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        Self {
            grid: config.room.grid.clone(),
            agent: config.room.agent,
            rng: StdRng::seed_from_u64(config.seed),
            plans: Vec::new(),
            totals: SessionTotals::default(),
            config,
        }
    }

    /// Run one plan. Returns `Some(reason)` once the session should stop.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Search`] if a search call fails.
    pub fn plan_next(&mut self) -> Result<Option<StopReason>, HarnessError> {
        self.clean_here();
        if self.grid.dirt_count() == 0 {
            return Ok(Some(StopReason::AllClean));
        }
        if self.totals.plans >= self.config.max_plans {
            warn!(
                max_plans = self.config.max_plans,
                remaining = self.grid.dirt_count(),
                "session: plan budget exhausted"
            );
            return Ok(Some(StopReason::PlanBudgetExhausted));
        }

        let index = self.totals.plans;
        let strategy = self.config.policy.strategy;
        let record = {
            let problem = VacuumProblem::from_policy(
                &self.grid,
                self.agent,
                &self.config.policy,
                self.config.preferred_action,
            );
            let outcome = run_strategy(&problem, strategy, &mut self.rng)?;
            PlanRecord::from_outcome(index, strategy, self.agent, &outcome)
        };

        self.totals.plans += 1;
        self.totals.explored += record.explored.len();
        self.totals.nodes_generated += record.stats.nodes_generated;

        let Some(end) = record.end else {
            warn!(plan = index, %strategy, from = %self.agent, "session: no solution");
            self.plans.push(record);
            return Ok(Some(StopReason::NoSolution));
        };

        self.totals.steps += record.actions.len();
        self.totals.path_cost += record.path_cost;
        debug!(plan = index, actions = ?record.actions, "session: follow plan");
        info!(
            plan = index,
            %strategy,
            from = %self.agent,
            to = %end,
            steps = record.actions.len(),
            cost = record.path_cost,
            explored = record.explored.len(),
            "session: sub-goal reached"
        );
        self.agent = end;
        self.plans.push(record);
        Ok(None)
    }

    /// Plan until the session stops, then build the report.
    ///
    /// # Errors
    ///
    /// Returns the first [`HarnessError`] from planning or from hashing the
    /// configuration.
    pub fn run(mut self) -> Result<SessionReport, HarnessError> {
        loop {
            if let Some(reason) = self.plan_next()? {
                return self.into_report(reason);
            }
        }
    }

    /// Build the report for a session stopped for `reason`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Canon`] if the configuration cannot be
    /// hashed.
    pub fn into_report(self, reason: StopReason) -> Result<SessionReport, HarnessError> {
        Ok(SessionReport {
            config_digest: self.config.digest()?,
            stop_reason: reason,
            remaining_dirt: self.grid.dirt().collect(),
            final_agent: self.agent,
            totals: self.totals,
            plans: self.plans,
        })
    }

    #[must_use]
    pub fn agent(&self) -> Coord {
        self.agent
    }

    #[must_use]
    pub fn grid(&self) -> &GridSnapshot {
        &self.grid
    }

    #[must_use]
    pub fn plans(&self) -> &[PlanRecord] {
        &self.plans
    }

    #[must_use]
    pub fn totals(&self) -> SessionTotals {
        self.totals
    }

    fn clean_here(&mut self) {
        if self.grid.clean(self.agent) {
            self.totals.cleaned += 1;
            debug!(cell = %self.agent, remaining = self.grid.dirt_count(), "session: cleaned");
        }
    }
}
