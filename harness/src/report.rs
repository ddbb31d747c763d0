//! Session report: per-plan records and totals, serialized to canonical
//! JSON and fingerprinted with SHA-256.
//!
//! Costs are `f64` and canonical JSON admits integers only, so costs are
//! written as fixed three-decimal strings.

use serde_json::{json, Value};

use sweeper_kernel::carrier::coord::Coord;
use sweeper_kernel::carrier::direction::Direction;
use sweeper_kernel::proof::canon::canonical_json_bytes;
use sweeper_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use sweeper_search::policy::Strategy;
use sweeper_search::problem::Cost;
use sweeper_search::search::{SearchOutcome, SearchStats};

use crate::config::cell_list;
use crate::error::HarnessError;

/// One search call in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRecord {
    /// Zero-based position in the session.
    pub index: u32,
    pub strategy: Strategy,
    pub start: Coord,
    /// Cell the plan ends on; `None` when the search found no solution.
    pub end: Option<Coord>,
    pub actions: Vec<Direction>,
    pub path_cost: Cost,
    /// Explored cells in exploration order (empty for the reflex rule).
    pub explored: Vec<Coord>,
    pub stats: SearchStats,
}

impl PlanRecord {
    #[must_use]
    pub fn from_outcome(
        index: u32,
        strategy: Strategy,
        start: Coord,
        outcome: &SearchOutcome<Coord, Direction>,
    ) -> Self {
        Self {
            index,
            strategy,
            start,
            end: outcome.goal_node().map(|node| node.state),
            actions: outcome.solution().unwrap_or_default(),
            path_cost: outcome.path_cost().unwrap_or(0.0),
            explored: outcome
                .explored
                .as_ref()
                .map(|set| set.states().to_vec())
                .unwrap_or_default(),
            stats: outcome.stats,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.end.is_some()
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "index": self.index,
            "strategy": self.strategy.name(),
            "start": [self.start.x, self.start.y],
            "end": self.end.map(|c| json!([c.x, c.y])),
            "actions": self.actions.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
            "path_cost": format_cost(self.path_cost),
            "explored": cell_list(self.explored.iter().copied()),
            "nodes_generated": self.stats.nodes_generated,
            "expansions": self.stats.expansions,
            "frontier_high_water": self.stats.frontier_high_water,
        })
    }

    /// # Errors
    ///
    /// Returns [`HarnessError::Canon`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        Ok(canonical_hash(
            HashDomain::PlanRecord,
            &canonical_bytes(&self.to_json())?,
        ))
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No dirt left.
    AllClean,
    /// The last search exhausted its frontier (or, for the reflex rule,
    /// found no legal move).
    NoSolution,
    /// The configured plan budget ran out with dirt left.
    PlanBudgetExhausted,
}

impl StopReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllClean => "all_clean",
            Self::NoSolution => "no_solution",
            Self::PlanBudgetExhausted => "plan_budget_exhausted",
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Totals across every plan of a session.
///
/// These survive from one plan to the next; each plan's own counters are
/// in its [`PlanRecord::stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionTotals {
    pub plans: u32,
    pub steps: usize,
    pub cleaned: usize,
    pub explored: usize,
    pub nodes_generated: usize,
    pub path_cost: Cost,
}

/// Everything a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub config_digest: ContentHash,
    pub stop_reason: StopReason,
    pub plans: Vec<PlanRecord>,
    pub totals: SessionTotals,
    pub final_agent: Coord,
    pub remaining_dirt: Vec<Coord>,
}

impl SessionReport {
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "config_digest": self.config_digest.as_str(),
            "stop_reason": self.stop_reason.as_str(),
            "plans": self.plans.iter().map(PlanRecord::to_json).collect::<Vec<_>>(),
            "totals": {
                "plans": self.totals.plans,
                "steps": self.totals.steps,
                "cleaned": self.totals.cleaned,
                "explored": self.totals.explored,
                "nodes_generated": self.totals.nodes_generated,
                "path_cost": format_cost(self.totals.path_cost),
            },
            "final_agent": [self.final_agent.x, self.final_agent.y],
            "remaining_dirt": cell_list(self.remaining_dirt.iter().copied()),
        })
    }

    /// Canonical JSON bytes of [`SessionReport::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Canon`] if canonical serialization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, HarnessError> {
        canonical_bytes(&self.to_json())
    }

    /// # Errors
    ///
    /// Returns [`HarnessError::Canon`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        Ok(canonical_hash(
            HashDomain::SessionReport,
            &self.canonical_bytes()?,
        ))
    }
}

fn canonical_bytes(value: &Value) -> Result<Vec<u8>, HarnessError> {
    canonical_json_bytes(value).map_err(|e| HarnessError::Canon {
        detail: e.to_string(),
    })
}

fn format_cost(cost: Cost) -> String {
    format!("{cost:.3}")
}
