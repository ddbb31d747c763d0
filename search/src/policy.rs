//! Strategy and selector types.
//!
//! Selectors are parsed from names once, at configuration time. Search code
//! only ever sees the typed enums, so an unknown name can never reach a
//! search call.

use std::str::FromStr;

use crate::cost::CostFunction;
use crate::error::ConfigError;
use crate::heuristic::HeuristicKind;

/// The closed set of search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Strategy {
    /// One-step local rule: take a goal neighbour if there is one,
    /// otherwise a random neighbour.
    Reflex,
    #[default]
    BreadthFirst,
    DepthFirst,
    UniformCost,
    Greedy,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Self::Reflex,
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::Greedy,
        Self::AStar,
    ];

    /// Short display name (`"BFS"`, `"A*"`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reflex => "Reflex",
            Self::BreadthFirst => "BFS",
            Self::DepthFirst => "DFS",
            Self::UniformCost => "UCS",
            Self::Greedy => "Greedy",
            Self::AStar => "A*",
        }
    }

    const fn long_name(self) -> &'static str {
        match self {
            Self::Reflex => "reflex",
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
            Self::UniformCost => "uniform-cost",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Parse a strategy name (short or long form), ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownStrategy`] for any other name.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| {
                s.name().eq_ignore_ascii_case(trimmed) || s.long_name().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ConfigError::UnknownStrategy {
                name: name.to_string(),
            })
    }

    /// Whether the strategy's evaluation function reads the heuristic.
    #[must_use]
    pub const fn uses_heuristic(self) -> bool {
        matches!(self, Self::Greedy | Self::AStar)
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The three selectors a caller picks before searching a grid problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    pub strategy: Strategy,
    pub cost_function: CostFunction,
    pub heuristic: HeuristicKind,
}

impl SearchPolicy {
    /// Build a policy from selector names. A missing heuristic name means
    /// the default ([`HeuristicKind::Manhattan`]).
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first unrecognized name, checked
    /// in the order strategy, cost function, heuristic.
    pub fn parse(
        strategy: &str,
        cost_function: &str,
        heuristic: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            strategy: Strategy::parse(strategy)?,
            cost_function: CostFunction::parse(cost_function)?,
            heuristic: heuristic.map(HeuristicKind::parse).transpose()?.unwrap_or_default(),
        })
    }
}
