//! Path-cost accumulators for grid problems.
//!
//! Every accumulator adds a non-negative amount per step, so uniform-cost
//! search and A* stay optimal under all of them.

use std::str::FromStr;

use sweeper_kernel::carrier::coord::Coord;
use sweeper_kernel::carrier::direction::Direction;

use crate::error::ConfigError;
use crate::problem::Cost;

/// Cost of one quarter turn under [`CostFunction::StepTurn`].
pub const TURN_PENALTY: Cost = 3.0;

/// Selector for how a grid move adds to the accumulated path cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum CostFunction {
    /// One per step.
    #[default]
    Step,
    /// One per step plus [`TURN_PENALTY`] per quarter turn relative to the
    /// previous move.
    StepTurn,
    /// The destination's `x`: moves near the left edge are cheap.
    StayLeft,
    /// One per step plus the destination's normalized distance from the top
    /// row.
    StayUp,
}

impl CostFunction {
    pub const ALL: [CostFunction; 4] = [
        Self::Step,
        Self::StepTurn,
        Self::StayLeft,
        Self::StayUp,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Step => "Step",
            Self::StepTurn => "StepTurn",
            Self::StayLeft => "StayLeft",
            Self::StayUp => "StayUp",
        }
    }

    /// Parse a cost-function name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCostFunction`] for any other name.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownCostFunction {
                name: name.to_string(),
            })
    }

    /// Cost after moving `action` into `to`, given the cost so far.
    ///
    /// `previous` is the move that reached the current cell (`None` at the
    /// search root). `height` is the room height, used by
    /// [`CostFunction::StayUp`].
    #[must_use]
    pub fn accumulate(
        self,
        cost: Cost,
        previous: Option<Direction>,
        action: Direction,
        to: Coord,
        height: i32,
    ) -> Cost {
        match self {
            Self::Step => cost + 1.0,
            Self::StepTurn => cost + 1.0 + turn_penalty(previous, action),
            Self::StayLeft => cost + f64::from(to.x),
            Self::StayUp => {
                let top = height - 1;
                cost + 1.0 + f64::from(top - to.y) / f64::from(height.max(1))
            }
        }
    }
}

impl FromStr for CostFunction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for CostFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Turn penalty for heading `action` after `previous`. Zero with no
/// previous move.
#[must_use]
pub fn turn_penalty(previous: Option<Direction>, action: Direction) -> Cost {
    previous.map_or(0.0, |prev| {
        f64::from(prev.quarter_turns(action)) * TURN_PENALTY
    })
}
