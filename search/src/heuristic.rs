//! Distance heuristics over grid coordinates.

use std::str::FromStr;

use sweeper_kernel::carrier::coord::Coord;

use crate::error::ConfigError;
use crate::problem::Cost;

/// Selector for the distance used to estimate remaining cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum HeuristicKind {
    #[default]
    Manhattan,
    /// Straight-line distance (square-rooted, so never above Manhattan).
    Euclidean,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [Self::Manhattan, Self::Euclidean];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "Manhattan",
            Self::Euclidean => "Euclidean",
        }
    }

    /// Parse a heuristic name, ignoring ASCII case. `Euclid` is accepted as
    /// an alias of `Euclidean`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownHeuristic`] for any other name.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let trimmed = name.trim();
        if trimmed.eq_ignore_ascii_case("euclid") {
            return Ok(Self::Euclidean);
        }
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownHeuristic {
                name: name.to_string(),
            })
    }

    #[must_use]
    pub fn distance(self, a: Coord, b: Coord) -> Cost {
        match self {
            Self::Manhattan => manhattan(a, b),
            Self::Euclidean => euclidean(a, b),
        }
    }

    /// Distance from `from` to the nearest of `targets`; `0` when there are
    /// no targets.
    #[must_use]
    pub fn nearest(self, from: Coord, targets: impl IntoIterator<Item = Coord>) -> Cost {
        targets
            .into_iter()
            .map(|t| self.distance(from, t))
            .min_by(f64::total_cmp)
            .unwrap_or(0.0)
    }
}

impl FromStr for HeuristicKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[must_use]
pub fn manhattan(a: Coord, b: Coord) -> Cost {
    f64::from(a.x.abs_diff(b.x)) + f64::from(a.y.abs_diff(b.y))
}

#[must_use]
pub fn euclidean(a: Coord, b: Coord) -> Cost {
    let dx = f64::from(a.x.abs_diff(b.x));
    let dy = f64::from(a.y.abs_diff(b.y));
    dx.hypot(dy)
}
