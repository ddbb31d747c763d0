//! Typed search and configuration errors.
//!
//! "No solution" is not an error: it is an `Ok` outcome whose goal is `None`.

use crate::policy::Strategy;
use crate::problem::ProblemError;

/// Failure raised while a search is being set up or run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A heuristic strategy was requested on a problem with no heuristic.
    MissingHeuristic { strategy: Strategy },
    /// The problem reported a precondition violation.
    Problem(ProblemError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeuristic { strategy } => write!(
                f,
                "strategy {strategy} needs a heuristic but the problem does not define one"
            ),
            Self::Problem(inner) => write!(f, "problem precondition violated: {inner}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Problem(inner) => Some(inner),
            Self::MissingHeuristic { .. } => None,
        }
    }
}

impl From<ProblemError> for SearchError {
    fn from(value: ProblemError) -> Self {
        Self::Problem(value)
    }
}

/// An unrecognized selector name. Raised at parse time, before any search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownStrategy { name: String },
    UnknownCostFunction { name: String },
    UnknownHeuristic { name: String },
    UnknownAction { name: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStrategy { name } => write!(f, "unknown search strategy: {name:?}"),
            Self::UnknownCostFunction { name } => write!(f, "unknown cost function: {name:?}"),
            Self::UnknownHeuristic { name } => write!(f, "unknown heuristic: {name:?}"),
            Self::UnknownAction { name } => write!(f, "unknown action: {name:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}
