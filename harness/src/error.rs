//! Harness error type.

use sweeper_kernel::carrier::grid::GridError;
use sweeper_search::error::{ConfigError, SearchError};

/// Failure while loading a run configuration or running a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// A selector name was not recognized.
    Config(ConfigError),
    /// The configuration text is not valid JSON for a run configuration.
    Parse { detail: String },
    /// The configuration file could not be read.
    Io { detail: String },
    /// The room layout is inconsistent (cells outside the room, agent on a
    /// wall, ...).
    InvalidLayout { detail: String },
    /// A search call failed.
    Search(SearchError),
    /// Canonical JSON serialization failed.
    Canon { detail: String },
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(inner) => write!(f, "configuration error: {inner}"),
            Self::Parse { detail } => write!(f, "cannot parse run configuration: {detail}"),
            Self::Io { detail } => write!(f, "cannot read run configuration: {detail}"),
            Self::InvalidLayout { detail } => write!(f, "invalid room layout: {detail}"),
            Self::Search(inner) => write!(f, "search failed: {inner}"),
            Self::Canon { detail } => write!(f, "canonical JSON failed: {detail}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(inner) => Some(inner),
            Self::Search(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<ConfigError> for HarnessError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<SearchError> for HarnessError {
    fn from(value: SearchError) -> Self {
        Self::Search(value)
    }
}

impl From<GridError> for HarnessError {
    fn from(value: GridError) -> Self {
        Self::InvalidLayout {
            detail: value.to_string(),
        }
    }
}
