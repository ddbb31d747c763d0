//! Run configuration: JSON in, typed selectors and a validated room out.
//!
//! Every selector is parsed here, before any search runs. An unknown name
//! fails the whole load; nothing falls back to a default silently.
//!
//! # Format
//!
//! ```json
//! {
//!   "strategy": "A*", "cost_function": "StepTurn", "heuristic": "Manhattan",
//!   "preferred_action": "LEFT", "seed": 7, "max_plans": 64,
//!   "room": { "width": 5, "height": 5, "agent": [0, 0],
//!             "walls": [[2, 2]], "dirt": [[4, 4], [0, 3]] }
//! }
//! ```
//!
//! `heuristic`, `preferred_action`, `seed`, `max_plans`, `walls` and `dirt`
//! are optional. `"preferred_action": "NONE"` disables the preference.

use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use sweeper_kernel::carrier::coord::Coord;
use sweeper_kernel::carrier::direction::Direction;
use sweeper_kernel::carrier::grid::GridSnapshot;
use sweeper_kernel::proof::canon::canonical_json_bytes;
use sweeper_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use sweeper_search::error::ConfigError;
use sweeper_search::policy::SearchPolicy;

use crate::error::HarnessError;
use crate::worlds::vacuum::DEFAULT_PREFERRED_ACTION;

/// Plan budget when the configuration does not set one.
pub const DEFAULT_MAX_PLANS: u32 = 256;

const NO_PREFERENCE: &str = "NONE";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRunConfig {
    strategy: String,
    cost_function: String,
    #[serde(default)]
    heuristic: Option<String>,
    #[serde(default)]
    preferred_action: Option<String>,
    #[serde(default)]
    seed: u64,
    #[serde(default = "default_max_plans")]
    max_plans: u32,
    room: RawRoom,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRoom {
    width: i32,
    height: i32,
    agent: (i32, i32),
    #[serde(default)]
    walls: Vec<(i32, i32)>,
    #[serde(default)]
    dirt: Vec<(i32, i32)>,
}

fn default_max_plans() -> u32 {
    DEFAULT_MAX_PLANS
}

/// A room and the agent's starting cell, validated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLayout {
    pub grid: GridSnapshot,
    pub agent: Coord,
}

impl RoomLayout {
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidLayout`] if the agent is outside the
    /// room or on a wall.
    pub fn new(grid: GridSnapshot, agent: Coord) -> Result<Self, HarnessError> {
        if !grid.contains(agent) {
            return Err(HarnessError::InvalidLayout {
                detail: format!("agent {agent} is outside the room"),
            });
        }
        if grid.is_wall(agent) {
            return Err(HarnessError::InvalidLayout {
                detail: format!("agent {agent} is on a wall"),
            });
        }
        Ok(Self { grid, agent })
    }
}

/// A fully validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub policy: SearchPolicy,
    /// `true` when the configuration named no heuristic and the default
    /// filled in. Not part of the normalized form or the digest.
    pub heuristic_defaulted: bool,
    /// `None` when the configuration says `"NONE"`.
    pub preferred_action: Option<Direction>,
    /// Seed for the reflex rule's random source.
    pub seed: u64,
    /// Maximum number of plans (search calls) in one session.
    pub max_plans: u32,
    pub room: RoomLayout,
}

impl RunConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    ///
    /// - [`HarnessError::Parse`] for malformed JSON, missing or unknown
    ///   fields.
    /// - [`HarnessError::Config`] for an unknown selector name.
    /// - [`HarnessError::InvalidLayout`] for an inconsistent room.
    pub fn from_json_str(text: &str) -> Result<Self, HarnessError> {
        let raw: RawRunConfig = serde_json::from_str(text).map_err(|e| HarnessError::Parse {
            detail: e.to_string(),
        })?;
        Self::from_raw(raw)
    }

    /// Read and validate a JSON configuration file.
    ///
    /// # Errors
    ///
    /// [`HarnessError::Io`] if the file cannot be read, otherwise as
    /// [`RunConfig::from_json_str`].
    pub fn from_path(path: &Path) -> Result<Self, HarnessError> {
        let text = std::fs::read_to_string(path).map_err(|e| HarnessError::Io {
            detail: format!("{}: {e}", path.display()),
        })?;
        Self::from_json_str(&text)
    }

    fn from_raw(raw: RawRunConfig) -> Result<Self, HarnessError> {
        let policy = SearchPolicy::parse(
            &raw.strategy,
            &raw.cost_function,
            raw.heuristic.as_deref(),
        )?;
        let heuristic_defaulted = raw.heuristic.is_none();
        if heuristic_defaulted && policy.strategy.uses_heuristic() {
            debug!(
                strategy = %policy.strategy,
                heuristic = %policy.heuristic,
                "config: no heuristic named, using default"
            );
        }
        let preferred_action = parse_preferred_action(raw.preferred_action.as_deref())?;

        let to_coords =
            |cells: Vec<(i32, i32)>| cells.into_iter().map(Coord::from).collect::<Vec<_>>();
        let grid = GridSnapshot::new(raw.room.width, raw.room.height)?
            .with_walls(to_coords(raw.room.walls))?
            .with_dirt(to_coords(raw.room.dirt))?;
        let room = RoomLayout::new(grid, Coord::from(raw.room.agent))?;

        Ok(Self {
            policy,
            heuristic_defaulted,
            preferred_action,
            seed: raw.seed,
            max_plans: raw.max_plans,
            room,
        })
    }

    /// Normalized JSON form: selector names canonicalized, every optional
    /// field filled in, cell lists sorted.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "strategy": self.policy.strategy.name(),
            "cost_function": self.policy.cost_function.name(),
            "heuristic": self.policy.heuristic.name(),
            "preferred_action": self.preferred_action.map_or(NO_PREFERENCE, Direction::as_str),
            "seed": self.seed,
            "max_plans": self.max_plans,
            "room": {
                "width": self.room.grid.width(),
                "height": self.room.grid.height(),
                "agent": [self.room.agent.x, self.room.agent.y],
                "walls": cell_list(self.room.grid.walls()),
                "dirt": cell_list(self.room.grid.dirt()),
            },
        })
    }

    /// Content hash of the normalized configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Canon`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, HarnessError> {
        let bytes = canonical_json_bytes(&self.to_json()).map_err(|e| HarnessError::Canon {
            detail: e.to_string(),
        })?;
        Ok(canonical_hash(HashDomain::RunConfig, &bytes))
    }
}

pub(crate) fn cell_list(cells: impl Iterator<Item = Coord>) -> Vec<Value> {
    cells.map(|c| json!([c.x, c.y])).collect()
}

/// `None` input means the default preference; `"NONE"` means no
/// preference.
fn parse_preferred_action(name: Option<&str>) -> Result<Option<Direction>, ConfigError> {
    match name {
        None => Ok(Some(DEFAULT_PREFERRED_ACTION)),
        Some(n) if n.trim().eq_ignore_ascii_case(NO_PREFERENCE) => Ok(None),
        Some(n) => Direction::parse(n)
            .map(Some)
            .ok_or_else(|| ConfigError::UnknownAction {
                name: n.to_string(),
            }),
    }
}
