//! Move enumeration and validated move application.
//!
//! [`legal_moves`] is the environment side of a problem's `actions`, and
//! [`apply`] is the hardened `result`: it refuses a move that
//! [`legal_moves`] would not have offered instead of producing a state
//! inside a wall or outside the room.

use crate::carrier::coord::Coord;
use crate::carrier::direction::Direction;
use crate::carrier::grid::GridSnapshot;

/// Typed failure for move enumeration and application. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyFailure {
    /// The position is outside the room.
    OutOfBounds { pos: Coord },
    /// The move is not among the legal moves at `pos`.
    IllegalMove { pos: Coord, dir: Direction },
}

impl std::fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds { pos } => write!(f, "position {pos} is outside the room"),
            Self::IllegalMove { pos, dir } => write!(f, "move {dir} is not legal at {pos}"),
        }
    }
}

impl std::error::Error for ApplyFailure {}

/// Translate `pos` by one step. Pure; no bounds or wall checks.
#[must_use]
pub const fn step(pos: Coord, dir: Direction) -> Coord {
    pos.offset(dir)
}

/// The moves available at `pos`, in [`Direction::ALL`] order.
///
/// A move is legal when its target is inside the room and not a wall.
/// Recomputed on every call; walls may differ between snapshots.
///
/// # Errors
///
/// Returns [`ApplyFailure::OutOfBounds`] if `pos` itself is outside the room.
pub fn legal_moves(grid: &GridSnapshot, pos: Coord) -> Result<Vec<Direction>, ApplyFailure> {
    if !grid.contains(pos) {
        return Err(ApplyFailure::OutOfBounds { pos });
    }
    Ok(Direction::ALL
        .into_iter()
        .filter(|&dir| grid.is_open(step(pos, dir)))
        .collect())
}

/// Apply `dir` at `pos`, producing the new position.
///
/// # Errors
///
/// Returns [`ApplyFailure::OutOfBounds`] if `pos` is outside the room and
/// [`ApplyFailure::IllegalMove`] if the target is a wall or off the room.
pub fn apply(grid: &GridSnapshot, pos: Coord, dir: Direction) -> Result<Coord, ApplyFailure> {
    if !grid.contains(pos) {
        return Err(ApplyFailure::OutOfBounds { pos });
    }
    let next = step(pos, dir);
    if !grid.is_open(next) {
        return Err(ApplyFailure::IllegalMove { pos, dir });
    }
    Ok(next)
}
