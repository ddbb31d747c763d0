//! `GridSnapshot`: the room a search reads from.
//!
//! The snapshot is owned by the caller and only borrowed by a search, so it
//! cannot change while a search is in flight. Cleaning happens between
//! searches through [`GridSnapshot::clean`].

use std::collections::BTreeSet;

use crate::carrier::coord::Coord;

/// Typed failure for room construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is not positive.
    EmptyRoom { width: i32, height: i32 },
    /// A wall or dirt cell lies outside the room.
    CellOutOfBounds { cell: Coord, kind: &'static str },
    /// A dirt cell was placed on a wall.
    DirtOnWall { cell: Coord },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRoom { width, height } => {
                write!(f, "room must be non-empty, got {width}x{height}")
            }
            Self::CellOutOfBounds { cell, kind } => {
                write!(f, "{kind} cell {cell} lies outside the room")
            }
            Self::DirtOnWall { cell } => write!(f, "dirt cell {cell} is a wall"),
        }
    }
}

impl std::error::Error for GridError {}

/// A `width` × `height` room with wall and dirt cells.
///
/// Cells are addressed `(0, 0)` .. `(width - 1, height - 1)`. Sets are
/// `BTreeSet`s so iteration order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    width: i32,
    height: i32,
    walls: BTreeSet<Coord>,
    dirt: BTreeSet<Coord>,
}

impl GridSnapshot {
    /// An open room with no walls and no dirt.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyRoom`] unless both dimensions are positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::EmptyRoom { width, height });
        }
        Ok(Self {
            width,
            height,
            walls: BTreeSet::new(),
            dirt: BTreeSet::new(),
        })
    }

    /// Add wall cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfBounds`] for a wall outside the room.
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Coord>) -> Result<Self, GridError> {
        for cell in walls {
            if !self.contains(cell) {
                return Err(GridError::CellOutOfBounds { cell, kind: "wall" });
            }
            self.walls.insert(cell);
        }
        Ok(self)
    }

    /// Add dirt cells. Call after [`GridSnapshot::with_walls`].
    ///
    /// # Errors
    ///
    /// Returns [`GridError::CellOutOfBounds`] for dirt outside the room and
    /// [`GridError::DirtOnWall`] for dirt placed on a wall.
    pub fn with_dirt(mut self, dirt: impl IntoIterator<Item = Coord>) -> Result<Self, GridError> {
        for cell in dirt {
            if !self.contains(cell) {
                return Err(GridError::CellOutOfBounds { cell, kind: "dirt" });
            }
            if self.walls.contains(&cell) {
                return Err(GridError::DirtOnWall { cell });
            }
            self.dirt.insert(cell);
        }
        Ok(self)
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `cell` lies inside the room bounds.
    #[must_use]
    pub fn contains(&self, cell: Coord) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    #[must_use]
    pub fn is_wall(&self, cell: Coord) -> bool {
        self.walls.contains(&cell)
    }

    /// In bounds and not a wall.
    #[must_use]
    pub fn is_open(&self, cell: Coord) -> bool {
        self.contains(cell) && !self.is_wall(cell)
    }

    #[must_use]
    pub fn has_dirt(&self, cell: Coord) -> bool {
        self.dirt.contains(&cell)
    }

    /// Dirt cells in `(x, y)` order.
    pub fn dirt(&self) -> impl Iterator<Item = Coord> + '_ {
        self.dirt.iter().copied()
    }

    /// Wall cells in `(x, y)` order.
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.walls.iter().copied()
    }

    #[must_use]
    pub fn dirt_count(&self) -> usize {
        self.dirt.len()
    }

    /// Remove dirt from `cell`. Returns `true` if there was dirt to remove.
    pub fn clean(&mut self, cell: Coord) -> bool {
        self.dirt.remove(&cell)
    }
}
