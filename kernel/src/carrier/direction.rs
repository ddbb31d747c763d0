//! The closed action alphabet: four compass moves.

/// A single-cell move.
///
/// `Up` increases `y`; `Right` increases `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Base enumeration order used when listing legal moves.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(dx, dy)` of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Upper-case wire name (`"UP"`, `"DOWN"`, `"LEFT"`, `"RIGHT"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }

    /// Position on the clockwise compass `Up, Right, Down, Left`.
    #[must_use]
    const fn compass_index(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// Quarter turns needed to go from heading `self` to heading `to`
    /// (0, 1 or 2; a reversal counts as two).
    #[must_use]
    pub const fn quarter_turns(self, to: Direction) -> u8 {
        let diff = self.compass_index().abs_diff(to.compass_index());
        if diff > 2 {
            4 - diff
        } else {
            diff
        }
    }

    /// Parse a direction name, ignoring ASCII case.
    ///
    /// Returns `None` for anything outside the four names.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
