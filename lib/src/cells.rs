//! Cells on the board.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::Not,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LifeState {
    /// The cell is not part of the habitable region of the board.
    ///
    /// This is decided when the board is constructed and never changes.
    NoLifePossible,
    /// The Dead state.
    #[default]
    Dead,
    /// The Alive state.
    Alive,
}

impl LifeState {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == LifeState::Alive
    }

    /// Whether the cell can host life at all.
    #[inline]
    pub fn is_habitable(self) -> bool {
        self != LifeState::NoLifePossible
    }
}

/// Flips the state.
///
/// [`NoLifePossible`](LifeState::NoLifePossible) stays as it is.
impl Not for LifeState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            LifeState::Alive => LifeState::Dead,
            LifeState::Dead => LifeState::Alive,
            LifeState::NoLifePossible => LifeState::NoLifePossible,
        }
    }
}

/// The coordinates of a cell in the storage grid of a board.
///
/// Both coordinates are 0-indexed. Positions are ordered row by row,
/// i.e. first by `y`, then by `x`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// The x-coordinate.
    pub x: u32,
    /// The y-coordinate.
    pub y: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Position { x, y }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(u32, u32)> for Position {
    #[inline]
    fn from((x, y): (u32, u32)) -> Self {
        Position::new(x, y)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
