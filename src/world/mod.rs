//! # World Module
//!
//! The spatial vocabulary of the dungeon: compass directions, grid
//! coordinates, treasure kinds, cells, monsters, and pathfinding.

pub mod cell;
pub mod grid;
pub mod monster;
pub mod path;

pub use cell::Cell;
pub use grid::Grid;
pub use monster::Otyugh;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a cell in the dungeon's flat arena (row-major: `row * cols + col`).
pub type CellId = usize;

/// The four compass directions a cell can be connected through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, in the order they are reported to callers.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction an arrow or player came *from* when traveling this way.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloomway::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::East.opposite(), Direction::West);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

/// A fixed 2-D position in the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a coordinate at the given row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The row of this coordinate.
    pub fn row(self) -> usize {
        self.row
    }

    /// The column of this coordinate.
    pub fn col(self) -> usize {
        self.col
    }
}

/// The treasure kinds a cave can hold and a player can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Treasure {
    Ruby,
    Diamond,
    Sapphire,
}

impl Treasure {
    /// Every treasure kind.
    pub const ALL: [Treasure; 3] = [Treasure::Ruby, Treasure::Diamond, Treasure::Sapphire];
}
