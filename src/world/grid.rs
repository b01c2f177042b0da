//! # Grid
//!
//! The fixed rectangle of cells the maze is carved into. The grid knows
//! nothing about which connections exist — only geometry: row-major id
//! mapping and neighbor arithmetic, with wrap-around substitution at the
//! borders when the dungeon is wrapping.

use crate::world::{CellId, Coordinate, Direction};
use serde::{Deserialize, Serialize};

/// Dimensions and topology mode of the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    wrapping: bool,
}

impl Grid {
    /// Creates a grid. Dimension validation happens in `DungeonConfig`.
    pub fn new(rows: usize, cols: usize, wrapping: bool) -> Self {
        Self {
            rows,
            cols,
            wrapping,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether border cells connect to the opposite border.
    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major id of the cell at `coordinate`.
    #[inline]
    pub fn id_of(&self, coordinate: Coordinate) -> CellId {
        coordinate.row() * self.cols + coordinate.col()
    }

    /// Coordinate of the cell with the given id.
    #[inline]
    pub fn coordinate_of(&self, id: CellId) -> Coordinate {
        Coordinate::new(id / self.cols, id % self.cols)
    }

    /// The geometric neighbor of `coordinate` in `direction`.
    ///
    /// Applies wrap-around substitution on a wrapping grid; returns `None`
    /// when the move would leave a non-wrapping grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloomway::{Coordinate, Direction, Grid};
    ///
    /// let flat = Grid::new(4, 5, false);
    /// assert_eq!(flat.neighbor(Coordinate::new(0, 2), Direction::North), None);
    ///
    /// let torus = Grid::new(4, 5, true);
    /// assert_eq!(
    ///     torus.neighbor(Coordinate::new(0, 2), Direction::North),
    ///     Some(Coordinate::new(3, 2)),
    /// );
    /// ```
    pub fn neighbor(&self, coordinate: Coordinate, direction: Direction) -> Option<Coordinate> {
        let (row, col) = (coordinate.row(), coordinate.col());
        match direction {
            Direction::North => {
                if row > 0 {
                    Some(Coordinate::new(row - 1, col))
                } else if self.wrapping {
                    Some(Coordinate::new(self.rows - 1, col))
                } else {
                    None
                }
            }
            Direction::South => {
                if row + 1 < self.rows {
                    Some(Coordinate::new(row + 1, col))
                } else if self.wrapping {
                    Some(Coordinate::new(0, col))
                } else {
                    None
                }
            }
            Direction::West => {
                if col > 0 {
                    Some(Coordinate::new(row, col - 1))
                } else if self.wrapping {
                    Some(Coordinate::new(row, self.cols - 1))
                } else {
                    None
                }
            }
            Direction::East => {
                if col + 1 < self.cols {
                    Some(Coordinate::new(row, col + 1))
                } else if self.wrapping {
                    Some(Coordinate::new(row, 0))
                } else {
                    None
                }
            }
        }
    }
}
