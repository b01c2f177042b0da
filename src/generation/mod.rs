//! # Generation Module
//!
//! Everything that turns a configuration plus a random source into a fully
//! built world: maze carving, content placement, and the scent field. The
//! [`crate::Dungeon`] constructor is the only consumer.

pub(crate) mod maze;
pub(crate) mod placement;
pub(crate) mod scent;

use crate::config::{MIN_SPAN, MIN_WRAPPING_SPAN};
use crate::random::RandomSource;
use crate::world::{Cell, CellId, Grid};
use crate::{GloomwayError, GloomwayResult};
use log::info;
use serde::{Deserialize, Serialize};

/// The full parameter set for constructing a dungeon.
///
/// # Examples
///
/// ```
/// use gloomway::DungeonConfig;
///
/// let config = DungeonConfig::new(6, 6, 2, false, 20.0, "Aster", 2);
/// assert!(config.validate().is_ok());
///
/// let cramped = DungeonConfig::new(2, 2, 0, false, 20.0, "Aster", 1);
/// assert!(cramped.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub cols: usize,
    /// Edges added beyond the spanning tree, creating alternate routes
    pub interconnectivity: usize,
    /// Whether border cells connect to the opposite border
    pub wrapping: bool,
    /// Percentage of caves stocked with treasure and of cells stocked with
    /// arrows, in `[0, 100]`
    pub item_percentage: f64,
    /// Name of the exploring player
    pub player_name: String,
    /// Total number of otyughs, destination garrison included
    pub monster_count: usize,
}

impl DungeonConfig {
    /// Creates a configuration. Call [`DungeonConfig::validate`] (or build
    /// a dungeon, which validates internally) before trusting it.
    pub fn new(
        rows: usize,
        cols: usize,
        interconnectivity: usize,
        wrapping: bool,
        item_percentage: f64,
        player_name: impl Into<String>,
        monster_count: usize,
    ) -> Self {
        Self {
            rows,
            cols,
            interconnectivity,
            wrapping,
            item_percentage,
            player_name: player_name.into(),
            monster_count,
        }
    }

    /// A small non-wrapping world used across the test suite.
    pub fn for_testing() -> Self {
        Self::new(6, 6, 2, false, 25.0, "Tester", 1)
    }

    /// Checks every construction-time rule that does not depend on the
    /// carved maze.
    pub fn validate(&self) -> GloomwayResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GloomwayError::InvalidConfig(
                "dungeon needs at least one row and one column".to_string(),
            ));
        }
        let span = self.rows + self.cols;
        if self.wrapping && span < MIN_WRAPPING_SPAN {
            return Err(GloomwayError::InvalidConfig(format!(
                "wrapping dungeon too small: rows + cols must be at least {}",
                MIN_WRAPPING_SPAN,
            )));
        }
        if !self.wrapping && span < MIN_SPAN {
            return Err(GloomwayError::InvalidConfig(format!(
                "dungeon too small: rows + cols must be at least {}",
                MIN_SPAN,
            )));
        }
        if !self.item_percentage.is_finite() || !(0.0..=100.0).contains(&self.item_percentage) {
            return Err(GloomwayError::InvalidConfig(
                "item percentage must lie in [0, 100]".to_string(),
            ));
        }
        if self.player_name.is_empty() {
            return Err(GloomwayError::InvalidConfig(
                "player name cannot be empty".to_string(),
            ));
        }
        if self.monster_count == 0 {
            return Err(GloomwayError::InvalidConfig(
                "there must be at least one monster".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds the world: carves the maze, stocks it, and picks start and
/// destination. Returns the grid, the cell arena, and the chosen pair.
pub(crate) fn build_world(
    config: &DungeonConfig,
    rand: &mut dyn RandomSource,
) -> GloomwayResult<(Grid, Vec<Cell>, CellId, CellId)> {
    config.validate()?;

    let grid = Grid::new(config.rows, config.cols, config.wrapping);
    let exit_maps = maze::carve(&grid, config.interconnectivity, rand)?;
    let mut cells: Vec<Cell> = exit_maps
        .into_iter()
        .enumerate()
        .map(|(id, exits)| {
            let mut cell = Cell::new(id, grid.coordinate_of(id));
            cell.set_exits(exits);
            cell
        })
        .collect();

    let cave_count = placement::cave_ids(&cells).len();
    if config.monster_count >= cave_count {
        return Err(GloomwayError::InvalidConfig(format!(
            "monster count {} must stay below the number of caves ({})",
            config.monster_count, cave_count,
        )));
    }

    placement::place_treasures(&mut cells, config.item_percentage, rand);
    placement::place_arrows(&mut cells, config.item_percentage, rand);
    let (start, end) = placement::choose_start_and_end(&mut cells, rand)?;
    placement::place_monsters(&mut cells, config.monster_count - 1, start, end, rand)?;
    placement::spread_scent(&mut cells);

    info!(
        "built {}x{} world: {} caves, {} monsters, start {} -> destination {}",
        config.rows, config.cols, cave_count, config.monster_count, start, end,
    );

    Ok((grid, cells, start, end))
}
