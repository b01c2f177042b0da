//! # Dungeon Engine
//!
//! The aggregate root of a game: the carved grid, the flat cell arena, the
//! chosen start/destination pair, the player, and the injected random
//! source. Construction builds the whole world up front; afterwards only
//! engine operations mutate cell and player state, one synchronous turn at
//! a time.
//!
//! Invalid operations (moving through a wall, shooting with an empty
//! quiver, moving after the game ended) fail with an error and leave all
//! state exactly as it was.

use crate::config::ARROW_DAMAGE;
use crate::generation::{self, scent, DungeonConfig};
use crate::random::RandomSource;
use crate::world::{path, Cell, CellId, Direction, Grid, Otyugh, Treasure};
use crate::{GloomwayError, GloomwayResult};
use log::debug;
use std::fmt;

use super::Player;

/// A fully built, playable dungeon.
pub struct Dungeon {
    grid: Grid,
    cells: Vec<Cell>,
    start: CellId,
    end: CellId,
    interconnectivity: usize,
    player: Player,
    rand: Box<dyn RandomSource>,
}

impl Dungeon {
    /// Generates a new world from `config`, drawing every random decision
    /// from `rand`. All configuration errors surface here; nothing is
    /// retried internally.
    pub fn new(config: &DungeonConfig, mut rand: Box<dyn RandomSource>) -> GloomwayResult<Self> {
        let (grid, cells, start, end) = generation::build_world(config, rand.as_mut())?;
        let player = Player::new(config.player_name.clone(), start);
        Ok(Self {
            grid,
            cells,
            start,
            end,
            interconnectivity: config.interconnectivity,
            player,
            rand,
        })
    }

    /// An unplayed dungeon with the same layout and the current cell
    /// contents: treasures, arrows, and monster health carry over as they
    /// are right now, while the player restarts at the start cave with a
    /// full quiver and empty pockets.
    pub fn fresh_copy(&self, rand: Box<dyn RandomSource>) -> Self {
        Self {
            grid: self.grid,
            cells: self.cells.clone(),
            start: self.start,
            end: self.end,
            interconnectivity: self.interconnectivity,
            player: Player::new(self.player.name().to_string(), self.start),
            rand,
        }
    }

    /// The grid geometry of this dungeon.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Edges beyond the spanning tree this dungeon was built with.
    pub fn interconnectivity(&self) -> usize {
        self.interconnectivity
    }

    /// The exploring player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The cell the player is standing in.
    pub fn current_cell(&self) -> &Cell {
        &self.cells[self.player.cell()]
    }

    /// The cave the player started from.
    pub fn start_cell(&self) -> &Cell {
        &self.cells[self.start]
    }

    /// The cave the player is trying to reach.
    pub fn destination_cell(&self) -> &Cell {
        &self.cells[self.end]
    }

    /// The cell with the given id, if it exists.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// The whole cell arena, ordered by id.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether the player is standing in the destination cave.
    pub fn is_destination_reached(&self) -> bool {
        self.player.cell() == self.end
    }

    /// Minimum number of moves between two cells, or `None` if either id
    /// is unknown or no route exists.
    pub fn distance_between(&self, from: CellId, to: CellId) -> Option<usize> {
        if from >= self.cells.len() || to >= self.cells.len() {
            return None;
        }
        path::min_distance(&self.cells, from, to)
    }

    /// Moves the player one cell and resolves any monster waiting there.
    ///
    /// Returns `Ok(false)` when the monster kills the player, `Ok(true)`
    /// otherwise. Fails without changing state when `direction` is not an
    /// exit of the current cell, or when the game is already over.
    pub fn move_player(&mut self, direction: Direction) -> GloomwayResult<bool> {
        let Some(&target) = self.current_cell().exits().get(&direction) else {
            return Err(GloomwayError::InvalidAction(format!(
                "no opening to the {} from this cell",
                direction,
            )));
        };
        if self.is_destination_reached() || self.player.is_dead() {
            return Err(GloomwayError::InvalidState(
                "the game is already over".to_string(),
            ));
        }

        self.player.relocate(target);

        match self.cells[target].monster().map(Otyugh::health) {
            None => Ok(true),
            // a corpse is not dangerous
            Some(0) => Ok(true),
            Some(health) if health < 100 => {
                // injured otyugh: even odds of escaping
                if self.rand.next_in_range(0, 2) == 0 {
                    self.player.kill();
                    Ok(false)
                } else {
                    Ok(true)
                }
            }
            Some(_) => {
                self.player.kill();
                Ok(false)
            }
        }
    }

    /// Shoots one arrow `distance` caves along `direction`.
    ///
    /// Distance is consumed only when the arrow enters a cave; tunnels
    /// route it through their other exit for free. Returns `Ok(true)` on a
    /// hit. Fails without changing state when `direction` is not an exit
    /// of the current cell or the quiver is empty.
    pub fn shoot_arrow(&mut self, distance: u32, direction: Direction) -> GloomwayResult<bool> {
        if !self.current_cell().exits().contains_key(&direction) {
            return Err(GloomwayError::InvalidAction(format!(
                "no opening to the {} to shoot through",
                direction,
            )));
        }
        if self.player.arrows() == 0 {
            return Err(GloomwayError::InvalidState(
                "the quiver is empty".to_string(),
            ));
        }
        self.player.spend_arrow();

        let mut cell_id = self.player.cell();
        let mut travel = direction;
        let mut remaining = distance;

        loop {
            if remaining == 0 {
                return Ok(self.strike(cell_id));
            }

            let cell = &self.cells[cell_id];
            if cell.is_tunnel() {
                if !cell.exits().contains_key(&travel) {
                    // the arrow bends through the tunnel's other exit
                    let came_from = travel.opposite();
                    match cell.exits().keys().copied().find(|&exit| exit != came_from) {
                        Some(exit) => travel = exit,
                        None => return Ok(false),
                    }
                }
            } else if !cell.exits().contains_key(&travel) {
                // flew straight into a wall
                return Ok(false);
            }

            let next = cell.exits()[&travel];
            if !self.cells[next].is_tunnel() {
                remaining -= 1;
            }
            cell_id = next;
        }
    }

    /// Lands an arrow in `cell_id`: wounds a live monster there, removing
    /// its scent footprint if this kills it.
    fn strike(&mut self, cell_id: CellId) -> bool {
        let killed = match self.cells[cell_id].monster_mut() {
            Some(monster) if monster.is_alive() => {
                monster.reduce_health(ARROW_DAMAGE);
                Some(!monster.is_alive())
            }
            _ => None,
        };
        match killed {
            Some(true) => {
                debug!("otyugh in cell {} slain", cell_id);
                scent::remove_monster_scent(&mut self.cells, cell_id);
                true
            }
            Some(false) => true,
            None => false,
        }
    }

    /// Moves every treasure at the player's cell into their pockets.
    pub fn collect_all_treasures(&mut self) {
        self.collect_treasures(&Treasure::ALL);
    }

    /// Moves the treasures of the given kinds at the player's cell into
    /// their pockets; kinds not present are a no-op.
    pub fn collect_treasures(&mut self, kinds: &[Treasure]) {
        let taken = self.cells[self.player.cell()].take_treasures(kinds);
        for kind in taken {
            self.player.record_treasure(kind);
        }
    }

    /// Moves every arrow at the player's cell into the quiver.
    pub fn pick_arrows(&mut self) {
        let count = self.cells[self.player.cell()].take_arrows();
        self.player.add_arrows(count);
    }

    fn marker(&self, cell: &Cell) -> char {
        if cell.id() == self.player.cell() {
            'P'
        } else if cell.id() == self.start {
            'S'
        } else if cell.id() == self.end {
            'D'
        } else if cell.is_tunnel() {
            'T'
        } else if cell.monster().is_some() {
            'O'
        } else {
            'C'
        }
    }
}

/// Plain-text grid rendering: a diagnostic convenience, not a protocol.
/// Each grid row becomes three text lines showing the north, west/east,
/// and south connections around a one-character cell marker.
impl fmt::Display for Dungeon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            let row_cells = || {
                (0..self.grid.cols())
                    .map(move |col| &self.cells[row * self.grid.cols() + col])
            };
            for cell in row_cells() {
                if cell.exits().contains_key(&Direction::North) {
                    write!(f, "     |     ")?;
                } else {
                    write!(f, "           ")?;
                }
            }
            writeln!(f)?;
            for cell in row_cells() {
                if cell.exits().contains_key(&Direction::West) {
                    write!(f, "--- ")?;
                } else {
                    write!(f, "    ")?;
                }
                write!(f, "[{}]", self.marker(cell))?;
                if cell.exits().contains_key(&Direction::East) {
                    write!(f, " ---")?;
                } else {
                    write!(f, "    ")?;
                }
            }
            writeln!(f)?;
            for cell in row_cells() {
                if cell.exits().contains_key(&Direction::South) {
                    write!(f, "     |     ")?;
                } else {
                    write!(f, "           ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
