//! # Player
//!
//! The explorer. Starts at the start cave with a bow, three crooked
//! arrows, and empty pockets. The dead flag is one-way: engines never
//! resurrect a player, they hand out a fresh copy of the dungeon instead.

use crate::config::STARTING_ARROWS;
use crate::world::{CellId, Treasure};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The player and everything they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    cell: CellId,
    treasures: BTreeMap<Treasure, u32>,
    arrows: u32,
    dead: bool,
}

impl Player {
    /// Creates a player standing at `start`. Name validation happens in
    /// `DungeonConfig`.
    pub(crate) fn new(name: String, start: CellId) -> Self {
        let treasures = Treasure::ALL.into_iter().map(|kind| (kind, 0)).collect();
        Self {
            name,
            cell: start,
            treasures,
            arrows: STARTING_ARROWS,
            dead: false,
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id of the cell the player is standing in.
    pub fn cell(&self) -> CellId {
        self.cell
    }

    /// Collected counts per treasure kind (every kind is present, starting
    /// at zero).
    pub fn collected_treasures(&self) -> &BTreeMap<Treasure, u32> {
        &self.treasures
    }

    /// Arrows left in the quiver.
    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Whether an otyugh got to the player.
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub(crate) fn relocate(&mut self, cell: CellId) {
        self.cell = cell;
    }

    pub(crate) fn record_treasure(&mut self, kind: Treasure) {
        *self.treasures.entry(kind).or_insert(0) += 1;
    }

    pub(crate) fn add_arrows(&mut self, count: u32) {
        self.arrows += count;
    }

    /// Removes one arrow from the quiver. Callers check the stock first.
    pub(crate) fn spend_arrow(&mut self) {
        debug_assert!(self.arrows > 0, "spend_arrow on an empty quiver");
        self.arrows -= 1;
    }

    pub(crate) fn kill(&mut self) {
        self.dead = true;
    }
}
