//! # Cell
//!
//! One location in the dungeon arena. A cell is a *cave* (1, 3 or 4 exits)
//! or a *tunnel* (exactly 2 exits); tunnels never hold treasure or a
//! monster. Exits are stored as neighbor ids, so the world graph has no
//! reference cycles — the [`crate::Dungeon`] resolves ids against its flat
//! cell arena.
//!
//! Callers outside the engine only ever see `&Cell`; every mutator is
//! `pub(crate)`.

use crate::world::{CellId, Coordinate, Direction, Otyugh, Treasure};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A cave or tunnel in the dungeon, addressed by its arena id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    coordinate: Coordinate,
    exits: BTreeMap<Direction, CellId>,
    treasures: Vec<Treasure>,
    arrows: u32,
    monster: Option<Otyugh>,
    scent: u32,
}

impl Cell {
    /// Creates an unconnected, empty cell. Exits are derived once the maze
    /// has been carved.
    pub(crate) fn new(id: CellId, coordinate: Coordinate) -> Self {
        Self {
            id,
            coordinate,
            exits: BTreeMap::new(),
            treasures: Vec::new(),
            arrows: 0,
            monster: None,
            scent: 0,
        }
    }

    /// The arena id of this cell.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// The fixed grid coordinate of this cell.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The direction → neighbor-id map of traversable exits.
    pub fn exits(&self) -> &BTreeMap<Direction, CellId> {
        &self.exits
    }

    /// The traversable directions out of this cell.
    pub fn possible_moves(&self) -> Vec<Direction> {
        self.exits.keys().copied().collect()
    }

    /// A tunnel is a cell with exactly two exits.
    pub fn is_tunnel(&self) -> bool {
        self.exits.len() == 2
    }

    /// Treasure pieces currently lying in this cell.
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Arrows currently lying in this cell.
    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    /// The monster occupying this cell, if any (possibly dead).
    pub fn monster(&self) -> Option<&Otyugh> {
        self.monster.as_ref()
    }

    /// Accumulated odor intensity: 0 none, 1 weak, 2 or more strong.
    pub fn scent(&self) -> u32 {
        self.scent
    }

    pub(crate) fn set_exits(&mut self, exits: BTreeMap<Direction, CellId>) {
        self.exits = exits;
    }

    pub(crate) fn add_treasures(&mut self, treasures: impl IntoIterator<Item = Treasure>) {
        self.treasures.extend(treasures);
    }

    /// Removes and returns every treasure whose kind appears in `kinds`.
    pub(crate) fn take_treasures(&mut self, kinds: &[Treasure]) -> Vec<Treasure> {
        let mut taken = Vec::new();
        self.treasures.retain(|treasure| {
            if kinds.contains(treasure) {
                taken.push(*treasure);
                false
            } else {
                true
            }
        });
        taken
    }

    pub(crate) fn add_arrows(&mut self, count: u32) {
        self.arrows += count;
    }

    /// Empties this cell's arrow stock and returns how many were taken.
    pub(crate) fn take_arrows(&mut self) -> u32 {
        std::mem::take(&mut self.arrows)
    }

    pub(crate) fn set_monster(&mut self, monster: Otyugh) {
        self.monster = Some(monster);
    }

    pub(crate) fn monster_mut(&mut self) -> Option<&mut Otyugh> {
        self.monster.as_mut()
    }

    pub(crate) fn add_scent(&mut self, amount: u32) {
        self.scent += amount;
    }

    pub(crate) fn reduce_scent(&mut self, amount: u32) {
        self.scent = self.scent.saturating_sub(amount);
    }
}
