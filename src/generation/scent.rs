//! # Scent Field
//!
//! Odor intensity derived from monster proximity. Every otyugh stamps the
//! same footprint onto the cells around its lair: 2 on the lair itself, 2
//! on each cell one move away, and 1 on each cell two moves away that the
//! closer tiers did not already cover. Contributions from several monsters
//! accumulate additively, and killing a monster subtracts exactly the
//! footprint it added.

use crate::world::{Cell, CellId};
use std::collections::BTreeMap;

/// Scent stamped on the lair and on distance-1 cells.
const NEAR_SCENT: u32 = 2;

/// Scent stamped on distance-2 cells.
const FAR_SCENT: u32 = 1;

/// The deduplicated (cell, intensity) contribution of one monster at `lair`.
fn footprint(cells: &[Cell], lair: CellId) -> BTreeMap<CellId, u32> {
    let mut stamped = BTreeMap::new();
    stamped.insert(lair, NEAR_SCENT);
    for &neighbor in cells[lair].exits().values() {
        stamped.entry(neighbor).or_insert(NEAR_SCENT);
    }
    for &neighbor in cells[lair].exits().values() {
        for &two_away in cells[neighbor].exits().values() {
            stamped.entry(two_away).or_insert(FAR_SCENT);
        }
    }
    stamped
}

/// Adds the scent contribution of a monster living at `lair`.
pub(crate) fn add_monster_scent(cells: &mut [Cell], lair: CellId) {
    for (id, amount) in footprint(cells, lair) {
        cells[id].add_scent(amount);
    }
}

/// Removes the scent contribution of the monster that died at `lair`,
/// leaving any overlapping contributions from other monsters intact.
pub(crate) fn remove_monster_scent(cells: &mut [Cell], lair: CellId) {
    for (id, amount) in footprint(cells, lair) {
        cells[id].reduce_scent(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{Coordinate, Direction};
    use std::collections::BTreeMap as Map;

    /// A 1x5 corridor: 0 - 1 - 2 - 3 - 4.
    fn corridor() -> Vec<Cell> {
        let links: [&[(Direction, CellId)]; 5] = [
            &[(Direction::East, 1)],
            &[(Direction::West, 0), (Direction::East, 2)],
            &[(Direction::West, 1), (Direction::East, 3)],
            &[(Direction::West, 2), (Direction::East, 4)],
            &[(Direction::West, 3)],
        ];
        links
            .iter()
            .enumerate()
            .map(|(id, list)| {
                let mut cell = Cell::new(id, Coordinate::new(0, id));
                cell.set_exits(list.iter().copied().collect::<Map<_, _>>());
                cell
            })
            .collect()
    }

    #[test]
    fn footprint_weights_fall_off_with_distance() {
        let cells = corridor();
        let stamped = footprint(&cells, 2);
        assert_eq!(stamped.get(&2), Some(&2));
        assert_eq!(stamped.get(&1), Some(&2));
        assert_eq!(stamped.get(&3), Some(&2));
        assert_eq!(stamped.get(&0), Some(&1));
        assert_eq!(stamped.get(&4), Some(&1));
    }

    #[test]
    fn lair_is_not_downgraded_by_the_distance_two_pass() {
        // 2's neighbors both lead back to 2, which must keep its full scent.
        let mut cells = corridor();
        add_monster_scent(&mut cells, 2);
        assert_eq!(cells[2].scent(), 2);
    }

    #[test]
    fn contributions_accumulate_across_monsters() {
        let mut cells = corridor();
        add_monster_scent(&mut cells, 1);
        add_monster_scent(&mut cells, 3);
        // 2 is one move from both lairs
        assert_eq!(cells[2].scent(), 4);
        // 1 is a lair itself and two moves from lair 3
        assert_eq!(cells[1].scent(), 3);
        // 0 is one move from lair 1 and out of range of lair 3
        assert_eq!(cells[0].scent(), 2);
    }

    #[test]
    fn removal_exactly_reverses_addition() {
        let mut cells = corridor();
        add_monster_scent(&mut cells, 1);
        let before: Vec<u32> = cells.iter().map(Cell::scent).collect();

        add_monster_scent(&mut cells, 3);
        remove_monster_scent(&mut cells, 3);

        let after: Vec<u32> = cells.iter().map(Cell::scent).collect();
        assert_eq!(before, after);
    }
}
