//! # Content Placement
//!
//! Distributes treasure, arrows, and monsters over a carved maze, and
//! picks the start/destination pair. Treasure and monsters go to caves
//! only; arrows can land anywhere. All sampling is without replacement
//! from the eligible pool.

use crate::config::{MAX_ARROWS_PER_CELL, MAX_TREASURES_PER_CAVE, MIN_START_DISTANCE};
use crate::random::RandomSource;
use crate::world::{path, Cell, CellId, Otyugh, Treasure};
use crate::{GloomwayError, GloomwayResult};

/// Ids of every cave (any cell that is not a tunnel).
pub(crate) fn cave_ids(cells: &[Cell]) -> Vec<CellId> {
    cells
        .iter()
        .filter(|cell| !cell.is_tunnel())
        .map(Cell::id)
        .collect()
}

/// Stocks `floor(caves * percentage / 100)` distinct caves with 1-3 random
/// treasure pieces each (kinds drawn with repetition).
pub(crate) fn place_treasures(cells: &mut [Cell], percentage: f64, rand: &mut dyn RandomSource) {
    let mut caves = cave_ids(cells);
    let stocked = (caves.len() as f64 * percentage / 100.0) as usize;

    for _ in 0..stocked {
        let count = rand.next_in_range(1, MAX_TREASURES_PER_CAVE + 1);
        let pieces: Vec<Treasure> = (0..count)
            .map(|_| Treasure::ALL[rand.next_in_range(0, Treasure::ALL.len())])
            .collect();
        let index = rand.next_in_range(0, caves.len());
        cells[caves.swap_remove(index)].add_treasures(pieces);
    }
}

/// Stocks `floor(cells * percentage / 100)` distinct cells — caves and
/// tunnels alike — with 1-3 arrows each.
pub(crate) fn place_arrows(cells: &mut [Cell], percentage: f64, rand: &mut dyn RandomSource) {
    let mut pool: Vec<CellId> = cells.iter().map(Cell::id).collect();
    let stocked = (pool.len() as f64 * percentage / 100.0) as usize;

    for _ in 0..stocked {
        let count = rand.next_in_range(1, MAX_ARROWS_PER_CELL as usize + 1);
        let index = rand.next_in_range(0, pool.len());
        cells[pool.swap_remove(index)].add_arrows(count as u32);
    }
}

/// Picks a start cave and a destination cave at BFS distance of at least
/// five moves, and garrisons the destination with one otyugh.
///
/// Candidate starts are sampled without replacement; for each one, every
/// cave is tried (in random order) as the destination before the start is
/// abandoned.
pub(crate) fn choose_start_and_end(
    cells: &mut [Cell],
    rand: &mut dyn RandomSource,
) -> GloomwayResult<(CellId, CellId)> {
    let mut sources = cave_ids(cells);

    while !sources.is_empty() {
        let index = rand.next_in_range(0, sources.len());
        let source = sources.swap_remove(index);
        if let Some(destination) = choose_destination(cells, source, rand) {
            cells[destination].set_monster(Otyugh::new());
            return Ok((source, destination));
        }
    }

    Err(GloomwayError::GenerationFailed(format!(
        "no pair of caves lies at least {} moves apart; the dungeon is too small or too interconnected",
        MIN_START_DISTANCE,
    )))
}

fn choose_destination(
    cells: &[Cell],
    source: CellId,
    rand: &mut dyn RandomSource,
) -> Option<CellId> {
    let mut candidates = cave_ids(cells);

    while !candidates.is_empty() {
        let index = rand.next_in_range(0, candidates.len());
        let candidate = candidates.swap_remove(index);
        match path::min_distance(cells, source, candidate) {
            Some(distance) if distance >= MIN_START_DISTANCE => return Some(candidate),
            _ => {}
        }
    }
    None
}

/// Places `extra` additional monsters on caves, excluding the start cave
/// and the destination (which already has its garrison).
pub(crate) fn place_monsters(
    cells: &mut [Cell],
    extra: usize,
    start: CellId,
    end: CellId,
    rand: &mut dyn RandomSource,
) -> GloomwayResult<()> {
    let mut candidates: Vec<CellId> = cave_ids(cells)
        .into_iter()
        .filter(|&id| id != start && id != end)
        .collect();

    for _ in 0..extra {
        if candidates.is_empty() {
            return Err(GloomwayError::GenerationFailed(
                "ran out of caves while placing monsters".to_string(),
            ));
        }
        let index = rand.next_in_range(0, candidates.len());
        cells[candidates.swap_remove(index)].set_monster(Otyugh::new());
    }
    Ok(())
}

/// Stamps the scent footprint of every placed monster onto the world.
pub(crate) fn spread_scent(cells: &mut [Cell]) {
    let lairs: Vec<CellId> = cells
        .iter()
        .filter(|cell| cell.monster().is_some())
        .map(Cell::id)
        .collect();
    for lair in lairs {
        super::scent::add_monster_scent(cells, lair);
    }
}
