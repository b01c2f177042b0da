//! # Pathfinding
//!
//! Minimum hop distance between two cells, expanding only through the
//! exits carved by the maze generator — never raw grid adjacency. Used to
//! enforce the start/destination separation during generation.

use crate::world::{Cell, CellId};
use pathfinding::prelude::bfs;

/// Minimum number of moves between `from` and `to`, or `None` when `to` is
/// unreachable. `None` never happens in a correctly generated dungeon.
pub fn min_distance(cells: &[Cell], from: CellId, to: CellId) -> Option<usize> {
    bfs(
        &from,
        |&id| cells[id].exits().values().copied().collect::<Vec<_>>(),
        |&id| id == to,
    )
    .map(|path| path.len() - 1)
}
