//! # Maze Carving
//!
//! Randomized Kruskal construction of the dungeon graph. All potential
//! edges between geometrically adjacent cells (plus wrap-around edges on a
//! wrapping grid) are drawn in random order; union-find accepts the ones
//! that join two components until a spanning tree exists. Rejected draws
//! land in a left-over pool, and exactly `interconnectivity` extra edges
//! are then taken from that pool first, creating cycles and alternate
//! routes. The accepted edge set is finally flattened into per-cell
//! direction → neighbor-id exit maps and discarded.

use crate::random::RandomSource;
use crate::world::{CellId, Direction, Grid};
use crate::{GloomwayError, GloomwayResult};
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// An unordered pair of cell ids. Normalized on construction so that
/// equality is symmetric: `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Edge {
    a: CellId,
    b: CellId,
}

impl Edge {
    pub(crate) fn new(x: CellId, y: CellId) -> Self {
        if x <= y {
            Self { a: x, b: y }
        } else {
            Self { a: y, b: x }
        }
    }

    pub(crate) fn endpoints(self) -> (CellId, CellId) {
        (self.a, self.b)
    }
}

/// Union-find over cell ids with path compression and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, item: usize) -> usize {
        let mut root = item;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // compress the walked path
        let mut current = item;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Joins the components of `x` and `y`; returns `false` when they were
    /// already connected.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
        true
    }
}

/// Every potential undirected edge between geometric neighbors, including
/// the border-to-border edges of a wrapping grid.
fn potential_edges(grid: &Grid) -> Vec<Edge> {
    let mut edges = Vec::new();
    for id in 0..grid.cell_count() {
        let coordinate = grid.coordinate_of(id);
        if coordinate.col() + 1 < grid.cols() {
            edges.push(Edge::new(id, id + 1));
        }
        if coordinate.row() + 1 < grid.rows() {
            edges.push(Edge::new(id, id + grid.cols()));
        }
    }
    if grid.is_wrapping() {
        for row in 0..grid.rows() {
            let west = grid.id_of(crate::world::Coordinate::new(row, 0));
            let east = grid.id_of(crate::world::Coordinate::new(row, grid.cols() - 1));
            edges.push(Edge::new(west, east));
        }
        for col in 0..grid.cols() {
            let north = grid.id_of(crate::world::Coordinate::new(0, col));
            let south = grid.id_of(crate::world::Coordinate::new(grid.rows() - 1, col));
            edges.push(Edge::new(north, south));
        }
    }
    edges
}

/// Carves the maze and returns the exit map of every cell.
///
/// Fails with [`GloomwayError::InvalidConfig`] — before consuming any
/// randomness — when `interconnectivity` exceeds the number of
/// non-spanning-tree edges the grid can offer.
pub(crate) fn carve(
    grid: &Grid,
    interconnectivity: usize,
    rand: &mut dyn RandomSource,
) -> GloomwayResult<Vec<BTreeMap<Direction, CellId>>> {
    let nodes = grid.cell_count();
    let mut pool = potential_edges(grid);

    let spare = pool.len().saturating_sub(nodes - 1);
    if interconnectivity > spare {
        return Err(GloomwayError::InvalidConfig(format!(
            "interconnectivity {} exceeds the {} extra edges a {}x{} {} grid can offer",
            interconnectivity,
            spare,
            grid.rows(),
            grid.cols(),
            if grid.is_wrapping() { "wrapping" } else { "non-wrapping" },
        )));
    }

    let mut accepted: HashSet<Edge> = HashSet::with_capacity(nodes - 1 + interconnectivity);
    let mut left_over: Vec<Edge> = Vec::new();
    let mut components = DisjointSet::new(nodes);
    let mut tree_edges = 0;

    while tree_edges < nodes - 1 && !pool.is_empty() {
        let index = rand.next_in_range(0, pool.len());
        let edge = pool.swap_remove(index);
        let (x, y) = edge.endpoints();
        if components.union(x, y) {
            accepted.insert(edge);
            tree_edges += 1;
        } else {
            left_over.push(edge);
        }
    }

    if tree_edges < nodes - 1 {
        return Err(GloomwayError::GenerationFailed(
            "maze construction ran out of edges before connecting every cell".to_string(),
        ));
    }

    for _ in 0..interconnectivity {
        let edge = if left_over.is_empty() {
            let index = rand.next_in_range(0, pool.len());
            pool.swap_remove(index)
        } else {
            let index = rand.next_in_range(0, left_over.len());
            left_over.swap_remove(index)
        };
        accepted.insert(edge);
    }

    debug!(
        "carved {} edges ({} tree + {} extra) over {} cells",
        accepted.len(),
        tree_edges,
        interconnectivity,
        nodes,
    );

    Ok(derive_exits(grid, &accepted))
}

/// Flattens the accepted edge set into per-cell exit maps by probing all
/// four geometric neighbors of every cell.
fn derive_exits(grid: &Grid, accepted: &HashSet<Edge>) -> Vec<BTreeMap<Direction, CellId>> {
    (0..grid.cell_count())
        .map(|id| {
            let coordinate = grid.coordinate_of(id);
            let mut exits = BTreeMap::new();
            for direction in Direction::ALL {
                if let Some(neighbor) = grid.neighbor(coordinate, direction) {
                    let neighbor_id = grid.id_of(neighbor);
                    if accepted.contains(&Edge::new(id, neighbor_id)) {
                        exits.insert(direction, neighbor_id);
                    }
                }
            }
            exits
        })
        .collect()
}
