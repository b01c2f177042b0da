//! # Gloomway
//!
//! A turn-based dungeon crawl engine with procedural maze generation.
//!
//! ## Architecture Overview
//!
//! Gloomway builds a connected grid-graph dungeon — a mix of caves and
//! tunnels — and then runs a synchronous, turn-based exploration simulation
//! over it. The main pieces are:
//!
//! - **World**: the grid, the flat cell arena, monsters, and pathfinding
//! - **Generation**: randomized Kruskal maze carving, content placement,
//!   and the monster scent field
//! - **Game**: the [`Dungeon`] aggregate that owns the world and the player
//!   and exposes every mutating operation (movement, combat, collection)
//! - **Randomness**: an injected [`RandomSource`] abstraction so that
//!   generation and combat outcomes are reproducible
//!
//! Rendering and command parsing are the caller's responsibility; the
//! engine only offers query operations plus a plain-text grid rendering as
//! a diagnostic convenience.

pub mod game;
pub mod generation;
pub mod random;
pub mod world;

pub use game::{Dungeon, Player};
pub use generation::DungeonConfig;
pub use random::{MaximumRandom, MinimumRandom, RandomSource, SeededRandom};
pub use world::{Cell, CellId, Coordinate, Direction, Grid, Otyugh, Treasure};

/// Core error type for the Gloomway engine.
#[derive(thiserror::Error, Debug)]
pub enum GloomwayError {
    /// A construction parameter is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// World generation could not satisfy its invariants
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Action cannot be performed from the current cell
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Game state does not permit the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Gloomway codebase.
pub type GloomwayResult<T> = Result<T, GloomwayError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Number of arrows a player starts with
    pub const STARTING_ARROWS: u32 = 3;

    /// Health percentage removed from a monster per arrow hit
    pub const ARROW_DAMAGE: u32 = 50;

    /// Minimum BFS hop distance between the start and destination caves
    pub const MIN_START_DISTANCE: usize = 5;

    /// Minimum `rows + cols` for a wrapping dungeon
    pub const MIN_WRAPPING_SPAN: usize = 7;

    /// Minimum `rows + cols` for a non-wrapping dungeon
    pub const MIN_SPAN: usize = 9;

    /// Most treasure pieces a single stocked cave can hold
    pub const MAX_TREASURES_PER_CAVE: usize = 3;

    /// Most arrows a single stocked cell can hold
    pub const MAX_ARROWS_PER_CELL: u32 = 3;
}
